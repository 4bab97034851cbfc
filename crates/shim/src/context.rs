//! Process-wide mutable state of the shim.
//!
//! Three cells, each lazily filled and never torn down. The target has a
//! single hart, so plain `Cell`s are enough; the owner decides where the
//! context lives (a `static` on the target, a local in tests).

use core::cell::Cell;

use types::{Errno, Timeval};

#[derive(Debug, Default)]
pub struct RuntimeContext {
    heap_end: Cell<Option<usize>>,
    time_origin: Cell<Option<Timeval>>,
    last_error: Cell<Option<Errno>>,
}

impl RuntimeContext {
    pub const fn new() -> Self {
        Self {
            heap_end: Cell::new(None),
            time_origin: Cell::new(None),
            last_error: Cell::new(None),
        }
    }

    /// Current program break, `None` until the first `sbrk`.
    pub fn heap_end(&self) -> Option<usize> {
        self.heap_end.get()
    }

    pub(crate) fn set_heap_end(&self, end: usize) {
        self.heap_end.set(Some(end));
    }

    /// Zero point for `times`, `None` until the first query.
    pub fn time_origin(&self) -> Option<Timeval> {
        self.time_origin.get()
    }

    /// Returns the origin, capturing it with `now` if this is the first query.
    pub(crate) fn time_origin_or_init(&self, now: impl FnOnce() -> Timeval) -> Timeval {
        match self.time_origin.get() {
            Some(origin) => origin,
            None => {
                let origin = now();
                self.time_origin.set(Some(origin));
                origin
            }
        }
    }

    /// Classification of the most recent failing call. Stale after a success.
    pub fn last_error(&self) -> Option<Errno> {
        self.last_error.get()
    }

    pub(crate) fn set_last_error(&self, errno: Errno) {
        self.last_error.set(Some(errno));
    }
}
