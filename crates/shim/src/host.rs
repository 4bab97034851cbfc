//! Host-side stand-in for the simulated machine.
//!
//! Console stores are captured in order, the heap base is whatever the test
//! picks, and a trap unwinds with a [`TrapTaken`] payload instead of leaving
//! the process, so tests can observe it with `catch_unwind`.
use std::cell::{Cell, RefCell};
use std::ffi::c_long;
use std::time::{SystemTime, UNIX_EPOCH};

use types::{PlatformConfig, Timeval};

use crate::hardware::{Hardware, Trap};

/// Panic payload raised when the shim traps on the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TrapTaken(pub Trap);

#[derive(Debug)]
enum Clock {
    Manual(Cell<Timeval>),
    System,
}

#[derive(Debug)]
pub struct HostMachine {
    config: PlatformConfig,
    heap_base: usize,
    console: RefCell<Vec<u8>>,
    clock: Clock,
    clock_reads: Cell<usize>,
}

impl HostMachine {
    /// Where `_end` usually lands for small test programs.
    pub const DEFAULT_HEAP_BASE: usize = 0x0002_0000;
    /// Start of the manual clock.
    pub const EPOCH: Timeval = Timeval::new(1_700_000_000, 0);

    pub fn new(config: PlatformConfig) -> Self {
        Self {
            config,
            heap_base: Self::DEFAULT_HEAP_BASE,
            console: RefCell::new(Vec::new()),
            clock: Clock::Manual(Cell::new(Self::EPOCH)),
            clock_reads: Cell::new(0),
        }
    }

    pub fn with_heap_base(mut self, heap_base: usize) -> Self {
        self.heap_base = heap_base;
        self
    }

    /// Answer wall-clock queries from the host's real clock.
    pub fn with_system_clock(mut self) -> Self {
        self.clock = Clock::System;
        self
    }

    /// Moves the manual clock forward. No effect on the system clock.
    pub fn advance(&self, micros: i64) {
        if let Clock::Manual(now) = &self.clock {
            let t = now.get();
            let total = t.tv_usec as i64 + micros;
            now.set(Timeval::new(
                t.tv_sec + total.div_euclid(1_000_000),
                total.rem_euclid(1_000_000) as c_long,
            ));
        }
    }

    /// Every byte stored to the console register so far, in order.
    pub fn console_output(&self) -> Vec<u8> {
        self.console.borrow().clone()
    }

    pub fn console_string(&self) -> String {
        String::from_utf8_lossy(&self.console.borrow()).into_owned()
    }

    /// Number of stores made to the console register.
    pub fn device_stores(&self) -> usize {
        self.console.borrow().len()
    }

    pub fn clock_reads(&self) -> usize {
        self.clock_reads.get()
    }
}

impl Default for HostMachine {
    fn default() -> Self {
        Self::new(PlatformConfig::default())
    }
}

impl Hardware for HostMachine {
    fn platform(&self) -> &PlatformConfig {
        &self.config
    }

    fn write_console(&self, byte: u8) {
        self.console.borrow_mut().push(byte);
    }

    fn heap_base(&self) -> usize {
        self.heap_base
    }

    fn trap(&self, reason: Trap) -> ! {
        log::debug!("host: trap taken ({:?})", reason);
        std::panic::panic_any(TrapTaken(reason))
    }

    fn wall_clock(&self) -> Timeval {
        self.clock_reads.set(self.clock_reads.get() + 1);
        match &self.clock {
            Clock::Manual(now) => now.get(),
            Clock::System => {
                let since_epoch = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap_or_default();
                Timeval::new(
                    since_epoch.as_secs() as i64,
                    since_epoch.subsec_micros() as c_long,
                )
            }
        }
    }
}
