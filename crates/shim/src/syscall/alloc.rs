use log::trace;

use super::Shim;
use crate::hardware::Hardware;

impl<H: Hardware> Shim<H> {
    /// Moves the program break by `incr` bytes and returns the old break,
    /// i.e. the start of the newly usable region.
    ///
    /// The break starts at the linker's `_end` on first use. There is no
    /// upper bound here; a host that cares enforces it.
    pub fn sbrk(&self, incr: isize) -> usize {
        let prev = match self.ctx.heap_end() {
            Some(end) => end,
            None => self.hw.heap_base(),
        };
        let next = prev.wrapping_add_signed(incr);
        self.ctx.set_heap_end(next);
        trace!("sbrk: incr={} break 0x{:x} -> 0x{:x}", incr, prev, next);
        prev
    }

    /// Current break, `None` before the first `sbrk`.
    pub fn heap_end(&self) -> Option<usize> {
        self.ctx.heap_end()
    }
}
