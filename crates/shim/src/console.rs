use core::fmt;

use types::STDOUT_FILENO;

use crate::hardware::Hardware;
use crate::syscall::Shim;

/// `core::fmt::Write` over the shim's `write`, for Rust-side diagnostics
/// that need to reach the console without going through newlib.
pub struct Console<'a, H: Hardware> {
    shim: &'a Shim<H>,
}

impl<'a, H: Hardware> Console<'a, H> {
    pub fn new(shim: &'a Shim<H>) -> Self {
        Self { shim }
    }
}

impl<H: Hardware> fmt::Write for Console<'_, H> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.shim.write(STDOUT_FILENO, s.as_bytes());
        Ok(())
    }
}
