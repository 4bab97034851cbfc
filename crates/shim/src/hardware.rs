use core::ffi::c_int;

use types::{PlatformConfig, Timeval};

/// Why control is being handed to the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Trap {
    /// `_exit` with the given status.
    Exit(c_int),
    /// A wall-clock query. The target has no clock of its own.
    WallClock,
}

/// The machine underneath the shim.
///
/// Every side effect the shim has goes through one of these methods, so a
/// different board (or a test double) only needs a new implementation.
pub trait Hardware {
    fn platform(&self) -> &PlatformConfig;

    /// One store to the console register.
    fn write_console(&self, byte: u8);

    /// First free address after static storage (the linker's `_end`).
    fn heap_base(&self) -> usize;

    /// Hand control to the host. Never returns.
    fn trap(&self, reason: Trap) -> !;

    /// Current wall-clock time. The target has no readable clock, so by
    /// default this traps and never returns.
    fn wall_clock(&self) -> Timeval {
        self.trap(Trap::WallClock)
    }
}
