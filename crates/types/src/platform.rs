//! Target-platform parameters.
//!
//! The shim never hardcodes an address or a tick rate; it reads them from the
//! `PlatformConfig` its hardware reports, so retargeting means supplying a
//! different config.

use core::ffi::c_long;

use crate::abi::CLOCKS_PER_SEC;

/// What `times` returns after filling the record.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimesStatus {
    /// Always return `(clock_t)-1`, as the reference runtime does.
    Sentinel,
    /// Return the elapsed user ticks.
    Elapsed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Address of the write-only console register.
    pub console_addr: usize,
    /// Value reported for `sysconf(_SC_CLK_TCK)` and used to scale `times`.
    pub clock_ticks_per_sec: c_long,
    pub times_status: TimesStatus,
}

impl PlatformConfig {
    /// The picorv32 testbench: console at `0x1000_0000`, newlib's default
    /// tick rate.
    pub const PICORV32: PlatformConfig = PlatformConfig {
        console_addr: 0x1000_0000,
        clock_ticks_per_sec: CLOCKS_PER_SEC,
        times_status: TimesStatus::Sentinel,
    };

    pub const fn with_console_addr(mut self, console_addr: usize) -> Self {
        self.console_addr = console_addr;
        self
    }

    pub const fn with_clock_ticks(mut self, clock_ticks_per_sec: c_long) -> Self {
        self.clock_ticks_per_sec = clock_ticks_per_sec;
        self
    }

    pub const fn with_times_status(mut self, times_status: TimesStatus) -> Self {
        self.times_status = times_status;
        self
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self::PICORV32
    }
}
