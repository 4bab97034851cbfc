//! Scalar aliases and records from newlib's `sys/types.h`, `sys/time.h`,
//! `sys/times.h` and `sys/timeb.h`.

use core::ffi::{c_int, c_long, c_short, c_ulong, c_ushort};

pub type SizeT = usize;
pub type SsizeT = isize;
pub type OffT = c_long;
pub type PidT = c_int;
pub type ModeT = u32;
pub type UidT = c_ushort;
pub type GidT = c_ushort;
pub type TimeT = i64;
pub type SusecondsT = c_long;
pub type ClockT = c_ulong;

pub const STDIN_FILENO: c_int = 0;
pub const STDOUT_FILENO: c_int = 1;
pub const STDERR_FILENO: c_int = 2;

pub const SEEK_SET: c_int = 0;
pub const SEEK_CUR: c_int = 1;
pub const SEEK_END: c_int = 2;

/// `sysconf` key for clock ticks per second.
pub const SC_CLK_TCK: c_int = 2;

/// newlib's default `CLOCKS_PER_SEC`.
pub const CLOCKS_PER_SEC: c_long = 1000;

pub const MICROS_PER_SEC: i64 = 1_000_000;

/// `(clock_t)-1`, the failure value of `times`.
pub const CLOCK_FAILURE: ClockT = ClockT::MAX;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Timeval {
    pub tv_sec: TimeT,
    pub tv_usec: SusecondsT,
}

impl Timeval {
    pub const fn new(tv_sec: TimeT, tv_usec: SusecondsT) -> Self {
        Self { tv_sec, tv_usec }
    }

    /// Microseconds elapsed from `origin` to `self`. Negative if `self` is
    /// earlier; saturates at the `i64` range.
    pub fn micros_since(&self, origin: &Timeval) -> i64 {
        self.tv_sec
            .saturating_sub(origin.tv_sec)
            .saturating_mul(MICROS_PER_SEC)
            .saturating_add(self.tv_usec as i64 - origin.tv_usec as i64)
    }
}

/// Process times, in clock ticks.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tms {
    pub tms_utime: ClockT,
    pub tms_stime: ClockT,
    pub tms_cutime: ClockT,
    pub tms_cstime: ClockT,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Timeb {
    pub time: TimeT,
    pub millitm: c_ushort,
    pub timezone: c_short,
    pub dstflag: c_short,
}
