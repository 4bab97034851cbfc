//! Timing. The only clock is whatever the host answers to a trap.
use core::ffi::{c_int, c_long};

use log::trace;

use types::{CLOCK_FAILURE, ClockT, MICROS_PER_SEC, SC_CLK_TCK, TimesStatus, Timeb, Tms};

use super::Shim;
use crate::hardware::{Hardware, Trap};

impl<H: Hardware> Shim<H> {
    /// Fills `buf` with the time elapsed since the first call, all of it
    /// charged as user time. The system and child fields are always zero.
    ///
    /// The return value depends on [`TimesStatus`]: the reference platform
    /// reports `(clock_t)-1` even though the record is valid.
    pub fn times(&self, buf: &mut Tms) -> ClockT {
        let origin = self.ctx.time_origin_or_init(|| self.hw.wall_clock());
        let now = self.hw.wall_clock();

        // A clock that steps backwards reads as no time passed.
        let elapsed = now.micros_since(&origin).max(0);
        let ticks = micros_to_ticks(elapsed, self.config().clock_ticks_per_sec);
        trace!("times: {} us elapsed, {} ticks", elapsed, ticks);

        buf.tms_utime = ticks as ClockT;
        buf.tms_stime = 0;
        buf.tms_cutime = 0;
        buf.tms_cstime = 0;

        match self.config().times_status {
            TimesStatus::Sentinel => CLOCK_FAILURE,
            TimesStatus::Elapsed => ticks as ClockT,
        }
    }

    /// Not implemented on the target: traps to the host and never returns.
    pub fn gettimeofday(&self) -> ! {
        self.hw.trap(Trap::WallClock)
    }

    pub fn ftime(&self, tp: &mut Timeb) -> c_int {
        tp.time = 0;
        tp.millitm = 0;
        0
    }

    /// Only the clock tick rate is known; every other key is `-1`.
    pub fn sysconf(&self, name: c_int) -> c_long {
        match name {
            SC_CLK_TCK => self.config().clock_ticks_per_sec,
            _ => -1,
        }
    }
}

/// Scales microseconds to ticks without overflowing for cycle-rate clocks:
/// whole seconds and the sub-second remainder are scaled separately.
pub fn micros_to_ticks(micros: i64, ticks_per_sec: c_long) -> i64 {
    let rate = (ticks_per_sec as i64).max(0);
    (micros / MICROS_PER_SEC)
        .saturating_mul(rate)
        .saturating_add((micros % MICROS_PER_SEC).saturating_mul(rate) / MICROS_PER_SEC)
}
