use core::ffi::c_int;
use core::fmt;

/// Error classifications reported through `errno`.
///
/// Only the codes the shim can actually produce are listed. Values match
/// newlib's `sys/errno.h`.
#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Errno {
    /// No such file or directory.
    NoEntry = 2,
    /// No child processes.
    NoChild = 10,
    /// Resource temporarily unavailable.
    Again = 11,
    /// Not enough space.
    NoMemory = 12,
    /// Invalid argument.
    Invalid = 22,
    /// Illegal seek.
    SeekPipe = 29,
}

pub type SysResult<T> = core::result::Result<T, Errno>;

impl Errno {
    pub const fn as_raw(self) -> c_int {
        self as c_int
    }

    pub const fn from_raw(raw: c_int) -> Option<Self> {
        match raw {
            2 => Some(Errno::NoEntry),
            10 => Some(Errno::NoChild),
            11 => Some(Errno::Again),
            12 => Some(Errno::NoMemory),
            22 => Some(Errno::Invalid),
            29 => Some(Errno::SeekPipe),
            _ => None,
        }
    }

    /// Symbolic name as spelled in `errno.h`.
    pub const fn name(self) -> &'static str {
        match self {
            Errno::NoEntry => "ENOENT",
            Errno::NoChild => "ECHILD",
            Errno::Again => "EAGAIN",
            Errno::NoMemory => "ENOMEM",
            Errno::Invalid => "EINVAL",
            Errno::SeekPipe => "ESPIPE",
        }
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Errno::NoEntry => "No such file or directory",
            Errno::NoChild => "No children",
            Errno::Again => "No more processes",
            Errno::NoMemory => "Not enough space",
            Errno::Invalid => "Invalid argument",
            Errno::SeekPipe => "Illegal seek",
        };
        write!(f, "{} ({})", msg, self.name())
    }
}
