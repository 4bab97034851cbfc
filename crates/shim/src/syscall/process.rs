//! Process management. There is exactly one process and no way to make
//! another, so these are the minimal stubs from the newlib docs.
use core::ffi::{c_char, c_int};

use log::debug;

use types::{Errno, PidT, SysResult};

use super::Shim;
use crate::hardware::{Hardware, Trap};

/// The one and only process.
pub const PID: PidT = 1;

impl<H: Hardware> Shim<H> {
    pub fn execve(
        &self,
        _name: *const c_char,
        _argv: *const *const c_char,
        _env: *const *const c_char,
    ) -> SysResult<c_int> {
        self.refuse("execve", Errno::NoMemory)
    }

    pub fn fork(&self) -> SysResult<PidT> {
        self.refuse("fork", Errno::Again)
    }

    pub fn getpid(&self) -> PidT {
        PID
    }

    pub fn kill(&self, _pid: PidT, _sig: c_int) -> SysResult<()> {
        self.refuse("kill", Errno::Invalid)
    }

    pub fn wait(&self, _status: *mut c_int) -> SysResult<PidT> {
        self.refuse("wait", Errno::NoChild)
    }

    /// Terminate without cleanup. The host takes over and does not hand
    /// control back.
    pub fn exit(&self, status: c_int) -> ! {
        debug!("_exit: status {}", status);
        self.hw.trap(Trap::Exit(status))
    }
}
