//! File management. There is no file system: the console is the only
//! stream, it cannot seek, and reading from it is always at end-of-file.
use core::ffi::{c_char, c_int, c_void};
use core::ptr;

use log::{debug, trace};

use types::{Errno, GidT, ModeT, OffT, SizeT, SsizeT, SysResult, UidT};

use super::Shim;
use crate::hardware::Hardware;

const FAILURE: c_int = -1;

impl<H: Hardware> Shim<H> {
    pub fn open(&self, _name: *const c_char, _flags: c_int, _mode: c_int) -> SysResult<c_int> {
        self.refuse("open", Errno::NoEntry)
    }

    pub fn openat(
        &self,
        _dirfd: c_int,
        _name: *const c_char,
        _flags: c_int,
        _mode: c_int,
    ) -> SysResult<c_int> {
        self.refuse("openat", Errno::NoEntry)
    }

    pub fn lseek(&self, _file: c_int, _offset: OffT, _whence: c_int) -> SysResult<OffT> {
        self.refuse("lseek", Errno::SeekPipe)
    }

    /// Always end-of-file, whatever was asked for.
    pub fn read(&self, _file: c_int, _buf: *mut c_void, _len: SizeT) -> SsizeT {
        0
    }

    /// Sends `data` to the console register one byte per store, in order.
    /// The descriptor is ignored: every stream is the console.
    pub fn write(&self, file: c_int, data: &[u8]) -> SsizeT {
        for &byte in data {
            self.hw.write_console(byte);
        }
        trace!("write: fd {} sent {} bytes to console", file, data.len());
        data.len() as SsizeT
    }

    pub fn fstat(&self, _file: c_int, _st: *mut c_void) -> SysResult<()> {
        self.refuse("fstat", Errno::NoEntry)
    }

    pub fn stat(&self, _file: *const c_char, _st: *mut c_void) -> SysResult<()> {
        self.refuse("stat", Errno::NoEntry)
    }

    pub fn lstat(&self, _file: *const c_char, _st: *mut c_void) -> SysResult<()> {
        self.refuse("lstat", Errno::NoEntry)
    }

    pub fn fstatat(
        &self,
        _dirfd: c_int,
        _file: *const c_char,
        _st: *mut c_void,
        _flags: c_int,
    ) -> SysResult<()> {
        self.refuse("fstatat", Errno::NoEntry)
    }

    pub fn access(&self, _file: *const c_char, _mode: c_int) -> SysResult<()> {
        self.refuse("access", Errno::NoEntry)
    }

    pub fn faccessat(
        &self,
        _dirfd: c_int,
        _file: *const c_char,
        _mode: c_int,
        _flags: c_int,
    ) -> SysResult<()> {
        self.refuse("faccessat", Errno::NoEntry)
    }

    pub fn close(&self, _file: c_int) -> c_int {
        0
    }

    pub fn link(&self, _old_name: *const c_char, _new_name: *const c_char) -> SysResult<()> {
        self.refuse("link", Errno::NoEntry)
    }

    pub fn unlink(&self, _name: *const c_char) -> SysResult<()> {
        self.refuse("unlink", Errno::NoEntry)
    }

    /// Every stream is the console.
    pub fn isatty(&self, _file: c_int) -> c_int {
        1
    }

    // The remaining calls fail without a classification; errno is left as is.

    pub fn utime(&self, _path: *const c_char, _times: *const c_void) -> c_int {
        debug!("utime: unsupported");
        FAILURE
    }

    pub fn chown(&self, _path: *const c_char, _owner: UidT, _group: GidT) -> c_int {
        debug!("chown: unsupported");
        FAILURE
    }

    pub fn chmod(&self, _path: *const c_char, _mode: ModeT) -> c_int {
        debug!("chmod: unsupported");
        FAILURE
    }

    pub fn chdir(&self, _path: *const c_char) -> c_int {
        debug!("chdir: unsupported");
        FAILURE
    }

    pub fn getcwd(&self, _buf: *mut c_char, _size: SizeT) -> *mut c_char {
        debug!("getcwd: unsupported");
        ptr::null_mut()
    }
}
