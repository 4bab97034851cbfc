//! The C symbols newlib links against.
//!
//! Names and signatures are newlib's. Each export forwards to the one
//! process-wide [`Shim`]; failures become `-1` (or null) with `errno` set
//! through newlib's `__errno()`.
use core::ffi::{c_char, c_int, c_long, c_void};

use types::{
    ClockT, GidT, ModeT, OffT, PidT, PlatformConfig, SizeT, SsizeT, SysResult, Timeb, Tms, UidT,
};

use crate::boundary;
use crate::global::Global;
use crate::mmio::MmioMachine;
use crate::syscall::Shim;

static SHIM: Global<Shim<MmioMachine>> =
    Global::new(Shim::new(MmioMachine::new(PlatformConfig::PICORV32)));

unsafe extern "C" {
    fn __errno() -> *mut c_int;
}

/// The process-wide shim.
pub fn shim() -> &'static Shim<MmioMachine> {
    // Single hart: nothing else can be inside the shim.
    unsafe { SHIM.get() }
}

fn set_errno(raw: c_int) {
    unsafe { *__errno() = raw };
}

fn sentinel<T: From<i8>>(result: SysResult<T>) -> T {
    boundary::sentinel(result, set_errno)
}

fn status(result: SysResult<()>) -> c_int {
    boundary::status(result, set_errno)
}

#[unsafe(no_mangle)]
pub extern "C" fn open(name: *const c_char, flags: c_int, mode: c_int) -> c_int {
    sentinel(shim().open(name, flags, mode))
}

#[unsafe(no_mangle)]
pub extern "C" fn openat(dirfd: c_int, name: *const c_char, flags: c_int, mode: c_int) -> c_int {
    sentinel(shim().openat(dirfd, name, flags, mode))
}

#[unsafe(no_mangle)]
pub extern "C" fn lseek(file: c_int, ptr: OffT, dir: c_int) -> OffT {
    sentinel(shim().lseek(file, ptr, dir))
}

#[unsafe(no_mangle)]
pub extern "C" fn read(file: c_int, ptr: *mut c_void, len: SizeT) -> SsizeT {
    shim().read(file, ptr, len)
}

/// A null `ptr` is an empty buffer: nothing is sent and the result is `0`,
/// even when `len > 0`.
///
/// # Safety
/// A non-null `ptr` must be valid for reads of `len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn write(file: c_int, ptr: *const c_void, len: SizeT) -> SsizeT {
    shim().write(file, unsafe { boundary::bytes(ptr, len) })
}

#[unsafe(no_mangle)]
pub extern "C" fn fstat(file: c_int, st: *mut c_void) -> c_int {
    status(shim().fstat(file, st))
}

#[unsafe(no_mangle)]
pub extern "C" fn stat(file: *const c_char, st: *mut c_void) -> c_int {
    status(shim().stat(file, st))
}

#[unsafe(no_mangle)]
pub extern "C" fn lstat(file: *const c_char, st: *mut c_void) -> c_int {
    status(shim().lstat(file, st))
}

#[unsafe(no_mangle)]
pub extern "C" fn fstatat(dirfd: c_int, file: *const c_char, st: *mut c_void, flags: c_int) -> c_int {
    status(shim().fstatat(dirfd, file, st, flags))
}

#[unsafe(no_mangle)]
pub extern "C" fn access(file: *const c_char, mode: c_int) -> c_int {
    status(shim().access(file, mode))
}

#[unsafe(no_mangle)]
pub extern "C" fn faccessat(dirfd: c_int, file: *const c_char, mode: c_int, flags: c_int) -> c_int {
    status(shim().faccessat(dirfd, file, mode, flags))
}

#[unsafe(no_mangle)]
pub extern "C" fn close(file: c_int) -> c_int {
    shim().close(file)
}

#[unsafe(no_mangle)]
pub extern "C" fn link(old_name: *const c_char, new_name: *const c_char) -> c_int {
    status(shim().link(old_name, new_name))
}

#[unsafe(no_mangle)]
pub extern "C" fn unlink(name: *const c_char) -> c_int {
    status(shim().unlink(name))
}

#[unsafe(no_mangle)]
pub extern "C" fn execve(
    name: *const c_char,
    argv: *const *const c_char,
    env: *const *const c_char,
) -> c_int {
    sentinel(shim().execve(name, argv, env))
}

#[unsafe(no_mangle)]
pub extern "C" fn fork() -> PidT {
    sentinel(shim().fork())
}

#[unsafe(no_mangle)]
pub extern "C" fn getpid() -> PidT {
    shim().getpid()
}

#[unsafe(no_mangle)]
pub extern "C" fn kill(pid: PidT, sig: c_int) -> c_int {
    status(shim().kill(pid, sig))
}

#[unsafe(no_mangle)]
pub extern "C" fn wait(status_ptr: *mut c_int) -> PidT {
    sentinel(shim().wait(status_ptr))
}

#[unsafe(no_mangle)]
pub extern "C" fn isatty(file: c_int) -> c_int {
    shim().isatty(file)
}

/// # Safety
/// `buf` must be null or valid for writes of one `struct tms`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn times(buf: *mut Tms) -> ClockT {
    let mut scratch = Tms::default();
    shim().times(unsafe { boundary::record_or(buf, &mut scratch) })
}

#[unsafe(no_mangle)]
pub extern "C" fn gettimeofday(_tp: *mut c_void, _tzp: *mut c_void) -> c_int {
    shim().gettimeofday()
}

/// # Safety
/// `tp` must be null or valid for writes of one `struct timeb`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ftime(tp: *mut Timeb) -> c_int {
    let mut scratch = Timeb::default();
    shim().ftime(unsafe { boundary::record_or(tp, &mut scratch) })
}

#[unsafe(no_mangle)]
pub extern "C" fn utime(path: *const c_char, times: *const c_void) -> c_int {
    shim().utime(path, times)
}

#[unsafe(no_mangle)]
pub extern "C" fn chown(path: *const c_char, owner: UidT, group: GidT) -> c_int {
    shim().chown(path, owner, group)
}

#[unsafe(no_mangle)]
pub extern "C" fn chmod(path: *const c_char, mode: ModeT) -> c_int {
    shim().chmod(path, mode)
}

#[unsafe(no_mangle)]
pub extern "C" fn chdir(path: *const c_char) -> c_int {
    shim().chdir(path)
}

#[unsafe(no_mangle)]
pub extern "C" fn getcwd(buf: *mut c_char, size: SizeT) -> *mut c_char {
    shim().getcwd(buf, size)
}

#[unsafe(no_mangle)]
pub extern "C" fn sysconf(name: c_int) -> c_long {
    shim().sysconf(name)
}

#[unsafe(no_mangle)]
pub extern "C" fn sbrk(incr: isize) -> *mut c_void {
    shim().sbrk(incr) as *mut c_void
}

#[unsafe(no_mangle)]
pub extern "C" fn _exit(exit_status: c_int) -> ! {
    shim().exit(exit_status)
}

#[cfg(feature = "environ")]
pub use environ_export::environ;

#[cfg(feature = "environ")]
mod environ_export {
    use core::ffi::c_char;

    use crate::env::EMPTY_ENVIRONMENT;

    #[repr(transparent)]
    pub struct Environ(*const *const c_char);

    unsafe impl Sync for Environ {}

    #[allow(non_upper_case_globals)]
    #[unsafe(no_mangle)]
    pub static environ: Environ = Environ(EMPTY_ENVIRONMENT.as_ptr());
}
