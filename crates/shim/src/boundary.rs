//! Conversions between the C calling convention and [`Shim`](crate::Shim).
//!
//! The exported symbols are thin wrappers over these; the errno write is a
//! sink so the same code runs against newlib's `__errno()` or a test cell.
use core::ffi::{c_int, c_void};
use core::slice;

use types::{SizeT, SysResult};

/// `Ok(v)` passes through. `Err(e)` reports `e` to `set_errno` and becomes
/// `-1`.
pub fn sentinel<T: From<i8>>(result: SysResult<T>, set_errno: impl FnOnce(c_int)) -> T {
    match result {
        Ok(value) => value,
        Err(errno) => {
            set_errno(errno.as_raw());
            T::from(-1)
        }
    }
}

/// [`sentinel`] for calls that return nothing on success: `0` or `-1`.
pub fn status(result: SysResult<()>, set_errno: impl FnOnce(c_int)) -> c_int {
    sentinel(result.map(|()| 0), set_errno)
}

/// The `len` bytes at `ptr`. Null or zero-length is an empty slice.
///
/// # Safety
/// A non-null `ptr` must be valid for reads of `len` bytes for `'a`.
pub unsafe fn bytes<'a>(ptr: *const c_void, len: SizeT) -> &'a [u8] {
    if ptr.is_null() || len == 0 {
        return &[];
    }
    unsafe { slice::from_raw_parts(ptr as *const u8, len) }
}

/// The record behind `ptr`, or `scratch` when `ptr` is null.
///
/// # Safety
/// A non-null `ptr` must be aligned and valid for writes of one `T` for `'a`.
pub unsafe fn record_or<'a, T>(ptr: *mut T, scratch: &'a mut T) -> &'a mut T {
    match unsafe { ptr.as_mut() } {
        Some(record) => record,
        None => scratch,
    }
}
