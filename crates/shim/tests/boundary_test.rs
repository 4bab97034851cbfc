mod common;

use std::cell::Cell;
use std::ffi::{c_int, c_void};
use std::ptr;

use common::machine;
use shim::Errno;
use shim::boundary::{bytes, record_or, sentinel, status};
use types::{CLOCK_FAILURE, SysResult, Timeb, Tms};

#[test]
fn test_sentinel_sets_errno_and_returns_minus_one() {
    let errno = Cell::new(0);

    let ret: c_int = sentinel(Err(Errno::NoEntry), |raw| errno.set(raw));

    assert_eq!(ret, -1);
    assert_eq!(errno.get(), 2);
}

#[test]
fn test_sentinel_passes_success_through() {
    let errno = Cell::new(0);

    let ret: c_int = sentinel(Ok(7), |raw| errno.set(raw));

    assert_eq!(ret, 7);
    assert_eq!(errno.get(), 0);
}

#[test]
fn test_status_maps_unit_results() {
    let errno = Cell::new(0);

    assert_eq!(status(Ok(()), |raw| errno.set(raw)), 0);
    assert_eq!(errno.get(), 0);

    assert_eq!(status(Err(Errno::Invalid), |raw| errno.set(raw)), -1);
    assert_eq!(errno.get(), 22);
}

#[test]
fn test_refused_call_reaches_errno_sink() {
    let shim = machine();
    let errno = Cell::new(0);

    let result: SysResult<_> = shim.lseek(1, 0, 0);
    let ret = sentinel(result, |raw| errno.set(raw));

    assert_eq!(ret, -1);
    assert_eq!(errno.get(), Errno::SeekPipe.as_raw());
}

#[test]
fn test_null_or_empty_write_buffer_is_empty() {
    let shim = machine();
    let text = b"hi";

    let null = unsafe { bytes(ptr::null(), 16) };
    let zero = unsafe { bytes(text.as_ptr() as *const c_void, 0) };
    assert!(null.is_empty());
    assert!(zero.is_empty());

    assert_eq!(shim.write(1, null), 0);
    assert_eq!(shim.write(1, zero), 0);
    assert!(shim.hardware().console_output().is_empty());

    let full = unsafe { bytes(text.as_ptr() as *const c_void, text.len()) };
    assert_eq!(shim.write(1, full), 2);
    assert_eq!(shim.hardware().console_string(), "hi");
}

#[test]
fn test_null_tms_goes_to_scratch() {
    let shim = machine();
    let mut scratch = Tms::default();

    let ret = shim.times(unsafe { record_or(ptr::null_mut(), &mut scratch) });

    assert_eq!(ret, CLOCK_FAILURE);
    assert_eq!(scratch, Tms::default());
    assert!(shim.context().time_origin().is_some());
}

#[test]
fn test_null_timeb_goes_to_scratch() {
    let shim = machine();
    let mut scratch = Timeb {
        time: 5,
        millitm: 5,
        timezone: 0,
        dstflag: 0,
    };

    let ret = shim.ftime(unsafe { record_or(ptr::null_mut(), &mut scratch) });

    assert_eq!(ret, 0);
    assert_eq!((scratch.time, scratch.millitm), (0, 0));
}

#[test]
fn test_non_null_record_is_used() {
    let shim = machine();
    let mut target = Tms {
        tms_utime: 9,
        ..Tms::default()
    };
    let mut scratch = Tms {
        tms_stime: 9,
        ..Tms::default()
    };

    shim.times(unsafe { record_or(&raw mut target, &mut scratch) });

    assert_eq!(target, Tms::default());
    assert_eq!(scratch.tms_stime, 9);
}
