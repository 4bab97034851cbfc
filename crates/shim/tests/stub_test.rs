mod common;

use std::ffi::{CString, c_char, c_int};
use std::ptr;

use common::{expect_trap, machine};
use shim::{Errno, Trap};
use types::{SEEK_CUR, SEEK_SET};

fn paths() -> Vec<(CString, *const c_char)> {
    ["", "/", "/etc/passwd", "relative/file.txt"]
        .iter()
        .map(|p| {
            let owned = CString::new(*p).unwrap();
            let raw = owned.as_ptr();
            (owned, raw)
        })
        .collect()
}

fn path_ptrs(paths: &[(CString, *const c_char)]) -> Vec<*const c_char> {
    let mut out: Vec<*const c_char> = paths.iter().map(|(_, p)| *p).collect();
    out.push(ptr::null());
    out
}

#[test]
fn test_open_family_is_enoent() {
    let shim = machine();
    let owned = paths();

    for path in path_ptrs(&owned) {
        assert_eq!(shim.open(path, 0, 0), Err(Errno::NoEntry));
        assert_eq!(shim.openat(-100, path, 0o101, 0o644), Err(Errno::NoEntry));
        assert_eq!(shim.last_error(), Some(Errno::NoEntry));
    }
}

#[test]
fn test_stat_family_is_enoent() {
    let shim = machine();
    let owned = paths();
    let mut st = [0u8; 128];
    let st_ptr = st.as_mut_ptr().cast();

    assert_eq!(shim.fstat(1, st_ptr), Err(Errno::NoEntry));
    for path in path_ptrs(&owned) {
        assert_eq!(shim.stat(path, st_ptr), Err(Errno::NoEntry));
        assert_eq!(shim.lstat(path, ptr::null_mut()), Err(Errno::NoEntry));
        assert_eq!(shim.fstatat(3, path, st_ptr, 0), Err(Errno::NoEntry));
    }
    assert!(st.iter().all(|&b| b == 0));
}

#[test]
fn test_access_link_unlink_are_enoent() {
    let shim = machine();
    let owned = paths();

    for path in path_ptrs(&owned) {
        assert_eq!(shim.access(path, 0), Err(Errno::NoEntry));
        assert_eq!(shim.faccessat(-100, path, 4, 0), Err(Errno::NoEntry));
        assert_eq!(shim.link(path, path), Err(Errno::NoEntry));
        assert_eq!(shim.unlink(path), Err(Errno::NoEntry));
    }
}

#[test]
fn test_lseek_is_espipe() {
    let shim = machine();

    assert_eq!(shim.lseek(1, 0, SEEK_SET), Err(Errno::SeekPipe));
    assert_eq!(shim.lseek(0, -5, SEEK_CUR), Err(Errno::SeekPipe));
    assert_eq!(shim.last_error(), Some(Errno::SeekPipe));
}

#[test]
fn test_process_calls() {
    let shim = machine();
    let argv: [*const c_char; 1] = [ptr::null()];
    let mut status: c_int = 0;

    assert_eq!(
        shim.execve(ptr::null(), argv.as_ptr(), argv.as_ptr()),
        Err(Errno::NoMemory)
    );
    assert_eq!(shim.fork(), Err(Errno::Again));
    assert_eq!(shim.kill(1, 9), Err(Errno::Invalid));
    assert_eq!(shim.wait(&mut status), Err(Errno::NoChild));
    assert_eq!(shim.wait(ptr::null_mut()), Err(Errno::NoChild));
    assert_eq!(status, 0);
}

#[test]
fn test_getpid_is_constant() {
    let shim = machine();
    for _ in 0..5 {
        assert_eq!(shim.getpid(), 1);
    }
}

#[test]
fn test_error_slot_tracks_latest_failure() {
    let shim = machine();
    assert_eq!(shim.last_error(), None);

    let _ = shim.fork();
    assert_eq!(shim.last_error(), Some(Errno::Again));

    let _ = shim.lseek(0, 0, SEEK_SET);
    assert_eq!(shim.last_error(), Some(Errno::SeekPipe));

    // A success leaves the previous value in place.
    shim.getpid();
    assert_eq!(shim.last_error(), Some(Errno::SeekPipe));
}

#[test]
fn test_unclassified_stubs_leave_errno_alone() {
    let shim = machine();
    let _ = shim.kill(0, 0);
    let owned = paths();

    for path in path_ptrs(&owned) {
        assert_eq!(shim.utime(path, ptr::null()), -1);
        assert_eq!(shim.chown(path, 0, 0), -1);
        assert_eq!(shim.chmod(path, 0o755), -1);
        assert_eq!(shim.chdir(path), -1);
    }

    let mut buf = [0 as c_char; 64];
    assert!(shim.getcwd(buf.as_mut_ptr(), buf.len()).is_null());
    assert!(shim.getcwd(ptr::null_mut(), 0).is_null());
    assert_eq!(shim.last_error(), Some(Errno::Invalid));
}

#[test]
fn test_exit_traps_with_status() {
    let shim = machine();
    shim.write(1, b"bye\n");

    assert_eq!(expect_trap(|| shim.exit(3)), Trap::Exit(3));
    assert_eq!(expect_trap(|| shim.exit(-1)), Trap::Exit(-1));
    assert_eq!(shim.hardware().console_string(), "bye\n");
}

#[test]
fn test_environment_is_empty() {
    let shim = machine();
    let env = shim.environment();

    assert!(env.is_empty());
    assert!(unsafe { *env.as_ptr() }.is_null());
}
