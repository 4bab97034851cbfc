#![no_std]
//! C ABI shapes shared between the syscall shim and host-side tooling.
//!
//! Layouts follow newlib's headers for RV32 so the shim can read and write
//! the records the C library hands it without any translation.

pub mod errno;
pub use errno::{Errno, SysResult};

pub mod abi;
pub use abi::*;

pub mod platform;
pub use platform::{PlatformConfig, TimesStatus};
