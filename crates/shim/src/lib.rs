#![cfg_attr(target_arch = "riscv32", no_std)]
//! newlib syscall layer for a bare-metal RV32 simulator.
//!
//! newlib expects a POSIX kernel underneath it. This crate stands in for one:
//! console output goes to a memory-mapped register, `sbrk` bumps a cursor
//! from the linker's `_end`, the two calls that need the host (`gettimeofday`
//! and `_exit`) execute `ebreak`, and everything else fails with the errno
//! newlib's documentation prescribes for a system without files or processes.
//!
//! The logic lives in [`Shim`], generic over the [`Hardware`] it drives. On
//! riscv32 the crate also exports the C symbols, backed by a process-wide
//! `Shim<MmioMachine>`. Host builds get [`HostMachine`] instead so the shim
//! can be exercised without a simulator.

pub mod boundary;
pub mod console;
pub mod context;
pub mod env;
pub mod hardware;
pub mod syscall;

#[cfg(target_arch = "riscv32")]
pub mod global;
#[cfg(target_arch = "riscv32")]
pub mod mmio;

#[cfg(not(target_arch = "riscv32"))]
pub mod host;

#[cfg(all(target_arch = "riscv32", target_os = "none"))]
pub mod abi;

#[cfg(all(target_arch = "riscv32", target_os = "none", feature = "panic-handler"))]
mod panic;

pub use console::Console;
pub use context::RuntimeContext;
pub use hardware::{Hardware, Trap};
pub use syscall::Shim;
pub use types::{Errno, PlatformConfig, SysResult, TimesStatus};

#[cfg(target_arch = "riscv32")]
pub use mmio::MmioMachine;

#[cfg(not(target_arch = "riscv32"))]
pub use host::{HostMachine, TrapTaken};
