//! The newlib operating-system interface.
//!
//! Calls split into those that return a value on success (`read`, `write`,
//! `getpid`, `isatty`, `sbrk`) and those that return zero (`close`, `ftime`).
//! Anything the machine cannot do fails with the errno the newlib docs give
//! for a system without files or processes, and the code is also recorded
//! in the context's error slot.
use log::debug;

use types::{Errno, PlatformConfig, SysResult};

use crate::context::RuntimeContext;
use crate::env::{EMPTY_ENVIRONMENT, EnvList};
use crate::hardware::Hardware;

pub mod alloc;
pub mod file;
pub mod process;
pub mod time;

#[derive(Debug)]
pub struct Shim<H: Hardware> {
    hw: H,
    ctx: RuntimeContext,
}

impl<H: Hardware> Shim<H> {
    pub const fn new(hw: H) -> Self {
        Self {
            hw,
            ctx: RuntimeContext::new(),
        }
    }

    pub fn hardware(&self) -> &H {
        &self.hw
    }

    pub fn context(&self) -> &RuntimeContext {
        &self.ctx
    }

    pub fn config(&self) -> &PlatformConfig {
        self.hw.platform()
    }

    pub fn last_error(&self) -> Option<Errno> {
        self.ctx.last_error()
    }

    pub fn environment(&self) -> &'static EnvList<1> {
        &EMPTY_ENVIRONMENT
    }

    fn refuse<T>(&self, call: &str, errno: Errno) -> SysResult<T> {
        debug!("{}: refused with {}", call, errno.name());
        self.ctx.set_last_error(errno);
        Err(errno)
    }
}
