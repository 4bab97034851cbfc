//! The real machine: a console register, the linker's `_end` and `ebreak`.
use core::arch::asm;
use core::ptr;

use types::PlatformConfig;

use crate::hardware::{Hardware, Trap};

unsafe extern "C" {
    // Defined by the linker script: first byte after .bss.
    static _end: u8;
}

#[derive(Debug)]
pub struct MmioMachine {
    config: PlatformConfig,
}

impl MmioMachine {
    pub const fn new(config: PlatformConfig) -> Self {
        Self { config }
    }
}

impl Hardware for MmioMachine {
    fn platform(&self) -> &PlatformConfig {
        &self.config
    }

    fn write_console(&self, byte: u8) {
        // The register is a full word; the byte goes out zero-extended.
        let reg = self.config.console_addr as *mut u32;
        unsafe { ptr::write_volatile(reg, byte as u32) };
    }

    fn heap_base(&self) -> usize {
        &raw const _end as usize
    }

    #[inline(never)]
    fn trap(&self, reason: Trap) -> ! {
        match reason {
            // The host reads the status from a0.
            Trap::Exit(status) => unsafe {
                asm!("ebreak", in("a0") status, options(nomem, nostack));
            },
            Trap::WallClock => unsafe {
                asm!("ebreak", options(nomem, nostack));
            },
        }
        loop {}
    }
}
