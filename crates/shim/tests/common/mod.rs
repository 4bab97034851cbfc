#![allow(dead_code)]

use std::panic::{AssertUnwindSafe, catch_unwind};

use shim::{HostMachine, PlatformConfig, Shim, Trap, TrapTaken};

pub fn machine() -> Shim<HostMachine> {
    Shim::new(HostMachine::default())
}

pub fn machine_with(config: PlatformConfig) -> Shim<HostMachine> {
    Shim::new(HostMachine::new(config))
}

/// Runs `f`, which must trap, and returns the trap it took.
pub fn expect_trap(f: impl FnOnce()) -> Trap {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => panic!("expected a trap, but the call returned"),
        Err(payload) => match payload.downcast_ref::<TrapTaken>() {
            Some(TrapTaken(trap)) => *trap,
            None => panic!("call panicked without trapping"),
        },
    }
}
