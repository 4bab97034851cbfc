use core::fmt::Write;

use crate::abi::shim;
use crate::console::Console;

/// Status handed to the host when Rust code inside the runtime panics.
const PANIC_EXIT_STATUS: i32 = 101;

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    let shim = shim();
    let mut console = Console::new(shim);

    if let Some(location) = info.location() {
        let _ = write!(
            console,
            "panic at {}:{}:{}: ",
            location.file(),
            location.line(),
            location.column()
        );
    }
    let _ = writeln!(console, "{}", info.message());

    shim.exit(PANIC_EXIT_STATUS)
}
