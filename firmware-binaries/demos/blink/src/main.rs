#![no_std]
#![cfg_attr(not(test), no_main)]

// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use j68_sys::blink::Blinker;
use j68_sys::Peripherals;

/// Busy-wait iterations between LED updates.
const DELAY_COUNT: u32 = 50_000;

const PERIPHERALS: Peripherals = unsafe { Peripherals::new() };

// The boot code shipped with the j68 examples sets up the stack and vector
// table, then calls `main`.
#[cfg_attr(not(test), no_mangle)]
pub extern "C" fn main() -> ! {
    let Peripherals { leds, test_cell } = PERIPHERALS;
    Blinker::new(leds, test_cell).run(DELAY_COUNT)
}

#[cfg(not(test))]
#[panic_handler]
fn panic_handler(_info: &core::panic::PanicInfo) -> ! {
    loop {
        continue;
    }
}
