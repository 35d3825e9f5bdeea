// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

#![no_std]

pub mod blink;
pub mod delay;
pub mod leds;
pub mod test_cell;

use leds::Leds;
use test_cell::TestCell;

/// Address of the LED control register.
pub const LED_ADDR: *mut u16 = 0xFF00_0000 as *mut u16;

/// Address of the SRAM word reserved for checking that stores reach memory.
pub const TEST_CELL_ADDR: *mut u32 = 0x0000_4000 as *mut u32;

/// The memory-mapped devices of the j68 SOC.
pub struct Peripherals {
    pub leds: Leds,
    pub test_cell: TestCell,
}

impl Peripherals {
    /// Creates handles for the j68 devices at their fixed addresses.
    ///
    /// # Safety
    ///
    /// Must only be called on a j68 SOC, or an emulation of one, where the
    /// LED control register and the SRAM test cell are mapped at
    /// [`LED_ADDR`] and [`TEST_CELL_ADDR`].
    pub const unsafe fn new() -> Peripherals {
        Peripherals {
            leds: Leds::new(LED_ADDR),
            test_cell: TestCell::new(TEST_CELL_ADDR),
        }
    }
}
