// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use bitflags::bitflags;

bitflags! {
    /// Bits of the LED control register.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LedMask: u16 {
        const LED1 = 1 << 0;
        const LED2 = 1 << 1;
    }
}

/// `Leds` is a structure representing the LED control register.
///
/// The register is write-only: a store replaces the whole register value,
/// so every write decides the state of both LEDs at once.
pub struct Leds {
    control_addr: *mut u16,
}

impl Leds {
    /// The `new` function creates a new `Leds` instance with the given
    /// register address. It's an unsafe function due to the usage of raw
    /// pointers.
    pub const unsafe fn new(control_addr: *mut u16) -> Leds {
        Leds { control_addr }
    }

    /// Turns on exactly the LEDs in `mask` and turns off all others.
    pub fn set(&mut self, mask: LedMask) {
        unsafe {
            self.control_addr.write_volatile(mask.bits());
        }
    }
}
