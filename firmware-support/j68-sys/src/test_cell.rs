// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

/// `TestCell` is a structure representing the SRAM word reserved for
/// verifying that CPU stores reach memory. Nothing on the SOC reads it
/// back; an external observer (emulator or debugger) does.
pub struct TestCell {
    addr: *mut u32,
}

impl TestCell {
    /// The `new` function creates a new `TestCell` instance with the given
    /// word address. It's an unsafe function due to the usage of raw
    /// pointers.
    pub const unsafe fn new(addr: *mut u32) -> TestCell {
        TestCell { addr }
    }

    /// Stores `value` to the test word.
    pub fn write(&mut self, value: u32) {
        unsafe {
            self.addr.write_volatile(value);
        }
    }
}
