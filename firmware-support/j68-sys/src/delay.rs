// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use core::hint::spin_loop;
use core::ptr::addr_of_mut;

/// Busy-waits for `count` iterations.
///
/// The induction variable is read and written through a volatile pointer,
/// which pins the loop to exactly `count` increments regardless of
/// optimization level. A `count` of zero returns immediately. Wall-clock
/// duration depends on the core clock and is not calibrated.
pub fn busy_wait(count: u32) {
    let mut iterations: u32 = 0;
    let counter = addr_of_mut!(iterations);
    unsafe {
        while counter.read_volatile() < count {
            counter.write_volatile(counter.read_volatile() + 1);
            spin_loop();
        }
    }
}
