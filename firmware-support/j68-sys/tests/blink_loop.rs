// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

//! Host-side checks of the blink loop. The device handles are pointed at
//! plain memory words instead of the SOC's register map, which the
//! constructors permit for exactly this purpose.

use core::ptr::addr_of_mut;

use test_strategy::proptest;

use j68_sys::blink::{Blinker, LedPattern};
use j68_sys::delay;
use j68_sys::leds::Leds;
use j68_sys::test_cell::TestCell;

/// The step the cycle is in after `n` iterations from reset.
fn pattern_at(n: usize) -> LedPattern {
    let mut pattern = LedPattern::first();
    for _ in 0..n % 4 {
        pattern = pattern.next();
    }
    pattern
}

#[proptest]
fn state_tracks_iteration_count(#[strategy(0usize..=4096)] n: usize) {
    let mut led_reg: u16 = 0;
    let mut test_word: u32 = 0;

    let mut blinker = unsafe {
        Blinker::new(
            Leds::new(addr_of_mut!(led_reg)),
            TestCell::new(addr_of_mut!(test_word)),
        )
    };

    for _ in 0..n {
        blinker.step();
    }

    assert_eq!(blinker.counter(), n as u32);
    assert_eq!(blinker.pattern(), pattern_at(n));

    if n > 0 {
        // Iteration k stores counter value k, then the mask for cycle
        // position k mod 4, so the words still hold iteration n - 1.
        assert_eq!(test_word, (n - 1) as u32);
        assert_eq!(led_reg, pattern_at(n - 1).mask().bits());
    } else {
        assert_eq!(test_word, 0);
        assert_eq!(led_reg, 0);
    }
}

#[proptest]
fn each_step_writes_counter_then_mask(#[strategy(1usize..=64)] n: usize) {
    let mut led_reg: u16 = 0;
    let mut test_word: u32 = 0;

    let mut blinker = unsafe {
        Blinker::new(
            Leds::new(addr_of_mut!(led_reg)),
            TestCell::new(addr_of_mut!(test_word)),
        )
    };

    for i in 0..n {
        blinker.step();
        assert_eq!(test_word, i as u32);
        assert_eq!(led_reg, pattern_at(i).mask().bits());
    }
}

#[test]
fn first_four_register_values_match_the_cycle() {
    let mut led_reg: u16 = 0;
    let mut test_word: u32 = 0;

    let mut blinker = unsafe {
        Blinker::new(
            Leds::new(addr_of_mut!(led_reg)),
            TestCell::new(addr_of_mut!(test_word)),
        )
    };

    let mut written = [0u16; 4];
    for value in written.iter_mut() {
        blinker.step();
        *value = led_reg;
    }

    assert_eq!(written, [0b01, 0b10, 0b11, 0b00]);
}

#[test]
fn busy_wait_zero_returns_immediately() {
    delay::busy_wait(0);
}

#[test]
fn busy_wait_returns_for_the_firmware_delay_count() {
    delay::busy_wait(50_000);
}
