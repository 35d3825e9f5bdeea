// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use crate::delay;
use crate::leds::{LedMask, Leds};
use crate::test_cell::TestCell;

/// Position in the four-step LED cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedPattern {
    /// LED1 on, LED2 off.
    Led1,
    /// LED1 off, LED2 on.
    Led2,
    /// Both LEDs on.
    Both,
    /// Both LEDs off.
    Off,
}

impl LedPattern {
    /// The step the cycle starts in after reset.
    pub const fn first() -> LedPattern {
        LedPattern::Led1
    }

    /// Bitmask written to the LED control register for this step.
    pub const fn mask(self) -> LedMask {
        match self {
            LedPattern::Led1 => LedMask::LED1,
            LedPattern::Led2 => LedMask::LED2,
            LedPattern::Both => LedMask::LED1.union(LedMask::LED2),
            LedPattern::Off => LedMask::empty(),
        }
    }

    /// The step that follows this one, wrapping back to
    /// [`LedPattern::Led1`] after [`LedPattern::Off`].
    pub const fn next(self) -> LedPattern {
        match self {
            LedPattern::Led1 => LedPattern::Led2,
            LedPattern::Led2 => LedPattern::Both,
            LedPattern::Both => LedPattern::Off,
            LedPattern::Off => LedPattern::Led1,
        }
    }
}

/// Drives the LED cycle and the SRAM write check.
///
/// Owns the device handles together with the loop state, so a single
/// iteration can be exercised on its own with handles that point at plain
/// memory.
pub struct Blinker {
    leds: Leds,
    test_cell: TestCell,
    pattern: LedPattern,
    counter: u32,
}

impl Blinker {
    pub const fn new(leds: Leds, test_cell: TestCell) -> Blinker {
        Blinker {
            leds,
            test_cell,
            pattern: LedPattern::first(),
            counter: 0,
        }
    }

    /// Runs a single iteration: stores the iteration counter to the SRAM
    /// test cell, writes the mask for the current step to the LED register,
    /// then advances the step and the counter. The counter wraps at
    /// `u32::MAX`.
    pub fn step(&mut self) {
        self.test_cell.write(self.counter);
        self.leds.set(self.pattern.mask());
        self.pattern = self.pattern.next();
        self.counter = self.counter.wrapping_add(1);
    }

    /// The step the next call to [`Blinker::step`] will display.
    pub fn pattern(&self) -> LedPattern {
        self.pattern
    }

    /// Number of completed iterations, modulo wraparound.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Runs the blink loop forever, busy-waiting for `delay_count`
    /// iterations between steps. Firmware never returns from this; the SOC
    /// stops it by reset only.
    pub fn run(mut self, delay_count: u32) -> ! {
        loop {
            self.step();
            delay::busy_wait(delay_count);
        }
    }
}
