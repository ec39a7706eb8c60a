//! Status LED blink timer
//!
//! Owned exclusively by the render loop; never shared with the button
//! context. The render loop calls [`BlinkTimer::step`] once per 100ms
//! pass, so a full on+off cycle spans two passes: 200ms period, the
//! intended 5Hz toggle rate.

use dekad_hal::gpio::OutputPin;

/// Write-then-flip blink state for the status LED
pub struct BlinkTimer {
    led_on: bool,
}

impl BlinkTimer {
    pub const fn new() -> Self {
        Self { led_on: false }
    }

    /// Drive one blink step
    ///
    /// Writes the current state to the pin, then flips it for the next
    /// step. The first step after construction writes "off".
    pub fn step<P: OutputPin>(&mut self, pin: &mut P) {
        pin.set_state(self.led_on);
        self.led_on = !self.led_on;
    }

    /// State the next `step` will write
    pub fn is_on(&self) -> bool {
        self.led_on
    }
}

impl Default for BlinkTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;

    #[derive(Default)]
    struct RecordingPin {
        state: bool,
        writes: Vec<bool>,
    }

    impl OutputPin for RecordingPin {
        fn set_high(&mut self) {
            self.state = true;
            self.writes.push(true);
        }

        fn set_low(&mut self) {
            self.state = false;
            self.writes.push(false);
        }

        fn is_set_high(&self) -> bool {
            self.state
        }
    }

    #[test]
    fn two_steps_make_one_full_cycle() {
        let mut pin = RecordingPin::default();
        let mut blink = BlinkTimer::new();

        assert!(!blink.is_on());
        blink.step(&mut pin);
        assert!(blink.is_on());
        blink.step(&mut pin);
        assert!(!blink.is_on());

        assert_eq!(pin.writes, [false, true]);
    }

    #[test]
    fn state_alternates_every_step() {
        let mut pin = RecordingPin::default();
        let mut blink = BlinkTimer::new();

        for _ in 0..6 {
            blink.step(&mut pin);
        }
        assert_eq!(pin.writes, [false, true, false, true, false, true]);
    }
}
