//! Shared display state
//!
//! The one record shared between the button-event context and the render
//! loop: the current digit and a dirty flag. Single producer (the button
//! task via [`SharedDisplay::apply`]), single consumer (the render loop
//! via [`SharedDisplay::take_frame`]).
//!
//! Ordering discipline: the producer writes digit-then-dirty with a
//! Release store on the flag; the consumer reads dirty-then-digit with an
//! Acquire swap. A consumer that observes `dirty` therefore also observes
//! the digit value that set it, so a stale digit is never rendered.
//!
//! The atomics come from `portable-atomic`: RP2040 (thumbv6m) has no
//! native atomic read-modify-write, so the flag swap falls back to a
//! critical section on target while staying lock-free on the host.

use portable_atomic::{AtomicBool, AtomicU8, Ordering};

use crate::button::Button;

/// Digit value plus a dirty flag, safe to share across task contexts
///
/// The digit is always in `[0, 9]`; button presses wrap it modulo 10.
/// Several accepted presses between two render passes collapse into a
/// single render of the latest digit - frames are state snapshots, not a
/// queue.
pub struct SharedDisplay {
    digit: AtomicU8,
    dirty: AtomicBool,
}

impl SharedDisplay {
    /// Initial state: digit 0 with the dirty flag set, so the first
    /// render pass always draws a frame.
    pub const fn new() -> Self {
        Self {
            digit: AtomicU8::new(0),
            dirty: AtomicBool::new(true),
        }
    }

    /// Apply an accepted button press
    ///
    /// Button A increments, button B decrements, both modulo 10. Only the
    /// button context may call this (single writer), which is what makes
    /// the plain load-modify-store on `digit` sound.
    pub fn apply(&self, button: Button) {
        let digit = self.digit.load(Ordering::Relaxed);
        let next = match button {
            Button::A => (digit + 1) % 10,
            Button::B => (digit + 9) % 10,
        };
        // Digit first, then the flag: the Release store pairs with the
        // Acquire swap in `take_frame`.
        self.digit.store(next, Ordering::Relaxed);
        self.dirty.store(true, Ordering::Release);
    }

    /// Consume the dirty flag
    ///
    /// Returns the digit to render when the state changed since the last
    /// call, `None` when the displayed frame is current. Only the render
    /// loop may call this (single reader).
    pub fn take_frame(&self) -> Option<u8> {
        if self.dirty.swap(false, Ordering::Acquire) {
            Some(self.digit.load(Ordering::Relaxed))
        } else {
            None
        }
    }

    /// Current digit value (for logging)
    pub fn digit(&self) -> u8 {
        self.digit.load(Ordering::Relaxed)
    }
}

impl Default for SharedDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn initial_state_forces_a_render() {
        let display = SharedDisplay::new();
        assert_eq!(display.take_frame(), Some(0));
        assert_eq!(display.take_frame(), None);
    }

    #[test]
    fn increment_wraps_nine_to_zero() {
        let display = SharedDisplay::new();
        display.take_frame();
        for _ in 0..9 {
            display.apply(Button::A);
        }
        assert_eq!(display.digit(), 9);

        display.take_frame();
        display.apply(Button::A);
        assert_eq!(display.take_frame(), Some(0));
    }

    #[test]
    fn decrement_wraps_zero_to_nine() {
        let display = SharedDisplay::new();
        display.take_frame();
        display.apply(Button::B);
        assert_eq!(display.take_frame(), Some(9));
    }

    #[test]
    fn presses_between_renders_collapse_to_latest_digit() {
        let display = SharedDisplay::new();
        display.take_frame();

        display.apply(Button::A);
        display.apply(Button::A);
        display.apply(Button::A);
        assert_eq!(display.take_frame(), Some(3));
        assert_eq!(display.take_frame(), None);
    }

    proptest! {
        #[test]
        fn n_increments_from_zero_give_n_mod_ten(n in 0usize..500) {
            let display = SharedDisplay::new();
            display.take_frame();
            for _ in 0..n {
                display.apply(Button::A);
            }
            prop_assert_eq!(display.digit(), (n % 10) as u8);
        }

        #[test]
        fn n_decrements_from_zero_give_ten_minus_n_mod_ten(n in 0usize..500) {
            let display = SharedDisplay::new();
            display.take_frame();
            for _ in 0..n {
                display.apply(Button::B);
            }
            prop_assert_eq!(display.digit(), ((10 - n % 10) % 10) as u8);
        }

        #[test]
        fn digit_stays_in_range_for_any_press_sequence(
            presses in proptest::collection::vec(any::<bool>(), 0..200)
        ) {
            let display = SharedDisplay::new();
            for a in presses {
                display.apply(if a { Button::A } else { Button::B });
                prop_assert!(display.digit() <= 9);
            }
        }
    }
}
