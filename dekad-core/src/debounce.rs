//! Edge-event debounce gate
//!
//! Mechanical switches bounce: one physical press shows up as a burst of
//! edges over a few milliseconds. The gate filters the raw falling-edge
//! stream down to accepted presses by enforcing a minimum interval
//! between them.

use crate::button::Button;
use crate::display::SharedDisplay;

/// Minimum interval between accepted edges, in milliseconds
///
/// An edge exactly `DEBOUNCE_MS` after the last accepted one is still
/// suppressed; acceptance requires a strictly larger gap.
pub const DEBOUNCE_MS: u32 = 300;

/// Filters raw falling-edge events into accepted button presses
///
/// A single timestamp is shared by both buttons: an accepted edge on
/// either button opens the suppression window for both, so rapid
/// alternating A/B presses inside the window are suppressed as well.
/// Starting at zero also suppresses edges in the first window after
/// boot. Both quirks carried over deliberately - see DESIGN.md.
pub struct DebounceGate {
    /// Time the last edge was accepted, ms since boot (wrapping)
    last_accepted_ms: u32,
}

impl DebounceGate {
    pub const fn new() -> Self {
        Self { last_accepted_ms: 0 }
    }

    /// Handle a falling edge on `button` observed at `now_ms`
    ///
    /// When the edge falls inside the suppression window nothing is
    /// mutated and `false` is returned. Otherwise the press is applied to
    /// `display`, the window restarts at `now_ms`, and `true` is
    /// returned. Constant-time and non-blocking, so it is safe to run at
    /// event priority.
    pub fn on_edge(&mut self, display: &SharedDisplay, button: Button, now_ms: u32) -> bool {
        // Wrapping subtraction keeps the interval correct across u32
        // clock wraparound.
        if now_ms.wrapping_sub(self.last_accepted_ms) <= DEBOUNCE_MS {
            return false;
        }
        display.apply(button);
        self.last_accepted_ms = now_ms;
        true
    }
}

impl Default for DebounceGate {
    fn default() -> Self {
        Self::new()
    }
}
