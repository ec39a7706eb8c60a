//! Millisecond uptime clock

use dekad_hal::clock::Monotonic;
use embassy_time::Instant;

/// Uptime clock backed by the embassy time driver
///
/// Truncates to u32 milliseconds; consumers compare timestamps with
/// wrapping subtraction, so the ~49 day rollover is harmless.
#[derive(Default)]
pub struct UptimeClock;

impl UptimeClock {
    pub const fn new() -> Self {
        Self
    }
}

impl Monotonic for UptimeClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
