//! Render loop task
//!
//! The main cooperative loop: once per pass, redraw the matrix if the
//! display state is dirty, step the blink timer, then sleep out the
//! interval. Presses landing between two passes collapse into one redraw
//! of the latest digit.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Ticker};

use dekad_core::blink::BlinkTimer;
use dekad_core::display::SharedDisplay;
use dekad_core::glyph;
use dekad_hal_rp2040::gpio::StatusLed;

use crate::Matrix;

/// Loop interval; also one blink half-period (5Hz toggle)
pub const FRAME_INTERVAL_MS: u64 = 100;

/// Render task - matrix redraw and status LED blink
#[embassy_executor::task]
pub async fn render_task(
    display: &'static SharedDisplay,
    mut matrix: Matrix,
    mut status: StatusLed<'static>,
    green: Output<'static>,
    blue: Output<'static>,
) {
    info!("Render task started");

    // The green and blue channels stay off; owning the pins here keeps
    // them actively driven low instead of floating on drop.
    let (_green, _blue) = (green, blue);

    let mut blink = BlinkTimer::new();
    let mut ticker = Ticker::every(Duration::from_millis(FRAME_INTERVAL_MS));

    loop {
        // Dirty flag is consumed here and only here; the very first pass
        // always draws, since the display state starts dirty.
        if let Some(digit) = display.take_frame() {
            glyph::render(digit, &mut matrix);
            debug!("rendered digit {}", digit);
        }

        blink.step(&mut status);
        ticker.next().await;
    }
}
