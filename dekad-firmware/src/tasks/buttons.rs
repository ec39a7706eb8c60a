//! Button edge task
//!
//! Waits on falling edges from both buttons and runs them through the
//! debounce gate. The gate and the clock live only in this task; the
//! shared display handle is the only state crossing to the render loop.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Input;

use dekad_core::button::Button;
use dekad_core::debounce::DebounceGate;
use dekad_core::display::SharedDisplay;
use dekad_hal::clock::Monotonic;
use dekad_hal_rp2040::clock::UptimeClock;

/// Button task - debounced edge events into the shared display state
#[embassy_executor::task]
pub async fn button_task(
    display: &'static SharedDisplay,
    mut btn_a: Input<'static>,
    mut btn_b: Input<'static>,
) {
    info!("Button task started");

    let clock = UptimeClock::new();
    let mut gate = DebounceGate::new();

    loop {
        let button = match select(
            btn_a.wait_for_falling_edge(),
            btn_b.wait_for_falling_edge(),
        )
        .await
        {
            Either::First(()) => Button::A,
            Either::Second(()) => Button::B,
        };

        let now_ms = clock.now_ms();
        if gate.on_edge(display, button, now_ms) {
            info!("{} accepted at {}ms, digit {}", button, now_ms, display.digit());
        } else {
            debug!("{} suppressed at {}ms", button, now_ms);
        }
    }
}
