//! Dekad - digit counter firmware for the BitDogLab RP2040 board
//!
//! Counts through the decimal digits on the board's 5x5 WS2812 matrix.
//! Button A increments, button B decrements; accepted presses pass a
//! 300ms debounce gate. The red channel of the RGB status LED blinks at
//! 5Hz from the render loop, independent of button activity.
//!
//! Board wiring (BitDogLab):
//! - GPIO 7:  WS2812 matrix data
//! - GPIO 5:  button A (to ground, pull-up)
//! - GPIO 6:  button B (to ground, pull-up)
//! - GPIO 13: status LED red channel
//! - GPIO 11/12: status LED green/blue channels, held off

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler, Pio};
use {defmt_rtt as _, panic_probe as _};

use dekad_core::display::SharedDisplay;
use dekad_core::glyph::PIXEL_COUNT;
use dekad_hal_rp2040::gpio::StatusLed;
use dekad_hal_rp2040::ws2812::Ws2812;

mod tasks;

/// The matrix strip: 25 LEDs on PIO0 state machine 0
pub type Matrix = Ws2812<'static, PIO0, 0, PIXEL_COUNT>;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

/// The one record shared between the button and render tasks. Plain
/// static: construction is const and all access is through atomics.
static DISPLAY: SharedDisplay = SharedDisplay::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Dekad firmware starting...");

    let p = embassy_rp::init(Default::default());

    // WS2812 matrix on PIO0
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let matrix: Matrix = Ws2812::new(&mut common, sm0, p.PIN_7);

    // Buttons wired to ground, so pull-ups and falling edges
    let btn_a = Input::new(p.PIN_5, Pull::Up);
    let btn_b = Input::new(p.PIN_6, Pull::Up);

    // RGB status LED: red blinks, green and blue stay off
    let status = StatusLed::new(Output::new(p.PIN_13, Level::Low));
    let green = Output::new(p.PIN_11, Level::Low);
    let blue = Output::new(p.PIN_12, Level::Low);

    unwrap!(spawner.spawn(tasks::buttons::button_task(&DISPLAY, btn_a, btn_b)));
    unwrap!(spawner.spawn(tasks::render::render_task(
        &DISPLAY, matrix, status, green, blue
    )));

    info!("Tasks spawned");
}
