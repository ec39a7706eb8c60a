//! GPIO output wrappers

use dekad_hal::gpio::OutputPin;
use embassy_rp::gpio::Output;

/// Status LED output
///
/// Thin wrapper adapting an embassy-rp [`Output`] to the
/// [`dekad_hal::gpio::OutputPin`] trait.
pub struct StatusLed<'d> {
    pin: Output<'d>,
}

impl<'d> StatusLed<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl<'d> OutputPin for StatusLed<'d> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn toggle(&mut self) {
        self.pin.toggle();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
