//! RP2040 implementations of the Dekad HAL traits
//!
//! Built on embassy-rp:
//!
//! - [`ws2812::Ws2812`] - PIO-driven WS2812 pixel strip
//! - [`gpio::StatusLed`] - GPIO output pin wrapper
//! - [`clock::UptimeClock`] - millisecond uptime clock

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;
pub mod ws2812;

pub use clock::UptimeClock;
pub use gpio::StatusLed;
pub use ws2812::Ws2812;
