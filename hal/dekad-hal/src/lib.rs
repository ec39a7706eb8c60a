//! Dekad Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits implemented by
//! chip-specific HALs. The core logic only sees these traits, so it
//! builds and tests on the host with mock implementations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (dekad-firmware)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dekad-core (logic, trait consumers)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dekad-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dekad-hal-rp2040 (embassy-rp impls)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output
//! - [`pixel::PixelStrip`] - Addressable LED strip (set pixel / flush frame)
//! - [`clock::Monotonic`] - Millisecond uptime clock

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;
pub mod pixel;

// Re-export key traits at crate root for convenience
pub use clock::Monotonic;
pub use gpio::OutputPin;
pub use pixel::{PixelStrip, Rgb8};
