//! Board-agnostic core logic for the Dekad digit counter
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Button identity
//! - Debounce gate for raw edge events
//! - Shared display state (digit + dirty flag) crossing task contexts
//! - Glyph table and frame renderer
//! - Status LED blink timer
//!
//! Everything here builds and tests on the host; hardware access goes
//! through the `dekad-hal` traits.

#![no_std]
#![deny(unsafe_code)]

pub mod blink;
pub mod button;
pub mod debounce;
pub mod display;
pub mod glyph;
