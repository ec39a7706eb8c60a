//! Firmware tasks
//!
//! One embassy task per concern:
//! - [`buttons`] - edge events through the debounce gate
//! - [`render`] - the 100ms render loop and blink timer

pub mod buttons;
pub mod render;
