//! Addressable LED strip abstraction
//!
//! A [`PixelStrip`] is a run of serially addressed RGB LEDs (WS2812 or
//! similar). Callers stage pixel colors with [`PixelStrip::set_pixel`] and
//! make the frame visible with a single [`PixelStrip::flush`]; nothing
//! reaches the physical LEDs before the flush, so a frame is never
//! half-updated.

/// 24-bit RGB color value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    /// All channels at zero intensity
    pub const OFF: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Serially addressed LED strip
///
/// Wire encoding and protocol timing are the implementation's concern;
/// consumers only deal in pixel indices and [`Rgb8`] values.
pub trait PixelStrip {
    /// Stage a color for the pixel at `index`
    ///
    /// Takes effect at the next [`flush`](PixelStrip::flush). `index` must
    /// be below the strip length.
    fn set_pixel(&mut self, index: usize, color: Rgb8);

    /// Latch the staged frame out to the LEDs
    fn flush(&mut self);
}
