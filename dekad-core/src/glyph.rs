//! Digit glyphs and frame rendering
//!
//! Ten fixed 5x5 patterns, one per decimal digit, rendered onto a
//! 25-pixel [`PixelStrip`] in a single frame. The table is plain const
//! data so an alternate glyph set could be swapped in without touching
//! the render loop.

use dekad_hal::pixel::{PixelStrip, Rgb8};

/// Matrix edge length
pub const GRID_SIDE: usize = 5;

/// Number of pixels in the matrix
pub const PIXEL_COUNT: usize = GRID_SIDE * GRID_SIDE;

/// Color used for lit cells (purple)
pub const FOREGROUND: Rgb8 = Rgb8::new(160, 32, 240);

/// Glyph patterns for the digits 0-9
///
/// Row-major, top row first; nonzero means lit.
pub const GLYPHS: [[u8; PIXEL_COUNT]; 10] = [
    // 0
    [
        1, 1, 1, 1, 1, //
        1, 0, 0, 0, 1, //
        1, 0, 0, 0, 1, //
        1, 0, 0, 0, 1, //
        1, 1, 1, 1, 1,
    ],
    // 1
    [
        0, 0, 1, 0, 0, //
        0, 0, 1, 0, 0, //
        0, 0, 1, 0, 0, //
        0, 0, 1, 0, 0, //
        0, 0, 1, 0, 0,
    ],
    // 2
    [
        1, 1, 1, 1, 1, //
        1, 0, 0, 0, 0, //
        1, 1, 1, 1, 1, //
        0, 0, 0, 0, 1, //
        1, 1, 1, 1, 1,
    ],
    // 3
    [
        1, 1, 1, 1, 1, //
        0, 0, 0, 0, 1, //
        1, 1, 1, 1, 0, //
        0, 0, 0, 0, 1, //
        1, 1, 1, 1, 1,
    ],
    // 4
    [
        0, 0, 1, 0, 0, //
        0, 0, 1, 0, 0, //
        0, 1, 1, 1, 1, //
        1, 0, 1, 0, 0, //
        0, 0, 1, 0, 1,
    ],
    // 5
    [
        1, 1, 1, 1, 1, //
        0, 0, 0, 0, 1, //
        1, 1, 1, 1, 1, //
        1, 0, 0, 0, 0, //
        1, 1, 1, 1, 1,
    ],
    // 6
    [
        1, 1, 1, 1, 1, //
        1, 0, 0, 0, 1, //
        1, 1, 1, 1, 1, //
        1, 0, 0, 0, 0, //
        1, 1, 1, 1, 1,
    ],
    // 7
    [
        0, 0, 0, 0, 1, //
        0, 1, 0, 0, 0, //
        0, 0, 1, 0, 0, //
        0, 0, 0, 1, 0, //
        1, 1, 1, 1, 1,
    ],
    // 8
    [
        1, 1, 1, 1, 1, //
        1, 0, 0, 0, 1, //
        1, 1, 1, 1, 1, //
        1, 0, 0, 0, 1, //
        1, 1, 1, 1, 1,
    ],
    // 9
    [
        1, 1, 1, 1, 1, //
        0, 0, 0, 0, 1, //
        1, 1, 1, 1, 1, //
        1, 0, 0, 0, 1, //
        1, 1, 1, 1, 1,
    ],
];

/// Render the glyph for `digit` as one frame
///
/// Emits all 25 cells - [`FOREGROUND`] for lit, [`Rgb8::OFF`] for dark -
/// then latches the frame with a single terminal flush. `digit` must be
/// in `[0, 9]`; the display state invariant guarantees this.
pub fn render<S: PixelStrip>(digit: u8, strip: &mut S) {
    debug_assert!(digit <= 9, "digit out of range");
    let pattern = &GLYPHS[digit as usize];
    for (i, cell) in pattern.iter().enumerate() {
        let color = if *cell != 0 { FOREGROUND } else { Rgb8::OFF };
        strip.set_pixel(i, color);
    }
    strip.flush();
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;

    struct RecordingStrip {
        pixels: [Rgb8; PIXEL_COUNT],
        flushes: usize,
    }

    impl RecordingStrip {
        fn new() -> Self {
            Self {
                pixels: [Rgb8::OFF; PIXEL_COUNT],
                flushes: 0,
            }
        }

        fn lit_indices(&self) -> impl Iterator<Item = usize> + '_ {
            self.pixels
                .iter()
                .enumerate()
                .filter(|(_, c)| **c != Rgb8::OFF)
                .map(|(i, _)| i)
        }
    }

    impl PixelStrip for RecordingStrip {
        fn set_pixel(&mut self, index: usize, color: Rgb8) {
            self.pixels[index] = color;
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    #[test]
    fn zero_glyph_is_the_ring_pattern() {
        let mut strip = RecordingStrip::new();
        render(0, &mut strip);

        let expected = [0, 1, 2, 3, 4, 5, 9, 10, 14, 15, 19, 20, 21, 22, 23, 24];
        let lit: Vec<usize> = strip.lit_indices().collect();
        assert_eq!(lit, expected);
        assert_eq!(strip.flushes, 1);
    }

    #[test]
    fn lit_cells_use_the_foreground_color() {
        let mut strip = RecordingStrip::new();
        render(8, &mut strip);

        for (i, cell) in GLYPHS[8].iter().enumerate() {
            let expected = if *cell != 0 { FOREGROUND } else { Rgb8::OFF };
            assert_eq!(strip.pixels[i], expected, "cell {}", i);
        }
    }

    #[test]
    fn one_glyph_lights_only_the_center_column() {
        let mut strip = RecordingStrip::new();
        render(1, &mut strip);

        for row in 0..GRID_SIDE {
            for col in 0..GRID_SIDE {
                let on = strip.pixels[row * GRID_SIDE + col] != Rgb8::OFF;
                assert_eq!(on, col == 2, "row {} col {}", row, col);
            }
        }
    }

    #[test]
    fn render_is_idempotent_for_a_fixed_digit() {
        let mut first = RecordingStrip::new();
        let mut second = RecordingStrip::new();
        render(7, &mut first);
        render(7, &mut second);
        assert_eq!(first.pixels, second.pixels);
    }

    #[test]
    fn every_glyph_emits_a_full_frame() {
        for digit in 0..10u8 {
            let mut strip = RecordingStrip::new();
            render(digit, &mut strip);
            assert_eq!(strip.flushes, 1);
            // Every pattern lights at least the five cells of a "1"
            assert!(strip.lit_indices().count() >= 5, "digit {}", digit);
        }
    }
}
