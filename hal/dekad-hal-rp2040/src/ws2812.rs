//! PIO-based WS2812 pixel strip driver
//!
//! Uses an RP2040 PIO state machine to generate the WS2812 serial
//! protocol: 800kHz bit rate, bits encoded as pulse widths on a single
//! data line. This offloads the timing-critical waveform generation from
//! the CPU; the driver only feeds 24-bit GRB words into the TX FIFO.
//!
//! The frame is staged in RAM and pushed out in one go by
//! [`Ws2812::flush`], so the LEDs never show a half-updated frame.

use dekad_hal::pixel::{PixelStrip, Rgb8};
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pio::{
    Common, Config, Direction as PioDirection, FifoJoin, Instance, PioPin, ShiftConfig,
    ShiftDirection, StateMachine,
};
use embassy_rp::Peri;
use fixed::types::U24F8;

/// WS2812 serial bit rate
pub const BIT_FREQ_HZ: u32 = 800_000;

/// PIO cycles spent per serial bit (T1 + T2 + T3 of the bit banger)
pub const CYCLES_PER_BIT: u32 = 10;

/// Calculate the PIO clock divider for the WS2812 bit rate
///
/// The PIO program spends [`CYCLES_PER_BIT`] cycles per serial bit, so
/// the state machine clock must run at `bit_freq * CYCLES_PER_BIT`.
/// Returns the 16.8 fixed-point divider embassy-rp expects.
pub fn calc_clock_divider(sys_clk_hz: u32, bit_freq_hz: u32) -> U24F8 {
    let target_hz = bit_freq_hz as u64 * CYCLES_PER_BIT as u64;
    // Multiply by 256 first to keep 8 fractional bits
    let divider_x256 = ((sys_clk_hz as u64) << 8) / target_hz;
    U24F8::from_bits(divider_x256 as u32)
}

/// Encode a color as the 24-bit GRB word the WS2812 shifts in
///
/// Green first on the wire; the word is left-aligned because the state
/// machine shifts out of the high end of the OSR.
pub fn grb_word(color: Rgb8) -> u32 {
    ((color.g as u32) << 24) | ((color.r as u32) << 16) | ((color.b as u32) << 8)
}

/// WS2812 strip driven by one PIO state machine
///
/// `N` is the number of LEDs on the strip.
pub struct Ws2812<'d, PIO: Instance, const SM: usize, const N: usize> {
    sm: StateMachine<'d, PIO, SM>,
    frame: [u32; N],
}

impl<'d, PIO: Instance, const SM: usize, const N: usize> Ws2812<'d, PIO, SM, N> {
    /// Create a new WS2812 driver on `data_pin`
    ///
    /// Loads the bit-banger program, points the state machine's side-set
    /// at the data pin and starts it. The strip shows nothing until the
    /// first flush.
    pub fn new<P: PioPin>(
        common: &mut Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, SM>,
        data_pin: Peri<'d, P>,
    ) -> Self {
        // Classic WS2812 bit banger: T1=2 cycles high, then T2=5 cycles
        // high (one) or low (zero), then T3=3 cycles low while the next
        // bit is fetched.
        let prg = pio::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "    out x, 1        side 0 [2]",
            "    jmp !x do_zero  side 1 [1]",
            "    jmp bitloop     side 1 [4]",
            "do_zero:",
            "    nop             side 0 [4]",
            ".wrap",
        );

        let installed = common.load_program(&prg.program);
        let out_pin = common.make_pio_pin(data_pin);

        let mut cfg = Config::default();
        cfg.use_program(&installed, &[&out_pin]);
        cfg.clock_divider = calc_clock_divider(clk_sys_freq(), BIT_FREQ_HZ);
        // 24 bits per LED, autopulled, shifted out of the high end
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: 24,
            direction: ShiftDirection::Left,
        };
        cfg.fifo_join = FifoJoin::TxOnly;

        sm.set_config(&cfg);
        sm.set_pin_dirs(PioDirection::Out, &[&out_pin]);
        sm.set_enable(true);

        Self { sm, frame: [0; N] }
    }
}

impl<'d, PIO: Instance, const SM: usize, const N: usize> PixelStrip for Ws2812<'d, PIO, SM, N> {
    fn set_pixel(&mut self, index: usize, color: Rgb8) {
        debug_assert!(index < N, "pixel index out of range");
        self.frame[index] = grb_word(color);
    }

    fn flush(&mut self) {
        // Blocking push; with the joined 8-deep TX FIFO the spin is a few
        // microseconds at most for a 25-LED frame.
        for &word in &self.frame {
            while !self.sm.tx().try_push(word) {}
        }
    }
}
