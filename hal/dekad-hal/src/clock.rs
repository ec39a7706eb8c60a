//! Monotonic time source

/// Millisecond uptime clock
///
/// `now_ms` counts up from an arbitrary epoch (boot) and is allowed to
/// wrap; consumers must compare timestamps with wrapping subtraction.
pub trait Monotonic {
    /// Milliseconds since the clock's epoch, wrapping at `u32::MAX`
    fn now_ms(&self) -> u32;
}
