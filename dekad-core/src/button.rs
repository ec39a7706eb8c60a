//! Button identity

/// The two physical push buttons
///
/// A closed enumeration: a raw edge event always maps to one of these,
/// so there is no "unknown button" error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Increment button
    A,
    /// Decrement button
    B,
}
