//! Cart Data

/// Requested change to a cart line's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartQuantity {
    /// Adjust the current quantity by this amount. Adding to a missing line
    /// creates it.
    Delta(i64),

    /// Replace the current quantity.
    Absolute(i64),
}
