// ============================================================================
// Conversion Errors
// The single failure kind of the words core: an input outside the range
// ============================================================================

use rust_decimal::Decimal;
use thiserror::Error;

/// An amount or integer that the words core cannot represent.
///
/// Every variant is an out-of-range condition; they differ only in which
/// boundary was crossed so callers can log something useful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum OutOfRange {
    /// Amount below zero (checked before any rounding)
    #[error("amount must be non-negative, got {0}")]
    Negative(Decimal),

    /// Amount whose cent count does not fit the fixed-point representation
    #[error("amount {0} is too large to represent in cents")]
    AmountTooLarge(Decimal),

    /// Amount above the maximum a converter was configured with
    #[error("amount {amount} exceeds the configured maximum {max}")]
    AboveMaximum { amount: Decimal, max: Decimal },

    /// Integer above what the formatter or scale vocabulary can name
    #[error("{value} exceeds the largest supported value {max}")]
    BeyondScale { value: u64, max: u64 },
}

/// Result type alias for words operations
pub type WordsResult<T> = Result<T, OutOfRange>;
