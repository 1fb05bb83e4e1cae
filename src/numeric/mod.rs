// ============================================================================
// Numeric Module
// Fixed-point monetary amounts and the out-of-range error
// ============================================================================
//
// This module provides:
// - MonetaryAmount: a non-negative amount held as a whole number of cents
// - normalize: validation, half-away-from-zero rounding and dollars/cents split
// - OutOfRange: the only error the words core produces
//
// Design principles:
// - No floating-point operations
// - All fallible operations return Result (no panics)

mod amount;
mod errors;

pub use amount::{normalize, MonetaryAmount, CENTS_PER_DOLLAR};
pub use errors::{OutOfRange, WordsResult};
