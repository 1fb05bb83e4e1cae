// ============================================================================
// Monetary Amount
// Fixed-point dollars and cents with exact half-away-from-zero rounding
// ============================================================================

use super::errors::{OutOfRange, WordsResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Number of cents in one dollar.
pub const CENTS_PER_DOLLAR: u64 = 100;

/// Decimal places kept after normalization.
const CENT_DECIMALS: u32 = 2;

/// A non-negative monetary amount rounded to whole cents.
///
/// Internally stores `amount × 100` as a u64, so the dollars/cents split is
/// exact and never drifts the way binary floating point would.
///
/// # Example
/// ```
/// use money_words::numeric::MonetaryAmount;
/// use rust_decimal::Decimal;
///
/// let amount = MonetaryAmount::from_decimal(Decimal::new(12345, 2)).unwrap();
/// assert_eq!(amount.split(), (123, 45));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct MonetaryAmount(u64);

impl MonetaryAmount {
    /// Zero dollars and zero cents
    pub const ZERO: Self = Self(0);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw count of cents.
    #[inline]
    pub const fn from_cents(total_cents: u64) -> Self {
        Self(total_cents)
    }

    /// Create from a dollar count and a cent count.
    ///
    /// # Errors
    /// Returns `BeyondScale` if `cents` is not in [0, 99] or the total does
    /// not fit in the cent representation.
    pub fn from_parts(dollars: u64, cents: u8) -> WordsResult<Self> {
        if u64::from(cents) >= CENTS_PER_DOLLAR {
            return Err(OutOfRange::BeyondScale {
                value: u64::from(cents),
                max: CENTS_PER_DOLLAR - 1,
            });
        }

        dollars
            .checked_mul(CENTS_PER_DOLLAR)
            .and_then(|scaled| scaled.checked_add(u64::from(cents)))
            .map(Self)
            .ok_or(OutOfRange::BeyondScale {
                value: dollars,
                max: u64::MAX / CENTS_PER_DOLLAR,
            })
    }

    /// Validate and round a decimal amount to whole cents.
    ///
    /// The sign is checked before rounding, so `-0.001` is rejected even
    /// though it would round to zero. Midpoints round away from zero:
    /// `0.005` becomes `0.01`.
    ///
    /// # Errors
    /// - `Negative` if `amount < 0`
    /// - `AmountTooLarge` if the cent count does not fit in a u64
    pub fn from_decimal(amount: Decimal) -> WordsResult<Self> {
        if amount < Decimal::ZERO {
            return Err(OutOfRange::Negative(amount));
        }

        let rounded =
            amount.round_dp_with_strategy(CENT_DECIMALS, RoundingStrategy::MidpointAwayFromZero);

        rounded
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_u64())
            .map(Self)
            .ok_or(OutOfRange::AmountTooLarge(amount))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Total number of cents.
    #[inline]
    pub const fn total_cents(self) -> u64 {
        self.0
    }

    /// Whole dollars.
    #[inline]
    pub const fn dollars(self) -> u64 {
        self.0 / CENTS_PER_DOLLAR
    }

    /// Remaining cents, always in [0, 99].
    #[inline]
    pub const fn cents(self) -> u8 {
        (self.0 % CENTS_PER_DOLLAR) as u8
    }

    /// Dollars and cents as a pair.
    #[inline]
    pub const fn split(self) -> (u64, u8) {
        (self.dollars(), self.cents())
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Convert back to a decimal with exactly two decimal places.
    pub fn to_decimal(self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.0), CENT_DECIMALS)
    }
}

/// Validate, round and split an amount.
///
/// Shorthand for [`MonetaryAmount::from_decimal`].
pub fn normalize(amount: Decimal) -> WordsResult<MonetaryAmount> {
    MonetaryAmount::from_decimal(amount)
}

impl TryFrom<Decimal> for MonetaryAmount {
    type Error = OutOfRange;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(amount)
    }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.dollars(), self.cents())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use quickcheck::quickcheck;

    fn dec(num: i64, scale: u32) -> Decimal {
        Decimal::new(num, scale)
    }

    #[test]
    fn test_split() {
        let x = normalize(dec(12345, 2)).unwrap();
        assert_eq!(x.dollars(), 123);
        assert_eq!(x.cents(), 45);
        assert_eq!(x.total_cents(), 12345);
        assert_eq!(x.to_string(), "123.45");
    }

    #[test]
    fn test_whole_amounts() {
        let x = normalize(Decimal::from(1_000_000)).unwrap();
        assert_eq!(x.split(), (1_000_000, 0));

        let zero = normalize(Decimal::ZERO).unwrap();
        assert!(zero.is_zero());
        assert_eq!(zero, MonetaryAmount::ZERO);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(normalize(dec(5, 3)).unwrap().split(), (0, 1));
        assert_eq!(normalize(dec(4, 3)).unwrap().split(), (0, 0));
        assert_eq!(normalize(dec(1235, 3)).unwrap().split(), (1, 24));
        assert_eq!(normalize(dec(1245, 3)).unwrap().split(), (1, 25));
        assert_eq!(normalize(dec(99995, 4)).unwrap().split(), (10, 0));
    }

    #[test]
    fn test_rounding_carries_into_dollars() {
        let x = normalize(dec(999_995, 3)).unwrap();
        assert_eq!(x.split(), (1000, 0));
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(
            normalize(dec(-1, 2)),
            Err(OutOfRange::Negative(dec(-1, 2)))
        );
        // Rejected before rounding, even though it would round to zero
        assert!(matches!(
            normalize(dec(-1, 3)),
            Err(OutOfRange::Negative(_))
        ));
    }

    #[test]
    fn test_too_large() {
        assert_eq!(
            normalize(Decimal::MAX),
            Err(OutOfRange::AmountTooLarge(Decimal::MAX))
        );
    }

    #[test]
    fn test_from_parts() {
        let x = MonetaryAmount::from_parts(2, 10).unwrap();
        assert_eq!(x.to_string(), "2.10");

        assert_eq!(
            MonetaryAmount::from_parts(1, 100),
            Err(OutOfRange::BeyondScale { value: 100, max: 99 })
        );
        assert!(MonetaryAmount::from_parts(u64::MAX, 0).is_err());
    }

    #[test]
    fn test_to_decimal() {
        let x = MonetaryAmount::from_cents(210);
        assert_eq!(x.to_decimal(), dec(210, 2));
        assert_eq!(x.to_decimal().to_string(), "2.10");
    }

    quickcheck! {
        fn prop_split_reconstructs_exactly(total: u64) -> bool {
            let amount = MonetaryAmount::from_cents(total);
            let (dollars, cents) = amount.split();
            cents < 100
                && Decimal::from(dollars) + Decimal::new(i64::from(cents), 2) == amount.to_decimal()
        }
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(raw in 0i64..100_000_000_000_000_000, scale in 0u32..6) {
            let once = normalize(Decimal::new(raw, scale)).unwrap();
            let twice = normalize(once.to_decimal()).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn negative_always_fails(raw in i64::MIN..0i64, scale in 0u32..6) {
            let is_negative = matches!(
                normalize(Decimal::new(raw, scale)),
                Err(OutOfRange::Negative(_))
            );
            prop_assert!(is_negative);
        }
    }
}
