// ============================================================================
// Amount Input Validation
// Raw text to a decimal amount, with user-facing rejection messages
// ============================================================================

use crate::domain::ConverterConfig;
use crate::numeric::OutOfRange;
use crate::words::UNIT_WORDS;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Result type for input operations
pub type InputResult<T> = Result<T, InputError>;

/// Why a raw amount was rejected.
///
/// The `Display` text of every variant is safe to show to an end user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter an amount.")]
    Missing,

    #[error(
        "Use a non-negative number with at most {} (e.g. {}).",
        decimal_places(.fraction_digits),
        example_amount(.fraction_digits)
    )]
    InvalidFormat { fraction_digits: u32 },

    #[error("Invalid number format.")]
    Unparseable,

    #[error("Negative amounts are not supported.")]
    Negative,

    /// Amount is not a whole number of cents
    #[error("Only two decimal places are allowed.")]
    TooManyDecimals,

    #[error("Maximum supported amount is {}.", format_grouped(.max))]
    AboveMaximum { max: Decimal },

    #[error("Amount is outside the supported range.")]
    Conversion(#[from] OutOfRange),
}

/// Parse and validate a raw amount.
///
/// Checks run in order: blank input, the `digits[.fraction]` pattern,
/// exact decimal parsing, sign, whole cents, and the configured maximum.
/// Surrounding whitespace is ignored.
///
/// ## Example
/// ```rust
/// use money_words::domain::ConverterConfig;
/// use money_words::input::{parse_amount, InputError};
///
/// let config = ConverterConfig::standard();
/// assert_eq!(parse_amount(" 123.45 ", &config).unwrap().to_string(), "123.45");
/// assert_eq!(parse_amount("", &config), Err(InputError::Missing));
/// assert_eq!(
///     parse_amount("1.234", &config),
///     Err(InputError::InvalidFormat { fraction_digits: 2 })
/// );
/// ```
pub fn parse_amount(raw: &str, config: &ConverterConfig) -> InputResult<Decimal> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(InputError::Missing);
    }

    if !matches_amount_pattern(trimmed, config.fraction_digits) {
        return Err(InputError::InvalidFormat {
            fraction_digits: config.fraction_digits,
        });
    }

    let value = Decimal::from_str_exact(trimmed).map_err(|_| InputError::Unparseable)?;

    // Unreachable through the pattern; kept for callers that relax it
    if value < Decimal::ZERO {
        return Err(InputError::Negative);
    }

    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded != value {
        return Err(InputError::TooManyDecimals);
    }

    let max = config.effective_max_amount();
    if value > max {
        return Err(InputError::AboveMaximum { max });
    }

    Ok(value)
}

/// "two decimal places", "one decimal place", "25 decimal places"
fn decimal_places(digits: &u32) -> String {
    let count = match UNIT_WORDS.get(*digits as usize) {
        Some(word) => word.to_lowercase(),
        None => digits.to_string(),
    };
    let noun = if *digits == 1 { "place" } else { "places" };
    format!("{count} decimal {noun}")
}

/// A sample amount that fits the configured pattern
fn example_amount(digits: &u32) -> &'static str {
    if *digits >= 2 {
        "123.45"
    } else {
        "123.4"
    }
}

/// `^\d+(\.\d{1,N})?$` over ASCII digits.
fn matches_amount_pattern(text: &str, fraction_digits: u32) -> bool {
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    match fraction {
        None => true,
        Some(fraction) => {
            !fraction.is_empty()
                && fraction.len() <= fraction_digits as usize
                && fraction.bytes().all(|b| b.is_ascii_digit())
        }
    }
}

/// Render an amount with thousands separators and two decimals,
/// e.g. `999,999,999,999.99`.
pub fn format_grouped(amount: &Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(text.len() + whole.len() / 3 + 1);
    if rounded < Decimal::ZERO {
        grouped.push('-');
    }

    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped.push('.');
    grouped.push_str(fraction);
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> InputResult<Decimal> {
        parse_amount(raw, &ConverterConfig::standard())
    }

    #[test]
    fn test_valid_amounts() {
        assert_eq!(parse("0").unwrap(), Decimal::ZERO);
        assert_eq!(parse("123.45").unwrap(), Decimal::new(12345, 2));
        assert_eq!(parse("  7.5\n").unwrap(), Decimal::new(75, 1));
        assert_eq!(
            parse("999999999999.99").unwrap(),
            Decimal::new(99_999_999_999_999, 2)
        );
    }

    #[test]
    fn test_missing() {
        assert_eq!(parse(""), Err(InputError::Missing));
        assert_eq!(parse("   "), Err(InputError::Missing));
    }

    #[test]
    fn test_invalid_format() {
        for raw in ["abc", "-1", "1.", ".5", "1.234", "1,000", "+1", "1e5", "1.2.3", "١٢"] {
            assert_eq!(
                parse(raw),
                Err(InputError::InvalidFormat { fraction_digits: 2 }),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn test_invalid_format_message_follows_fraction_digits() {
        let standard = parse("abc").unwrap_err();
        assert_eq!(
            standard.to_string(),
            "Use a non-negative number with at most two decimal places (e.g. 123.45)."
        );

        let config = ConverterConfig::standard().with_fraction_digits(1);
        let err = parse_amount("1.23", &config).unwrap_err();
        assert_eq!(err, InputError::InvalidFormat { fraction_digits: 1 });
        assert_eq!(
            err.to_string(),
            "Use a non-negative number with at most one decimal place (e.g. 123.4)."
        );
        assert_eq!(parse_amount("1.2", &config).unwrap(), Decimal::new(12, 1));

        let config = ConverterConfig::standard().with_fraction_digits(25);
        assert_eq!(
            parse_amount("1.2.3", &config).unwrap_err().to_string(),
            "Use a non-negative number with at most 25 decimal places (e.g. 123.45)."
        );
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse(&"9".repeat(40)), Err(InputError::Unparseable));
    }

    #[test]
    fn test_too_many_decimals_when_pattern_relaxed() {
        let config = ConverterConfig::standard().with_fraction_digits(3);
        assert_eq!(
            parse_amount("1.234", &config),
            Err(InputError::TooManyDecimals)
        );
        assert_eq!(
            InputError::TooManyDecimals.to_string(),
            "Only two decimal places are allowed."
        );
        assert_eq!(
            parse_amount("1.230", &config).unwrap(),
            Decimal::new(1230, 3)
        );
    }

    #[test]
    fn test_above_maximum() {
        let result = parse("1000000000000");
        assert_eq!(
            result,
            Err(InputError::AboveMaximum {
                max: Decimal::new(99_999_999_999_999, 2)
            })
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "Maximum supported amount is 999,999,999,999.99."
        );
    }

    #[test]
    fn test_conversion_error_message() {
        let err = InputError::from(OutOfRange::Negative(Decimal::NEGATIVE_ONE));
        assert_eq!(err.to_string(), "Amount is outside the supported range.");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(&Decimal::ZERO), "0.00");
        assert_eq!(format_grouped(&Decimal::new(12345, 2)), "123.45");
        assert_eq!(format_grouped(&Decimal::from(1000)), "1,000.00");
        assert_eq!(format_grouped(&Decimal::new(12_345_675, 1)), "1,234,567.50");
        assert_eq!(format_grouped(&Decimal::new(-100_000, 0)), "-100,000.00");
    }
}
