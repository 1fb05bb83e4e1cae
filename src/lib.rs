// ============================================================================
// Money Words Library
// Monetary amounts to canonical English words
// ============================================================================

//! # Money Words
//!
//! Converts a non-negative dollar amount into the words written on a cheque.
//!
//! ## Features
//!
//! - **Exact decimal rounding** to cents, half away from zero, no floating point
//! - **Scale-group decomposition** up to BILLION, with an opt-in TRILLION tier
//! - **British conjunction**: "ONE HUNDRED AND ONE", never "AND ZERO"
//! - **Input boundary** that turns raw text into words or a user-facing message
//! - **Stateless**: immutable word tables, safe to call from any thread
//!
//! ## Example
//!
//! ```rust
//! use money_words::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let words = money_to_words(Decimal::new(12345, 2)).unwrap();
//! assert_eq!(words, "ONE HUNDRED AND TWENTY-THREE DOLLARS AND FORTY-FIVE CENTS");
//!
//! // Amounts at or above one trillion need the extended vocabulary
//! let converter = MoneyConverterBuilder::new().trillion_scale().build().unwrap();
//! assert_eq!(
//!     converter.convert(Decimal::from(1_000_000_000_000u64)).unwrap(),
//!     "ONE TRILLION DOLLARS"
//! );
//!
//! // Raw text from a form
//! let form = AmountForm::standard();
//! assert_eq!(form.submit("1000001").unwrap(), "ONE MILLION ONE DOLLARS");
//! ```

pub mod domain;
pub mod engine;
pub mod input;
pub mod numeric;
pub mod words;

pub use engine::money_to_words;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ConfigError, ConverterConfig, ScaleTable, ScaleTier};
    pub use crate::engine::{create_from_config, money_to_words, MoneyConverter, MoneyConverterBuilder};
    pub use crate::input::{parse_amount, AmountForm, InputError};
    pub use crate::numeric::{normalize, MonetaryAmount, OutOfRange, WordsResult};
    pub use crate::words::{assemble, int_to_words, two_digit_to_words, Words};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_end_to_end_scenarios() {
        let cases = [
            (Decimal::ZERO, "ZERO DOLLARS"),
            (Decimal::ONE, "ONE DOLLAR"),
            (Decimal::TWO, "TWO DOLLARS"),
            (Decimal::from(21), "TWENTY-ONE DOLLARS"),
            (Decimal::from(100), "ONE HUNDRED DOLLARS"),
            (Decimal::from(101), "ONE HUNDRED AND ONE DOLLARS"),
            (Decimal::from(999), "NINE HUNDRED AND NINETY-NINE DOLLARS"),
            (Decimal::from(1000), "ONE THOUSAND DOLLARS"),
            (Decimal::from(1_000_001), "ONE MILLION ONE DOLLARS"),
            (Decimal::new(1, 2), "ZERO DOLLARS AND ONE CENT"),
            (
                Decimal::new(12345, 2),
                "ONE HUNDRED AND TWENTY-THREE DOLLARS AND FORTY-FIVE CENTS",
            ),
        ];

        for (amount, expected) in cases {
            assert_eq!(money_to_words(amount).unwrap(), expected, "amount {amount}");
        }

        assert!(matches!(
            money_to_words(Decimal::new(-1, 2)),
            Err(OutOfRange::Negative(_))
        ));
    }

    #[test]
    fn test_pipeline_stages_agree() {
        let amount = normalize(Decimal::new(200_001, 2)).unwrap();
        assert_eq!(amount.split(), (2000, 1));

        let dollars = int_to_words(amount.dollars()).unwrap();
        assert_eq!(dollars.to_string(), "TWO THOUSAND");
        assert_eq!(two_digit_to_words(amount.cents()).unwrap(), "ONE");

        assert_eq!(
            assemble(amount.dollars(), amount.cents()).unwrap(),
            "TWO THOUSAND DOLLARS AND ONE CENT"
        );
    }

    #[test]
    fn test_output_is_clean_ascii() {
        let form = AmountForm::standard();
        for raw in ["0", "7.07", "90.9", "123456789.12", "100000"] {
            let words = form.submit(raw).unwrap();
            assert!(words.bytes().all(|b| b.is_ascii_uppercase() || b == b' ' || b == b'-'));
            assert!(!words.starts_with(' ') && !words.ends_with(' '));
            assert!(!words.contains("  "));
        }
    }
}
