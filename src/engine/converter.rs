// ============================================================================
// Money Converter
// Amount normalization followed by sentence assembly
// ============================================================================

use crate::domain::{ConfigError, ConverterConfig, ScaleTable};
use crate::numeric::{MonetaryAmount, OutOfRange, WordsResult};
use crate::words::assemble_with;
use rust_decimal::Decimal;

/// Converts amounts to words with a fixed, validated configuration.
///
/// Holds no mutable state, so one converter can be shared across threads
/// by reference.
#[derive(Debug, Clone)]
pub struct MoneyConverter {
    config: ConverterConfig,
    table: &'static ScaleTable,
}

impl MoneyConverter {
    /// Create a converter, validating the configuration first
    pub fn new(config: ConverterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let table = config.scale_tier.table();
        Ok(Self { config, table })
    }

    /// Converter with the standard (BILLION) vocabulary
    pub fn standard() -> Self {
        Self {
            config: ConverterConfig::standard(),
            table: ScaleTable::standard(),
        }
    }

    /// Convert a decimal amount.
    ///
    /// # Errors
    /// Returns `OutOfRange` for negative amounts, for amounts above the
    /// configured maximum, and for amounts the scale vocabulary cannot name.
    pub fn convert(&self, amount: Decimal) -> WordsResult<String> {
        let normalized = MonetaryAmount::from_decimal(amount)?;
        self.convert_amount(normalized)
    }

    /// Convert an already normalized amount
    pub fn convert_amount(&self, amount: MonetaryAmount) -> WordsResult<String> {
        // Past the tier ceiling the vocabulary itself rejects the amount
        let max = self.config.effective_max_amount();
        let value = amount.to_decimal();
        if value > max && max < self.config.tier_ceiling() {
            tracing::debug!(%amount, %max, "amount above configured maximum");
            return Err(OutOfRange::AboveMaximum { amount: value, max });
        }

        let (dollars, cents) = amount.split();
        let sentence = assemble_with(dollars, cents, self.table)?;
        tracing::debug!(%amount, tier = ?self.config.scale_tier, "converted amount to words");
        Ok(sentence)
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }
}

impl Default for MoneyConverter {
    fn default() -> Self {
        Self::standard()
    }
}

/// Convert a non-negative amount to its English words.
///
/// Rounds to cents half away from zero, then spells the dollars with the
/// standard (BILLION) vocabulary.
///
/// ```
/// use money_words::money_to_words;
/// use rust_decimal::Decimal;
///
/// assert_eq!(
///     money_to_words(Decimal::new(12345, 2)).unwrap(),
///     "ONE HUNDRED AND TWENTY-THREE DOLLARS AND FORTY-FIVE CENTS"
/// );
/// assert!(money_to_words(Decimal::new(-1, 2)).is_err());
/// ```
pub fn money_to_words(amount: Decimal) -> WordsResult<String> {
    MoneyConverter::standard().convert(amount)
}
