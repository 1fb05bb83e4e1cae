// ============================================================================
// Converter Configuration
// Scale vocabulary and input limits for a money-to-words converter
// ============================================================================

use super::scale::ScaleTier;
use rust_decimal::Decimal;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of decimal digits accepted in raw text input
pub const DEFAULT_FRACTION_DIGITS: u32 = 2;

/// Most fractional digits a `Decimal` can carry
const MAX_FRACTION_DIGITS: u32 = 28;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("maximum amount cannot be negative")]
    NegativeMaximum,

    #[error("maximum amount {max} exceeds the {tier:?} tier ceiling {ceiling}")]
    MaximumBeyondTier {
        max: Decimal,
        tier: ScaleTier,
        ceiling: Decimal,
    },

    #[error("fraction digits must be between 1 and 28, got {0}")]
    FractionDigits(u32),

    #[error("invalid configuration document: {0}")]
    Parse(String),
}

// ============================================================================
// Complete Converter Configuration
// ============================================================================

/// Configuration shared by the converter and the input boundary
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConverterConfig {
    /// Highest scale word the converter may use
    pub scale_tier: ScaleTier,

    /// Largest amount the converter and the input boundary accept.
    /// None means the tier ceiling is the only limit.
    pub max_amount: Option<Decimal>,

    /// Most decimal digits accepted in raw text input
    pub fraction_digits: u32,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl ConverterConfig {
    /// Create a new configuration for the given tier, limited only by the
    /// tier ceiling
    pub fn new(scale_tier: ScaleTier) -> Self {
        Self {
            scale_tier,
            max_amount: None,
            fraction_digits: DEFAULT_FRACTION_DIGITS,
        }
    }

    /// Builder method: Set the largest accepted amount
    pub fn with_max_amount(mut self, max: Decimal) -> Self {
        self.max_amount = Some(max);
        self
    }

    /// Builder method: Set the number of decimal digits accepted in text input
    pub fn with_fraction_digits(mut self, digits: u32) -> Self {
        self.fraction_digits = digits;
        self
    }

    /// Highest amount the tier can spell, including 99 cents
    pub fn tier_ceiling(&self) -> Decimal {
        Decimal::from(self.scale_tier.table().max_value()) + Decimal::new(99, 2)
    }

    /// The effective maximum: the configured one, else the tier ceiling
    pub fn effective_max_amount(&self) -> Decimal {
        self.max_amount.unwrap_or_else(|| self.tier_ceiling())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(max) = self.max_amount {
            if max < Decimal::ZERO {
                return Err(ConfigError::NegativeMaximum);
            }

            let ceiling = self.tier_ceiling();
            if max > ceiling {
                return Err(ConfigError::MaximumBeyondTier {
                    max,
                    tier: self.scale_tier,
                    ceiling,
                });
            }
        }

        if self.fraction_digits == 0 || self.fraction_digits > MAX_FRACTION_DIGITS {
            return Err(ConfigError::FractionDigits(self.fraction_digits));
        }

        Ok(())
    }

    /// Load and validate a configuration from JSON.
    ///
    /// ```
    /// use money_words::domain::{ConfigError, ConverterConfig, ScaleTier};
    /// use rust_decimal::Decimal;
    ///
    /// let config = ConverterConfig::from_json(
    ///     r#"{ "scale_tier": "Trillion", "max_amount": "5000.00", "fraction_digits": 2 }"#,
    /// )?;
    /// assert_eq!(config.scale_tier, ScaleTier::Trillion);
    /// assert_eq!(config.effective_max_amount(), Decimal::new(500000, 2));
    ///
    /// assert!(matches!(
    ///     ConverterConfig::from_json(r#"{ "scale_tier": "Billion" }"#),
    ///     Err(ConfigError::Parse(_))
    /// ));
    /// # Ok::<(), ConfigError>(())
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(document).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ConverterConfig {
    /// Web form defaults
    /// - BILLION tier
    /// - Maximum 999,999,999,999.99
    /// - Two decimal digits
    pub fn standard() -> Self {
        Self::new(ScaleTier::Billion).with_max_amount(Decimal::new(99_999_999_999_999, 2))
    }

    /// Extended vocabulary
    /// - TRILLION tier
    /// - Maximum is the tier ceiling
    pub fn trillion_tier() -> Self {
        Self::new(ScaleTier::Trillion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_config() {
        let config = ConverterConfig::standard();
        assert_eq!(config.scale_tier, ScaleTier::Billion);
        assert_eq!(config.fraction_digits, 2);
        assert_eq!(
            config.effective_max_amount().to_string(),
            "999999999999.99"
        );
        assert_eq!(config.effective_max_amount(), config.tier_ceiling());
        assert!(config.validate().is_ok());
        assert_eq!(config, ConverterConfig::default());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ConverterConfig::trillion_tier()
            .with_max_amount(Decimal::from(5000))
            .with_fraction_digits(3);

        assert_eq!(config.max_amount, Some(Decimal::from(5000)));
        assert_eq!(config.fraction_digits, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_trillion_ceiling() {
        let config = ConverterConfig::trillion_tier();
        assert_eq!(config.max_amount, None);
        assert_eq!(
            config.effective_max_amount(),
            Decimal::new(99_999_999_999_999_999, 2)
        );
    }

    #[test]
    fn test_validation() {
        let negative = ConverterConfig::standard().with_max_amount(Decimal::NEGATIVE_ONE);
        assert_eq!(negative.validate(), Err(ConfigError::NegativeMaximum));

        let beyond = ConverterConfig::standard().with_max_amount(Decimal::from(1_000_000_000_000u64));
        assert!(matches!(
            beyond.validate(),
            Err(ConfigError::MaximumBeyondTier { .. })
        ));

        let no_digits = ConverterConfig::standard().with_fraction_digits(0);
        assert_eq!(no_digits.validate(), Err(ConfigError::FractionDigits(0)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let config = ConverterConfig::from_json(
            r#"{ "scale_tier": "Trillion", "max_amount": "5000.00", "fraction_digits": 2 }"#,
        )
        .unwrap();
        assert_eq!(config.scale_tier, ScaleTier::Trillion);
        assert_eq!(config.max_amount, Some(Decimal::new(500000, 2)));

        let invalid = ConverterConfig::from_json(
            r#"{ "scale_tier": "Billion", "max_amount": "-1", "fraction_digits": 2 }"#,
        );
        assert_eq!(invalid, Err(ConfigError::NegativeMaximum));

        assert!(matches!(
            ConverterConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
