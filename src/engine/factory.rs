// ============================================================================
// Converter Factory
// Creates money converters from configuration
// ============================================================================

use super::converter::MoneyConverter;
use crate::domain::{ConfigError, ConverterConfig, ScaleTier};
use rust_decimal::Decimal;

/// Create a converter from a configuration
pub fn create_from_config(config: ConverterConfig) -> Result<MoneyConverter, ConfigError> {
    MoneyConverter::new(config)
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating converters with fluent API
///
/// # Example
/// ```
/// use money_words::engine::MoneyConverterBuilder;
/// use rust_decimal::Decimal;
///
/// let converter = MoneyConverterBuilder::new()
///     .trillion_scale()
///     .with_max_amount(Decimal::from(5_000_000_000_000u64))
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     converter.convert(Decimal::from(2_000_000_000_000u64)).unwrap(),
///     "TWO TRILLION DOLLARS"
/// );
/// ```
pub struct MoneyConverterBuilder {
    config: ConverterConfig,
}

impl Default for MoneyConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MoneyConverterBuilder {
    /// Create a new builder starting from the standard configuration
    pub fn new() -> Self {
        Self {
            config: ConverterConfig::standard(),
        }
    }

    // ========================================================================
    // Scale Vocabulary
    // ========================================================================

    /// Stop at BILLION (default)
    pub fn billion_scale(mut self) -> Self {
        self.config.scale_tier = ScaleTier::Billion;
        self
    }

    /// Add the TRILLION tier, lifting the amount limit to the new ceiling
    pub fn trillion_scale(mut self) -> Self {
        self.config.scale_tier = ScaleTier::Trillion;
        self.config.max_amount = None;
        self
    }

    // ========================================================================
    // Input Limits
    // ========================================================================

    /// Set the largest accepted amount
    pub fn with_max_amount(mut self, max: Decimal) -> Self {
        self.config.max_amount = Some(max);
        self
    }

    /// Accept amounts up to the tier ceiling
    pub fn without_max_amount(mut self) -> Self {
        self.config.max_amount = None;
        self
    }

    /// Set the number of decimal digits accepted in text input
    pub fn with_fraction_digits(mut self, digits: u32) -> Self {
        self.config.fraction_digits = digits;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the converter
    pub fn build(self) -> Result<MoneyConverter, ConfigError> {
        create_from_config(self.config)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ConverterConfig {
        &self.config
    }
}
