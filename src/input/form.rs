// ============================================================================
// Amount Form
// Raw text in, words or a user-facing message out
// ============================================================================

use super::validation::{format_grouped, parse_amount, InputError, InputResult};
use crate::domain::{ConfigError, ConverterConfig};
use crate::engine::MoneyConverter;

/// The boundary a presentation layer drives: validate what the user typed,
/// convert it, and never leak internal error text.
///
/// ```
/// use money_words::input::AmountForm;
///
/// let form = AmountForm::standard();
/// assert_eq!(form.submit("21").unwrap(), "TWENTY-ONE DOLLARS");
/// assert_eq!(
///     form.submit("abc").unwrap_err().to_string(),
///     "Use a non-negative number with at most two decimal places (e.g. 123.45)."
/// );
/// ```
#[derive(Debug, Clone)]
pub struct AmountForm {
    converter: MoneyConverter,
}

impl AmountForm {
    pub fn new(config: ConverterConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            converter: MoneyConverter::new(config)?,
        })
    }

    /// Form with the standard limits (maximum 999,999,999,999.99)
    pub fn standard() -> Self {
        Self {
            converter: MoneyConverter::standard(),
        }
    }

    /// Validate and convert one submission.
    ///
    /// # Errors
    /// An `InputError` whose `Display` is the message to show the user.
    pub fn submit(&self, raw: &str) -> InputResult<String> {
        let outcome = parse_amount(raw, self.converter.config())
            .and_then(|amount| self.converter.convert(amount).map_err(InputError::from));

        if let Err(ref error) = outcome {
            tracing::debug!(%error, "rejected amount input");
        }
        outcome
    }

    /// Maximum accepted amount, formatted for display
    pub fn max_amount_display(&self) -> String {
        format_grouped(&self.converter.config().effective_max_amount())
    }
}

impl Default for AmountForm {
    fn default() -> Self {
        Self::standard()
    }
}
