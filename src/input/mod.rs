// ============================================================================
// Input Module
// Boundary between raw user text and the words engine
// ============================================================================
//
// A presentation layer (web form, CLI prompt) hands raw text to AmountForm
// and shows either the words or the InputError message. Core OutOfRange
// errors are mapped to a fixed user message here.

mod form;
mod validation;

pub use form::AmountForm;
pub use validation::{format_grouped, parse_amount, InputError, InputResult};
