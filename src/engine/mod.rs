// ============================================================================
// Engine Module
// The money-to-words API: free function, converter and builder
// ============================================================================

mod converter;

pub mod factory;

pub use converter::{money_to_words, MoneyConverter};
pub use factory::{create_from_config, MoneyConverterBuilder};
