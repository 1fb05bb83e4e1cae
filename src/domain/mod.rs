// ============================================================================
// Domain Module
// Scale vocabulary and converter configuration
// ============================================================================

pub mod config;
pub mod scale;

pub use config::{ConfigError, ConverterConfig, DEFAULT_FRACTION_DIGITS};
pub use scale::{Scale, ScaleGroup, ScaleTable, ScaleTier, MAX_GROUP, MAX_GROUPS};
