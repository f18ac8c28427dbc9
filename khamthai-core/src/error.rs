//! Rule set error types
//!
//! Classification itself never fails. Only building a custom rule set
//! (parsing, validating, or reading it from disk) can produce an error.

use thiserror::Error;

/// Errors raised while loading or building a rule set
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading a rule file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML
    #[error("failed to parse rule set: {0}")]
    Parse(#[from] toml::de::Error),

    /// Rule set could not be serialized
    #[error("failed to serialize rule set: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Rule set parsed but failed validation
    #[error("invalid rule set: {0}")]
    Invalid(String),

    /// Unknown language code requested from the registry
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Result type for rule set operations
pub type Result<T> = std::result::Result<T, ConfigError>;
