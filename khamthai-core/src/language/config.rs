//! Configuration structures and validation
//!
//! This module defines the TOML schema for custom rule sets.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::language::thai;

/// Root rule set configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_mark: Option<char>,
    #[serde(default)]
    pub disallowed: Vec<char>,
    #[serde(default)]
    pub exceptions: Vec<String>,
    #[serde(default)]
    pub valid_finals: Vec<char>,
    /// Matched against the whole word only
    #[serde(default)]
    pub prefixes: Vec<String>,
    #[serde(default)]
    pub consonants: Vec<ConsonantRange>,
    // Tables must follow plain values when serialized
    pub metadata: Metadata,
}

/// Rule set metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Inclusive code-point range of consonant letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsonantRange {
    pub start: char,
    pub end: char,
}

impl RulesConfig {
    /// Configuration equivalent to the built-in Thai tables
    pub fn thai() -> Self {
        Self {
            cancellation_mark: Some(thai::THANTHAKHAT),
            disallowed: thai::NON_NATIVE_LETTERS.to_vec(),
            exceptions: thai::EXCEPTION_WORDS.iter().map(|w| w.to_string()).collect(),
            valid_finals: thai::NATIVE_FINALS.to_vec(),
            prefixes: thai::DIPHTHONG_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            consonants: thai::CONSONANT_RANGES
                .iter()
                .map(|&(start, end)| ConsonantRange { start, end })
                .collect(),
            metadata: Metadata {
                code: thai::CODE.to_string(),
                name: thai::NAME.to_string(),
            },
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(ConfigError::Invalid("metadata.code is empty".to_string()));
        }

        if self.metadata.name.trim().is_empty() {
            return Err(ConfigError::Invalid("metadata.name is empty".to_string()));
        }

        if self.consonants.is_empty() {
            return Err(ConfigError::Invalid(
                "no consonant ranges defined".to_string(),
            ));
        }

        if let Some(range) = self.consonants.iter().find(|r| r.start > r.end) {
            return Err(ConfigError::Invalid(format!(
                "consonant range {:?}..={:?} is reversed",
                range.start, range.end
            )));
        }

        if self.exceptions.iter().any(|w| w.is_empty()) {
            return Err(ConfigError::Invalid(
                "exceptions contains an empty word".to_string(),
            ));
        }

        if self.prefixes.iter().any(|p| p.is_empty()) {
            return Err(ConfigError::Invalid(
                "prefixes contains an empty string".to_string(),
            ));
        }

        Ok(())
    }
}
