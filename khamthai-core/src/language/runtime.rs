//! Runtime implementation of word rules
//!
//! This module bridges a validated [`RulesConfig`] and the hot-path
//! [`WordRules`] trait.

use crate::error::Result;
use crate::language::{
    config::RulesConfig,
    interface::WordRules,
    tables::{CharRanges, CharSet, WordSet},
};

/// Configurable word rules implementation
#[derive(Debug, Clone)]
pub struct ConfigurableWordRules {
    /// Rule set metadata
    code: String,
    name: String,

    /// Runtime tables
    cancellation_mark: Option<char>,
    disallowed: CharSet,
    exceptions: WordSet,
    valid_finals: CharSet,
    prefixes: WordSet,
    consonants: CharRanges,
}

impl ConfigurableWordRules {
    /// Create from configuration
    pub fn from_config(config: &RulesConfig) -> Result<Self> {
        config.validate()?;

        let rules = Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            cancellation_mark: config.cancellation_mark,
            disallowed: CharSet::new(config.disallowed.iter().copied()),
            exceptions: WordSet::new(config.exceptions.iter().cloned()),
            valid_finals: CharSet::new(config.valid_finals.iter().copied()),
            prefixes: WordSet::new(config.prefixes.iter().cloned()),
            consonants: CharRanges::new(config.consonants.iter().map(|r| (r.start, r.end))),
        };

        tracing::debug!(
            code = %rules.code,
            exceptions = rules.exceptions.len(),
            disallowed = rules.disallowed.len(),
            valid_finals = rules.valid_finals.len(),
            prefixes = rules.prefixes.len(),
            consonant_ranges = rules.consonants.len(),
            "built configurable word rules"
        );

        Ok(rules)
    }

    /// Display name from the configuration metadata
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl WordRules for ConfigurableWordRules {
    fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    fn is_exception(&self, word: &str) -> bool {
        self.exceptions.contains(word)
    }

    #[inline]
    fn cancellation_mark(&self) -> Option<char> {
        self.cancellation_mark
    }

    #[inline]
    fn is_disallowed(&self, ch: char) -> bool {
        self.disallowed.contains(ch)
    }

    #[inline]
    fn is_consonant(&self, ch: char) -> bool {
        self.consonants.contains(ch)
    }

    #[inline]
    fn is_valid_final(&self, ch: char) -> bool {
        self.valid_finals.contains(ch)
    }

    #[inline]
    fn is_prefix(&self, word: &str) -> bool {
        self.prefixes.contains(word)
    }
}
