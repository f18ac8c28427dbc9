//! Authentic Thai word classification (คำไทยแท้)
//!
//! This crate decides whether a single Thai word belongs to the native core
//! vocabulary or is a loanword, using orthographic heuristics only: an
//! exception list, the Thanthakhat cancellation mark, letters that do not
//! occur in native words, the set of valid final consonants, and diphthong
//! prefixes.
//!
//! The classifier works on one word at a time. Splitting text into words is
//! left to the caller.
//!
//! # Example
//!
//! ```rust
//! use khamthai_core::{classify, is_authentic, Verdict};
//!
//! assert!(is_authentic("มะม่วง"));
//! assert!(!is_authentic("สามารถ"));
//!
//! // Ask which rule decided
//! assert_eq!(classify("ศึก"), Verdict::Exception);
//! assert_eq!(classify("จันทร์"), Verdict::CancellationMark);
//! ```
//!
//! Custom rule sets can be loaded from TOML:
//!
//! ```rust
//! use khamthai_core::{Classifier, RulesConfig};
//!
//! let mut config = RulesConfig::thai();
//! config.exceptions.push("สามารถ".to_string());
//!
//! let classifier = Classifier::from_config(&config).unwrap();
//! assert!(classifier.is_authentic("สามารถ"));
//! ```

pub mod classifier;
pub mod error;
pub mod language;
pub mod legacy;

pub use classifier::{classify, classify_with, is_authentic, Classifier, Verdict};
pub use error::{ConfigError, Result};
pub use language::{ConfigurableWordRules, RulesConfig, ThaiRules, WordRules};
#[allow(deprecated)]
pub use legacy::legacy_check;
pub use legacy::{legacy_check_with, DeprecationNotice};
