//! Word rules for authentic-word classification
//!
//! The built-in Thai tables live in [`thai`]; custom rule sets are described
//! in TOML ([`RulesConfig`]) and compiled into [`ConfigurableWordRules`].

pub mod config;
pub mod interface;
pub mod loader;
pub mod runtime;
pub mod tables;
pub mod thai;

pub use config::{ConsonantRange, Metadata, RulesConfig};
pub use interface::WordRules;
pub use loader::{get_rules, list_available_languages};
pub use runtime::ConfigurableWordRules;
pub use thai::ThaiRules;
