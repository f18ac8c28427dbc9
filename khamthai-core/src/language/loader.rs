//! Rule set registry
//!
//! Built-in rule sets are created once per process and shared.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::{ConfigError, Result};
use crate::language::{interface::WordRules, thai::ThaiRules};

/// Built-in rule sets keyed by code and alias
static BUILTIN: OnceLock<HashMap<&'static str, Arc<dyn WordRules>>> = OnceLock::new();

fn builtin() -> &'static HashMap<&'static str, Arc<dyn WordRules>> {
    BUILTIN.get_or_init(|| {
        let mut map: HashMap<&'static str, Arc<dyn WordRules>> = HashMap::new();

        let thai: Arc<dyn WordRules> = Arc::new(ThaiRules::new());
        map.insert("th", thai.clone());
        map.insert("thai", thai);

        tracing::debug!(languages = map.len(), "initialized built-in word rules");
        map
    })
}

/// Look up built-in rules by language code
pub fn get_rules(code: &str) -> Result<Arc<dyn WordRules>> {
    builtin()
        .get(code)
        .cloned()
        .ok_or_else(|| ConfigError::UnsupportedLanguage(code.to_string()))
}

/// Codes and aliases accepted by [`get_rules`]
pub fn list_available_languages() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = builtin().keys().copied().collect();
    codes.sort_unstable();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_rules_thai() {
        let rules = get_rules("th").expect("Thai rules should exist");
        assert_eq!(rules.code(), "th");
    }

    #[test]
    fn test_alias_shares_instance() {
        let by_code = get_rules("th").unwrap();
        let by_alias = get_rules("thai").unwrap();
        assert!(Arc::ptr_eq(&by_code, &by_alias));
    }

    #[test]
    fn test_get_rules_unsupported() {
        match get_rules("nonexistent") {
            Err(ConfigError::UnsupportedLanguage(code)) => assert_eq!(code, "nonexistent"),
            _ => panic!("Expected UnsupportedLanguage error"),
        }
    }

    #[test]
    fn test_list_available_languages() {
        assert_eq!(list_available_languages(), vec!["th", "thai"]);
    }
}
