//! Authentic-word classification
//!
//! Rules are applied in a fixed order and the first one that matches decides:
//!
//! 1. exception list → authentic
//! 2. cancellation mark anywhere → foreign
//! 3. any disallowed letter → foreign
//! 4. keep only consonants of the target script
//! 5. no consonants left → foreign
//! 6. exactly one consonant, or a valid final consonant → authentic
//! 7. whole word is a diphthong prefix → authentic
//! 8. otherwise → foreign
//!
//! # Known limitation
//!
//! Step 7 is meant to recognise words that *start* with a diphthong prefix
//! such as `กระ`, but it compares the whole word. Only a word that is exactly
//! one of the prefixes matches. Handling real prefixes needs the word split
//! into morphemes first, which is outside this crate.

use std::path::Path;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::error::Result;
use crate::language::{
    get_rules, interface::WordRules, thai::ThaiRules, ConfigurableWordRules, RulesConfig,
};

/// Consonants of a typical word fit without allocating
type Consonants = SmallVec<[char; 16]>;

/// The rule that decided a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Listed as an exception
    Exception,
    /// Contains the cancellation mark
    CancellationMark,
    /// Contains a letter that never occurs in authentic words
    DisallowedLetter(char),
    /// No consonant of the target script
    NoConsonants,
    /// Exactly one consonant
    SingleConsonant(char),
    /// Last consonant is a valid final
    ValidFinal(char),
    /// Whole word equals a diphthong prefix
    DiphthongPrefix,
    /// Last consonant is not a valid final
    InvalidFinal(char),
}

impl Verdict {
    /// Whether this verdict classifies the word as authentic
    pub fn is_authentic(self) -> bool {
        matches!(
            self,
            Verdict::Exception
                | Verdict::SingleConsonant(_)
                | Verdict::ValidFinal(_)
                | Verdict::DiphthongPrefix
        )
    }
}

/// Run the classification rules against `word`
pub fn classify_with<R: WordRules + ?Sized>(rules: &R, word: &str) -> Verdict {
    if rules.is_exception(word) {
        return Verdict::Exception;
    }

    if rules.has_cancellation_mark(word) {
        return Verdict::CancellationMark;
    }

    if let Some(ch) = rules.first_disallowed(word) {
        return Verdict::DisallowedLetter(ch);
    }

    let consonants: Consonants = word.chars().filter(|&ch| rules.is_consonant(ch)).collect();

    let last = match consonants.last() {
        Some(&ch) => ch,
        None => return Verdict::NoConsonants,
    };

    if consonants.len() == 1 {
        return Verdict::SingleConsonant(last);
    }

    if rules.is_valid_final(last) {
        return Verdict::ValidFinal(last);
    }

    if rules.is_prefix(word) {
        return Verdict::DiphthongPrefix;
    }

    Verdict::InvalidFinal(last)
}

/// Classify `word` against the built-in Thai tables
pub fn classify(word: &str) -> Verdict {
    classify_with(&ThaiRules::new(), word)
}

/// Check if `word` is an authentic Thai word (คำไทยแท้)
///
/// Never fails: words without any Thai consonant, including the empty
/// string, are simply not authentic.
///
/// ```rust
/// use khamthai_core::is_authentic;
///
/// assert!(is_authentic("มะม่วง"));
/// assert!(is_authentic("ตะวัน"));
/// assert!(!is_authentic("สามารถ"));
/// assert!(!is_authentic("อิสริยาภรณ์"));
/// assert!(!is_authentic("Avocado"));
/// ```
pub fn is_authentic(word: &str) -> bool {
    classify(word).is_authentic()
}

/// Shareable classifier bound to one rule set
#[derive(Clone)]
pub struct Classifier {
    rules: Arc<dyn WordRules>,
}

impl Classifier {
    /// Classifier over the built-in Thai tables
    pub fn thai() -> Self {
        Self::with_rules(Arc::new(ThaiRules::new()))
    }

    /// Classifier over a built-in rule set looked up by code
    pub fn for_language(code: &str) -> Result<Self> {
        Ok(Self::with_rules(get_rules(code)?))
    }

    /// Classifier over arbitrary rules
    pub fn with_rules(rules: Arc<dyn WordRules>) -> Self {
        Self { rules }
    }

    /// Classifier over a custom rule set
    pub fn from_config(config: &RulesConfig) -> Result<Self> {
        let rules = ConfigurableWordRules::from_config(config)?;
        Ok(Self::with_rules(Arc::new(rules)))
    }

    /// Classifier over a rule set given as TOML
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Self::from_config(&RulesConfig::from_toml_str(toml_str)?)
    }

    /// Classifier over a rule set read from a TOML file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_config(&RulesConfig::from_path(path)?)
    }

    /// Code of the underlying rule set
    pub fn language(&self) -> &str {
        self.rules.code()
    }

    /// Classify a word and report the deciding rule
    pub fn classify(&self, word: &str) -> Verdict {
        classify_with(self.rules.as_ref(), word)
    }

    /// Check if a word is authentic under this rule set
    pub fn is_authentic(&self, word: &str) -> bool {
        self.classify(word).is_authentic()
    }

    /// Keep only the authentic words of an already tokenized sequence
    pub fn filter_authentic<'a, I>(&'a self, words: I) -> impl Iterator<Item = I::Item> + 'a
    where
        I: IntoIterator,
        I::IntoIter: 'a,
        I::Item: AsRef<str>,
    {
        words
            .into_iter()
            .filter(move |word| self.is_authentic(word.as_ref()))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::thai()
    }
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier")
            .field("language", &self.language())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_examples() {
        assert!(!is_authentic("Avocado"));
        assert!(is_authentic("มะม่วง"));
        assert!(is_authentic("ตะวัน"));
        assert!(!is_authentic("สามารถ"));
        assert!(!is_authentic("อิสริยาภรณ์"));
    }

    #[test]
    fn test_rule_order() {
        // Exception beats a disallowed letter
        assert_eq!(classify("ศึก"), Verdict::Exception);
        // Cancellation mark is checked before disallowed letters
        assert_eq!(classify("ธรรม์"), Verdict::CancellationMark);
        assert_eq!(classify("ธรรม"), Verdict::DisallowedLetter('ธ'));
        assert_eq!(classify("ครุฑ"), Verdict::DisallowedLetter('ฑ'));
    }

    #[test]
    fn test_first_disallowed_letter_reported() {
        assert_eq!(classify("ศาสนา"), Verdict::DisallowedLetter('ศ'));
        assert_eq!(classify("พิษณุ"), Verdict::DisallowedLetter('ษ'));
    }

    #[test]
    fn test_no_consonants() {
        assert_eq!(classify(""), Verdict::NoConsonants);
        assert_eq!(classify("Avocado"), Verdict::NoConsonants);
        assert_eq!(classify("อา"), Verdict::NoConsonants);
        assert_eq!(classify("123"), Verdict::NoConsonants);
    }

    #[test]
    fn test_single_consonant() {
        assert_eq!(classify("ไป"), Verdict::SingleConsonant('ป'));
        assert_eq!(classify("ร"), Verdict::SingleConsonant('ร'));
        // A single valid final is still reported as a single consonant
        assert_eq!(classify("กา"), Verdict::SingleConsonant('ก'));
    }

    #[test]
    fn test_valid_and_invalid_finals() {
        assert_eq!(classify("มะม่วง"), Verdict::ValidFinal('ง'));
        assert_eq!(classify("ตะวัน"), Verdict::ValidFinal('น'));
        assert_eq!(classify("สามารถ"), Verdict::InvalidFinal('ถ'));
        assert_eq!(classify("กาแฟ"), Verdict::InvalidFinal('ฟ'));
    }

    #[test]
    fn test_prefix_matches_whole_word_only() {
        assert_eq!(classify("กระ"), Verdict::DiphthongPrefix);
        assert_eq!(classify("ประ"), Verdict::DiphthongPrefix);
        // Longer words are decided by their final consonant, never the prefix rule
        assert_eq!(classify("กระทรวง"), Verdict::ValidFinal('ง'));
        assert_eq!(classify("ประปา"), Verdict::InvalidFinal('ป'));
    }

    #[test]
    fn test_mixed_script_uses_thai_consonants_only() {
        assert_eq!(classify("abcมาก"), Verdict::ValidFinal('ก'));
        assert_eq!(classify("ไปx"), Verdict::SingleConsonant('ป'));
    }

    #[test]
    fn test_verdict_is_authentic_mapping() {
        assert!(Verdict::Exception.is_authentic());
        assert!(Verdict::SingleConsonant('ก').is_authentic());
        assert!(Verdict::ValidFinal('ก').is_authentic());
        assert!(Verdict::DiphthongPrefix.is_authentic());
        assert!(!Verdict::CancellationMark.is_authentic());
        assert!(!Verdict::DisallowedLetter('ศ').is_authentic());
        assert!(!Verdict::NoConsonants.is_authentic());
        assert!(!Verdict::InvalidFinal('ร').is_authentic());
    }

    #[test]
    fn test_long_word_spills_smallvec() {
        let word = "มะม่วง".repeat(20);
        assert_eq!(classify(&word), Verdict::ValidFinal('ง'));
    }

    #[test]
    fn test_classifier_handle() {
        let classifier = Classifier::default();
        assert_eq!(classifier.language(), "th");
        assert!(classifier.is_authentic("ความ"));
        assert_eq!(format!("{classifier:?}"), "Classifier { language: \"th\" }");
    }

    #[test]
    fn test_filter_authentic() {
        let classifier = Classifier::thai();
        let words = ["มะม่วง", "สามารถ", "ตะวัน", "Avocado"];
        let kept: Vec<&str> = classifier.filter_authentic(words).collect();
        assert_eq!(kept, vec!["มะม่วง", "ตะวัน"]);

        let owned = vec!["ความ".to_string(), "อิสริยาภรณ์".to_string()];
        let kept: Vec<String> = classifier.filter_authentic(owned).collect();
        assert_eq!(kept, vec!["ความ".to_string()]);
    }
}
