//! Public contract for word rules
//!
//! The classifier only ever talks to a rule set through [`WordRules`], so the
//! built-in Thai tables and TOML-configured rule sets are interchangeable.
//! Every method is a lookup against immutable data: no allocation, no I/O.

/// Orthographic tables consulted by the classifier
pub trait WordRules: Send + Sync + 'static {
    /// Short language code, e.g. `"th"`
    fn code(&self) -> &str;

    /// Whole-word membership in the exception list
    fn is_exception(&self, word: &str) -> bool;

    /// The cancellation mark, if this rule set has one
    fn cancellation_mark(&self) -> Option<char>;

    /// Letter that never occurs in an authentic word
    fn is_disallowed(&self, ch: char) -> bool;

    /// Letter counted as a consonant of the target script
    fn is_consonant(&self, ch: char) -> bool;

    /// Consonant permitted in final position
    fn is_valid_final(&self, ch: char) -> bool;

    /// Whole-word equality against the prefix list
    ///
    /// This compares the entire word, not a leading substring. A word that
    /// merely starts with a prefix does not match; detecting that would need
    /// the word split into morphemes first.
    fn is_prefix(&self, word: &str) -> bool;

    /// True if the word contains the cancellation mark
    #[inline]
    fn has_cancellation_mark(&self, word: &str) -> bool {
        self.cancellation_mark()
            .is_some_and(|mark| word.contains(mark))
    }

    /// First disallowed letter in the word, scanning left to right
    #[inline]
    fn first_disallowed(&self, word: &str) -> Option<char> {
        word.chars().find(|&ch| self.is_disallowed(ch))
    }
}
