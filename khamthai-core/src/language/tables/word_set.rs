//! Whole-word membership

use std::collections::HashSet;

/// Set of exact words
///
/// Lookups compare whole strings. No normalization is applied, so combining
/// marks must appear in the same order as in the stored word.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// Create from a list of words
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact membership test
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if there are no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
