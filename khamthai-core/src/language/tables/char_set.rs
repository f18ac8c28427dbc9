//! Character membership with O(1) lookup
//!
//! ASCII gets a direct array lookup; everything else goes through a hash set.

use std::collections::HashSet;

/// Fast character set
#[derive(Debug, Clone)]
pub struct CharSet {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// HashSet for non-ASCII members
    non_ascii: HashSet<char>,
}

impl CharSet {
    /// Create from a list of characters
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();

        for ch in chars {
            if ch.is_ascii() {
                ascii_table[ch as usize] = true;
            } else {
                non_ascii.insert(ch);
            }
        }

        Self {
            ascii_table,
            non_ascii,
        }
    }

    /// Check membership - hot path
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.ascii_table.iter().filter(|&&b| b).count() + self.non_ascii.len()
    }

    /// True if the set has no members
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
