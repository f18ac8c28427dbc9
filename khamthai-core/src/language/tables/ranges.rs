//! Code-point range matching for consonant classes

/// Sorted, inclusive code-point ranges
#[derive(Debug, Clone, Default)]
pub struct CharRanges {
    ranges: Vec<(char, char)>,
}

impl CharRanges {
    /// Create from inclusive `(start, end)` pairs
    ///
    /// Callers validate `start <= end` beforehand; ranges are sorted here so
    /// lookup can stop early.
    pub fn new(ranges: impl IntoIterator<Item = (char, char)>) -> Self {
        let mut ranges: Vec<(char, char)> = ranges.into_iter().collect();
        ranges.sort_unstable();
        Self { ranges }
    }

    /// True if `ch` falls inside any range
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        for &(start, end) in &self.ranges {
            if ch < start {
                return false;
            }
            if ch <= end {
                return true;
            }
        }
        false
    }

    /// Number of ranges
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// True if no ranges are defined
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thai_consonant_ranges() {
        let ranges = CharRanges::new([('ฮ', 'ฮ'), ('ก', 'ฬ')]);
        assert!(ranges.contains('ก'));
        assert!(ranges.contains('ม'));
        assert!(ranges.contains('ฬ'));
        assert!(!ranges.contains('อ'));
        assert!(ranges.contains('ฮ'));
        assert!(!ranges.contains('ะ'));
        assert!(!ranges.contains('A'));
    }

    #[test]
    fn test_empty_ranges_match_nothing() {
        let ranges = CharRanges::new([]);
        assert!(ranges.is_empty());
        assert!(!ranges.contains('ก'));
    }
}
