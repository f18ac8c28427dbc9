//! Built-in Thai tables
//!
//! Sources for the heuristics:
//! - ทีมงานทรูปลูกปัญญา 2015. ลักษณะของคำไทยแท้
//! - วารุณี บำรุงรส 2010. คำไทยแท้

use crate::language::interface::WordRules;

/// Language code of the built-in rule set
pub const CODE: &str = "th";

/// Display name of the built-in rule set
pub const NAME: &str = "Thai";

/// Thanthakhat, marks the preceding consonant as silent
pub const THANTHAKHAT: char = '\u{0E4C}';

/// Letters that do not occur in authentic Thai words
pub const NON_NATIVE_LETTERS: [char; 12] = [
    'ฆ', 'ณ', 'ฌ', 'ฎ', 'ฏ', 'ฐ', 'ฑ', 'ฒ', 'ธ', 'ศ', 'ษ', 'ฬ',
];

/// Authentic words that the general heuristic would reject
pub const EXCEPTION_WORDS: [&str; 15] = [
    "ฆ่า",
    "เฆี่ยน",
    "ศึก",
    "ศอก",
    "เศิก",
    "เศร้า",
    "ธ",
    "ณ",
    "ฯพณฯ",
    "ใหญ่",
    "หญ้า",
    "ควาย",
    "ความ",
    "กริ่งเกรง",
    "ผลิ",
];

/// Consonants an authentic word may end with
pub const NATIVE_FINALS: [char; 8] = ['ก', 'ด', 'บ', 'น', 'ง', 'ม', 'ย', 'ว'];

/// Diphthong prefixes that can start an authentic word
pub const DIPHTHONG_PREFIXES: [&str; 4] = ["กะ", "กระ", "ปะ", "ประ"];

/// Consonant code-point ranges: ก..ฬ and ฮ
///
/// อ (U+0E2D) sits between them and is not counted.
pub const CONSONANT_RANGES: [(char, char); 2] =
    [('\u{0E01}', '\u{0E2C}'), ('\u{0E2E}', '\u{0E2E}')];

/// Explicit code-point test for the consonants counted by the classifier
#[inline]
pub fn is_thai_consonant(ch: char) -> bool {
    matches!(ch, '\u{0E01}'..='\u{0E2C}' | '\u{0E2E}')
}

/// Zero-sized rule set backed by the `const` tables above
#[derive(Debug, Default, Clone, Copy)]
pub struct ThaiRules;

impl ThaiRules {
    /// Create the built-in rule set
    pub const fn new() -> Self {
        Self
    }
}

impl WordRules for ThaiRules {
    fn code(&self) -> &str {
        CODE
    }

    #[inline]
    fn is_exception(&self, word: &str) -> bool {
        EXCEPTION_WORDS.contains(&word)
    }

    #[inline]
    fn cancellation_mark(&self) -> Option<char> {
        Some(THANTHAKHAT)
    }

    #[inline]
    fn is_disallowed(&self, ch: char) -> bool {
        NON_NATIVE_LETTERS.contains(&ch)
    }

    #[inline]
    fn is_consonant(&self, ch: char) -> bool {
        is_thai_consonant(ch)
    }

    #[inline]
    fn is_valid_final(&self, ch: char) -> bool {
        NATIVE_FINALS.contains(&ch)
    }

    #[inline]
    fn is_prefix(&self, word: &str) -> bool {
        DIPHTHONG_PREFIXES.contains(&word)
    }
}
