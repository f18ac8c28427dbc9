//! Runtime tables for configurable rule sets
//!
//! All tables are built once and allocation-free during lookup.

pub mod char_set;
pub mod ranges;
pub mod word_set;

pub use char_set::CharSet;
pub use ranges::CharRanges;
pub use word_set::WordSet;
