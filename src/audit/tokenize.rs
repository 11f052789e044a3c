//! Word token extraction
//!
//! A token is a maximal run of word characters: any Unicode letter or number,
//! plus underscore. Combining marks and other connector punctuation split
//! tokens. Matches never overlap and come back in input order.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("Invalid WORD_RE regex"));

/// Iterate over every token of `text` in order of occurrence
pub fn extract_tokens(text: &str) -> impl Iterator<Item = &str> {
    WORD_RE.find_iter(text).map(|m| m.as_str())
}
