//! SGR escape stripping
//!
//! Only color/style sequences of the form `ESC [ <digits/semicolons> m` are
//! removed. Cursor movement and other CSI/OSC sequences are left untouched.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static SGR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("Invalid SGR_RE regex"));

/// Remove every SGR escape sequence from `text`
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    SGR_RE.replace_all(text, "")
}
