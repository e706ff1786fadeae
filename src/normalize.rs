// src/normalize.rs
//! Accent-insensitive text normalization.
//!
//! Lowercase first, then strip combining marks via canonical decomposition
//! (NFD), drop the marks, and recompose (NFC). The result is what every
//! matcher in this crate compares against, so "fotossíntese" and
//! "FOTOSSINTESE" normalize to the same string.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercases and removes diacritical marks. Idempotent: applying it twice
/// yields the same string as applying it once.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect()
}
