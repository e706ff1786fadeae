// src/mappers/mod.rs
//! Text decomposition: words (frequency map), phrases (ordered), paragraphs
//! (ordered). Word and paragraph mapping go through the chunk splitter above
//! the size threshold and process chunks in parallel on the caller's pool.

pub mod paragraph;
pub mod phrase;
pub mod word;

pub use paragraph::map_paragraphs;
pub use phrase::map_phrases;
pub use word::map_words;

/// Separator set used for word tokenization. A word token is a maximal run of
/// characters outside this set.
pub const WORD_SEPARATORS: &[char] = &[
    ' ', '\n', '\r', '\t', '.', ',', '!', '?', ';', ':', '-', '_', '(', ')', '[', ']', '{', '}',
    '"', '\'',
];
