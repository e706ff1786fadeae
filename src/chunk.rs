// src/chunk.rs
//! Boundary-aligned chunking for parallel text processing.
//!
//! A chunk is a borrowed view into the source. Proposed cut points are walked
//! backward to the nearest separator so no token is ever physically divided
//! between two chunks; the separator run between chunks is skipped. Chunks are
//! exhaustive and ordered, and concatenating chunk contents plus the skipped
//! separators reconstructs the source exactly.

/// Inputs at or below this many bytes are processed in a single pass; longer
/// inputs are split and processed per-chunk in parallel.
pub const CHUNK_THRESHOLD: usize = 10_000;

/// A contiguous, non-owning slice of the source text.
#[derive(Debug, Clone, Copy)]
pub struct Chunk<'a> {
    /// Byte offset of this chunk within the source. Stable merge key for
    /// order-preserving parallel extraction.
    pub offset: usize,
    pub text: &'a str,
}

/// Splits on any character in `separators` (word-splitting variant).
pub fn split_by_set<'a>(text: &'a str, target_size: usize, separators: &[char]) -> Vec<Chunk<'a>> {
    split_impl(text, target_size, &|c| separators.contains(&c))
}

/// Splits on a single separator character (paragraph-splitting variant).
pub fn split_by_char(text: &str, target_size: usize, separator: char) -> Vec<Chunk<'_>> {
    split_impl(text, target_size, &|c| c == separator)
}

fn split_impl<'a>(
    text: &'a str,
    target_size: usize,
    is_sep: &dyn Fn(char) -> bool,
) -> Vec<Chunk<'a>> {
    let mut chunks = Vec::new();
    if text.is_empty() || target_size == 0 {
        return chunks;
    }

    let len = text.len();
    let mut start = 0;
    while start < len {
        let mut end = floor_char_boundary(text, (start + target_size).min(len));
        if end < len {
            let proposed = end;
            while end > start && !is_sep(char_at(text, end)) {
                end = prev_char_boundary(text, end);
            }
            if end == start {
                // One token exceeds the chunk size: hard cut at the proposed
                // end rather than scanning forever.
                end = proposed;
            }
        }
        if end == start {
            // Degenerate target smaller than a single character.
            end = next_char_boundary(text, start);
        }

        chunks.push(Chunk {
            offset: start,
            text: &text[start..end],
        });
        start = end;

        // Skip the separator run between chunks.
        while start < len && is_sep(char_at(text, start)) {
            start = next_char_boundary(text, start);
        }
    }

    chunks
}

fn char_at(text: &str, i: usize) -> char {
    text[i..].chars().next().expect("offset within text")
}

fn floor_char_boundary(text: &str, mut i: usize) -> usize {
    while !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn prev_char_boundary(text: &str, i: usize) -> usize {
    floor_char_boundary(text, i - 1)
}

fn next_char_boundary(text: &str, i: usize) -> usize {
    let mut j = i + 1;
    while j < text.len() && !text.is_char_boundary(j) {
        j += 1;
    }
    j
}
