// src/mappers/word.rs
//! Case-insensitive word frequency mapping.

use rayon::prelude::*;
use std::collections::HashMap;
use tracing::debug;

use super::WORD_SEPARATORS;
use crate::chunk::{self, CHUNK_THRESHOLD};

/// Maps `text` to a word → occurrence-count table. Keys are lowercased word
/// tokens. Inputs above the chunk threshold are split at separator boundaries
/// and counted per-chunk in parallel; per-chunk tables are merged by summing
/// counts, so the totals do not depend on chunk completion order.
pub fn map_words(text: &str) -> HashMap<String, usize> {
    if text.trim().is_empty() {
        return HashMap::new();
    }

    if text.len() > CHUNK_THRESHOLD {
        let chunks = chunk::split_by_set(text, CHUNK_THRESHOLD, WORD_SEPARATORS);
        debug!(chunks = chunks.len(), bytes = text.len(), "word mapping chunked input");
        chunks
            .par_iter()
            .map(|c| count_chunk(c.text))
            .reduce(HashMap::new, merge_counts)
    } else {
        count_chunk(text)
    }
}

fn count_chunk(chunk: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    let mut start = 0;
    for (i, c) in chunk.char_indices() {
        if WORD_SEPARATORS.contains(&c) {
            bump(&mut counts, &chunk[start..i]);
            start = i + c.len_utf8();
        }
    }
    bump(&mut counts, &chunk[start..]);
    counts
}

fn bump(counts: &mut HashMap<String, usize>, run: &str) {
    let word = run.trim();
    if !word.is_empty() {
        *counts.entry(word.to_lowercase()).or_insert(0) += 1;
    }
}

fn merge_counts(
    mut into: HashMap<String, usize>,
    from: HashMap<String, usize>,
) -> HashMap<String, usize> {
    for (word, n) in from {
        *into.entry(word).or_insert(0) += n;
    }
    into
}
