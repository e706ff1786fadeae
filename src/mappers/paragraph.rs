// src/mappers/paragraph.rs
//! Paragraph extraction: one paragraph per newline-delimited segment.

use rayon::prelude::*;
use tracing::debug;

use crate::chunk::{self, CHUNK_THRESHOLD};

/// Splits `text` on single newlines, trims each segment, and drops segments
/// that are empty after trimming. Inputs above the chunk threshold are
/// processed per-chunk in parallel; per-chunk results keep their chunk start
/// offset as a merge key and are sorted by it before flattening, so paragraph
/// order matches source order on both paths.
pub fn map_paragraphs(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    if text.len() > CHUNK_THRESHOLD {
        let chunks = chunk::split_by_char(text, CHUNK_THRESHOLD, '\n');
        debug!(chunks = chunks.len(), bytes = text.len(), "paragraph mapping chunked input");
        let mut per_chunk: Vec<(usize, Vec<String>)> = chunks
            .par_iter()
            .map(|c| (c.offset, split_segment(c.text)))
            .collect();
        per_chunk.sort_by_key(|(offset, _)| *offset);
        per_chunk.into_iter().flat_map(|(_, p)| p).collect()
    } else {
        split_segment(text)
    }
}

fn split_segment(segment: &str) -> Vec<String> {
    segment
        .split('\n')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_single_newlines() {
        let paragraphs = map_paragraphs("primeiro\nsegundo\nterceiro");
        assert_eq!(paragraphs, vec!["primeiro", "segundo", "terceiro"]);
    }

    #[test]
    fn trims_and_drops_blank_segments() {
        let paragraphs = map_paragraphs("  um  \n\n   \ndois\n");
        assert_eq!(paragraphs, vec!["um", "dois"]);
    }

    #[test]
    fn blank_text_yields_nothing() {
        assert!(map_paragraphs("\n\n  \n").is_empty());
    }

    #[test]
    fn chunked_path_preserves_source_order() {
        let lines: Vec<String> = (0..2000).map(|i| format!("paragraph number {i}")).collect();
        let text = lines.join("\n");
        assert!(text.len() > CHUNK_THRESHOLD);

        let paragraphs = map_paragraphs(&text);
        assert_eq!(paragraphs, lines);
    }
}
