// src/reducers.rs
//! Ready-made scoring functions for the orchestrator.

use crate::analyzer::{Scorable, TextLevel};

/// Scores a word by its length: 10 points per character, capped at 100.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordLength;

impl Scorable for WordLength {
    fn level(&self) -> TextLevel {
        TextLevel::Word
    }

    fn analyze(&self, word: &str) -> anyhow::Result<f64> {
        Ok((word.chars().count() as f64 * 10.0).min(100.0))
    }
}

/// Scores a sentence by its word count: 5 points per word, capped at 100.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceComplexity;

impl Scorable for SentenceComplexity {
    fn level(&self) -> TextLevel {
        TextLevel::Phrase
    }

    fn analyze(&self, sentence: &str) -> anyhow::Result<f64> {
        Ok((sentence.split_whitespace().count() as f64 * 5.0).min(100.0))
    }
}
