// src/criteria.rs
//! Criteria and result types for answer grading.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AnalysisError;

/// Absolute tolerance when checking that the three weights sum to 1.0.
pub const WEIGHT_TOLERANCE: f64 = 0.001;

/// What a graded answer is expected to contain. Caller-constructed; weights
/// are only validated when a scoring call actually happens, so criteria can
/// be assembled incrementally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerCriteria {
    /// Keywords that must appear (case- and accent-insensitive, whole-token).
    pub required_keywords: Vec<String>,
    /// Phrases that must appear (substring containment after normalization).
    pub required_phrases: Vec<String>,
    /// Keywords that add bonus score when present.
    pub optional_keywords: Vec<String>,
    pub required_keywords_weight: f64,
    pub required_phrases_weight: f64,
    pub optional_keywords_weight: f64,
}

impl Default for AnswerCriteria {
    fn default() -> Self {
        Self {
            required_keywords: Vec::new(),
            required_phrases: Vec::new(),
            optional_keywords: Vec::new(),
            required_keywords_weight: 0.4,
            required_phrases_weight: 0.4,
            optional_keywords_weight: 0.2,
        }
    }
}

impl AnswerCriteria {
    /// Checks that the three weights sum to 1.0 within [`WEIGHT_TOLERANCE`].
    pub fn validate_weights(&self) -> Result<(), AnalysisError> {
        let sum = self.required_keywords_weight
            + self.required_phrases_weight
            + self.optional_keywords_weight;
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(AnalysisError::InvalidState { sum });
        }
        Ok(())
    }
}

/// Outcome of grading one answer. Immutable once produced; all scores are in
/// [0, 100]. Found/missing entries carry the caller's original spelling of
/// each criterion, not the normalized form.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerAnalysisResult {
    pub final_score: f64,
    pub required_keywords_score: f64,
    pub required_phrases_score: f64,
    pub optional_keywords_score: f64,
    pub found_required_keywords: Vec<String>,
    pub missing_required_keywords: Vec<String>,
    pub found_required_phrases: Vec<String>,
    pub missing_required_phrases: Vec<String>,
    pub found_optional_keywords: Vec<String>,
    /// Maximal alphanumeric runs in the original (non-normalized) answer.
    pub total_words: usize,
    /// Terminator runs in the original answer; consecutive `.!?` count once.
    /// Coarser than the phrase mapper's boundary heuristic, on purpose.
    pub total_sentences: usize,
}

impl fmt::Display for AnswerAnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "final {:.2}/100 (required keywords {:.2}, required phrases {:.2}, optional {:.2}; {} words, {} sentences)",
            self.final_score,
            self.required_keywords_score,
            self.required_phrases_score,
            self.optional_keywords_score,
            self.total_words,
            self.total_sentences
        )
    }
}
