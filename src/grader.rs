// src/grader.rs
//! Criteria-based answer grading.
//!
//! The answer is normalized once; each criterion is normalized and tested
//! against it independently, in parallel on a pool built for the call.
//! Keywords need a whole-token match, phrases plain substring containment.

use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;
use tracing::info;

use crate::criteria::{AnswerAnalysisResult, AnswerCriteria};
use crate::error::AnalysisError;
use crate::normalize::normalize;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?u)\b\w+\b").expect("word regex"));
static SENTENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence regex"));

/// Grades `answer` against `criteria`.
///
/// Fails with `InvalidArgument` on a blank answer and `InvalidState` when the
/// weights do not sum to 1.0, in both cases before any processing starts.
pub fn score_answer(
    answer: &str,
    criteria: &AnswerCriteria,
) -> Result<AnswerAnalysisResult, AnalysisError> {
    if answer.trim().is_empty() {
        return Err(AnalysisError::InvalidArgument("answer must not be blank"));
    }
    criteria.validate_weights()?;

    let normalized = normalize(answer);
    // Counted on the original text, not the normalized one.
    let total_words = WORD_RE.find_iter(answer).count();
    let total_sentences = SENTENCE_RE.find_iter(answer).count();

    let pool = rayon::ThreadPoolBuilder::new().build()?;
    let (
        found_required_keywords,
        missing_required_keywords,
        found_required_phrases,
        missing_required_phrases,
        found_optional_keywords,
    ) = pool.install(|| {
        let (found_kw, missing_kw) =
            partition_terms(&criteria.required_keywords, |t| keyword_present(&normalized, t));
        let (found_ph, missing_ph) =
            partition_terms(&criteria.required_phrases, |t| phrase_present(&normalized, t));
        let (found_opt, _) =
            partition_terms(&criteria.optional_keywords, |t| keyword_present(&normalized, t));
        (found_kw, missing_kw, found_ph, missing_ph, found_opt)
    });

    let required_keywords_score = group_score(
        found_required_keywords.len(),
        criteria.required_keywords.len(),
        100.0,
    );
    let required_phrases_score = group_score(
        found_required_phrases.len(),
        criteria.required_phrases.len(),
        100.0,
    );
    // No optional keywords means no bonus available, not a vacuous pass.
    let optional_keywords_score = group_score(
        found_optional_keywords.len(),
        criteria.optional_keywords.len(),
        0.0,
    );

    let final_score = round2(
        required_keywords_score * criteria.required_keywords_weight
            + required_phrases_score * criteria.required_phrases_weight
            + optional_keywords_score * criteria.optional_keywords_weight,
    );

    info!(
        final_score,
        required_keywords_score,
        required_phrases_score,
        optional_keywords_score,
        total_words,
        total_sentences,
        "answer graded"
    );

    Ok(AnswerAnalysisResult {
        final_score,
        required_keywords_score,
        required_phrases_score,
        optional_keywords_score,
        found_required_keywords,
        missing_required_keywords,
        found_required_phrases,
        missing_required_phrases,
        found_optional_keywords,
        total_words,
        total_sentences,
    })
}

/// Splits `terms` into (matching, non-matching), keeping the caller's original
/// spelling. Membership tests are independent, so per-item parallelism needs
/// no synchronization beyond the partition itself.
fn partition_terms(
    terms: &[String],
    present: impl Fn(&str) -> bool + Sync,
) -> (Vec<String>, Vec<String>) {
    terms.par_iter().cloned().partition(|t| present(t))
}

/// Whole-token match: the normalized keyword bounded by non-word characters
/// (or text edges) on both sides. Normalization strips diacritics, so the
/// boundary check never sits next to a combining mark.
fn keyword_present(normalized_answer: &str, keyword: &str) -> bool {
    let pattern = format!(r"\b{}\b", regex::escape(&normalize(keyword)));
    let re = Regex::new(&pattern).expect("escaped keyword pattern");
    re.is_match(normalized_answer)
}

/// Phrases only need substring containment, no boundary requirement.
fn phrase_present(normalized_answer: &str, phrase: &str) -> bool {
    normalized_answer.contains(&normalize(phrase))
}

fn group_score(found: usize, total: usize, empty_default: f64) -> f64 {
    if total == 0 {
        empty_default
    } else {
        found as f64 * 100.0 / total as f64
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
