// src/analyzer.rs
//! Orchestrated text analysis.
//!
//! Runs the three mappers concurrently, then fans every decomposition item out
//! to the scoring functions registered for that level. Both stages are join
//! barriers on a thread pool built for the call and dropped when it returns;
//! no scheduler state survives between analyses.

use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::info;

use crate::error::AnalysisError;
use crate::mappers::{map_paragraphs, map_phrases, map_words};

/// Decomposition level a scoring function applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextLevel {
    Word,
    Phrase,
    Paragraph,
}

/// A pluggable scoring function. Implementations declare their target level
/// and return a score in [0, 100]; anything outside that range, or an `Err`,
/// is discarded for that item without aborting the batch.
pub trait Scorable: Send + Sync {
    fn level(&self) -> TextLevel;
    fn analyze(&self, text: &str) -> anyhow::Result<f64>;
}

/// Aggregated analysis outcome. Level scores are unweighted means of the
/// surviving per-item scores; a level with no valid scores contributes 0.
#[derive(Debug, Clone, Serialize)]
pub struct TextAnalysisResult {
    pub word_score: f64,
    pub phrase_score: f64,
    pub paragraph_score: f64,
    pub final_score: f64,
    /// Sum of word frequencies, i.e. total token count.
    pub word_count: usize,
    pub phrase_count: usize,
    pub paragraph_count: usize,
}

impl fmt::Display for TextAnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "final score: {:.2} (words: {:.2}, phrases: {:.2}, paragraphs: {:.2})",
            self.final_score, self.word_score, self.phrase_score, self.paragraph_score
        )
    }
}

/// Reads `path` and analyzes its contents. The file read is the only I/O in
/// this crate and happens strictly before any processing.
pub fn analyze_file(
    path: impl AsRef<Path>,
    scorers: &[&dyn Scorable],
) -> Result<TextAnalysisResult, AnalysisError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AnalysisError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path)?;
    analyze_text(&text, scorers)
}

/// Decomposes `text` and scores every item with the functions registered for
/// its level. Mapper runs and the three scoring fan-outs are each joined as a
/// barrier; word scoring sees each distinct word once.
pub fn analyze_text(
    text: &str,
    scorers: &[&dyn Scorable],
) -> Result<TextAnalysisResult, AnalysisError> {
    let word_fns = at_level(scorers, TextLevel::Word);
    let phrase_fns = at_level(scorers, TextLevel::Phrase);
    let paragraph_fns = at_level(scorers, TextLevel::Paragraph);

    let pool = rayon::ThreadPoolBuilder::new().build()?;
    let result = pool.install(|| {
        let ((words, phrases), paragraphs) = rayon::join(
            || rayon::join(|| map_words(text), || map_phrases(text)),
            || map_paragraphs(text),
        );

        let word_items: Vec<&str> = words.keys().map(String::as_str).collect();
        let phrase_items: Vec<&str> = phrases.iter().map(String::as_str).collect();
        let paragraph_items: Vec<&str> = paragraphs.iter().map(String::as_str).collect();

        let ((word_scores, phrase_scores), paragraph_scores) = rayon::join(
            || {
                rayon::join(
                    || collect_scores(&word_items, &word_fns),
                    || collect_scores(&phrase_items, &phrase_fns),
                )
            },
            || collect_scores(&paragraph_items, &paragraph_fns),
        );

        let word_score = mean(&word_scores);
        let phrase_score = mean(&phrase_scores);
        let paragraph_score = mean(&paragraph_scores);

        TextAnalysisResult {
            word_score,
            phrase_score,
            paragraph_score,
            final_score: (word_score + phrase_score + paragraph_score) / 3.0,
            word_count: words.values().sum(),
            phrase_count: phrases.len(),
            paragraph_count: paragraphs.len(),
        }
    });

    info!(
        final_score = result.final_score,
        words = result.word_count,
        phrases = result.phrase_count,
        paragraphs = result.paragraph_count,
        "text analyzed"
    );
    Ok(result)
}

fn at_level<'a>(scorers: &[&'a dyn Scorable], level: TextLevel) -> Vec<&'a dyn Scorable> {
    scorers.iter().copied().filter(|s| s.level() == level).collect()
}

/// Applies every scorer to every item in parallel. An `Err` or an
/// out-of-range score drops that one sample only.
fn collect_scores(items: &[&str], scorers: &[&dyn Scorable]) -> Vec<f64> {
    if scorers.is_empty() {
        return Vec::new();
    }
    items
        .par_iter()
        .flat_map_iter(|item| {
            scorers.iter().filter_map(move |s| match s.analyze(item) {
                Ok(score) if (0.0..=100.0).contains(&score) => Some(score),
                _ => None,
            })
        })
        .collect()
}

fn mean(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct Fixed(TextLevel, f64);
    impl Scorable for Fixed {
        fn level(&self) -> TextLevel {
            self.0
        }
        fn analyze(&self, _text: &str) -> anyhow::Result<f64> {
            Ok(self.1)
        }
    }

    struct Failing(TextLevel);
    impl Scorable for Failing {
        fn level(&self) -> TextLevel {
            self.0
        }
        fn analyze(&self, _text: &str) -> anyhow::Result<f64> {
            Err(anyhow!("broken scorer"))
        }
    }

    #[test]
    fn averages_levels_and_counts() {
        let word = Fixed(TextLevel::Word, 60.0);
        let phrase = Fixed(TextLevel::Phrase, 90.0);
        let result = analyze_text("um dois. tres quatro.", &[&word, &phrase]).unwrap();

        assert!((result.word_score - 60.0).abs() < 1e-9);
        assert!((result.phrase_score - 90.0).abs() < 1e-9);
        // No paragraph scorers: the level still contributes 0 to the average.
        assert_eq!(result.paragraph_score, 0.0);
        assert!((result.final_score - 50.0).abs() < 1e-9);

        assert_eq!(result.word_count, 4);
        assert_eq!(result.phrase_count, 2);
        assert_eq!(result.paragraph_count, 1);
    }

    #[test]
    fn failing_scorer_does_not_abort_the_batch() {
        let good = Fixed(TextLevel::Word, 40.0);
        let bad = Failing(TextLevel::Word);
        let result = analyze_text("alpha beta", &[&good, &bad]).unwrap();
        assert!((result.word_score - 40.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_scores_are_discarded() {
        let high = Fixed(TextLevel::Word, 150.0);
        let low = Fixed(TextLevel::Word, -1.0);
        let ok = Fixed(TextLevel::Word, 100.0);
        let result = analyze_text("alpha beta", &[&high, &low, &ok]).unwrap();
        assert!((result.word_score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn word_scoring_sees_distinct_words_once() {
        struct CountCalls(std::sync::atomic::AtomicUsize);
        impl Scorable for CountCalls {
            fn level(&self) -> TextLevel {
                TextLevel::Word
            }
            fn analyze(&self, _text: &str) -> anyhow::Result<f64> {
                self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
                Ok(50.0)
            }
        }
        let counter = CountCalls(std::sync::atomic::AtomicUsize::new(0));
        let result = analyze_text("eco eco eco", &[&counter]).unwrap();
        assert_eq!(counter.0.load(std::sync::atomic::Ordering::Relaxed), 1);
        assert_eq!(result.word_count, 3);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = analyze_file("definitely/not/here.txt", &[]).unwrap_err();
        assert!(matches!(err, AnalysisError::NotFound { .. }));
    }
}
