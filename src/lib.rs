// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod analyzer;
pub mod chunk;
pub mod criteria;
pub mod error;
pub mod grader;
pub mod mappers;
pub mod normalize;
pub mod reducers;

// ---- Re-exports for stable public API ----
pub use crate::analyzer::{analyze_file, analyze_text, Scorable, TextAnalysisResult, TextLevel};
pub use crate::criteria::{AnswerAnalysisResult, AnswerCriteria};
pub use crate::error::AnalysisError;
pub use crate::grader::score_answer;
pub use crate::normalize::normalize;
