// src/error.rs
//! Error taxonomy for the analysis core.
//!
//! Validation failures are raised before any processing starts; no partial
//! results ever accompany an error.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A required input was empty or otherwise unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Criteria weights must sum to 1.0 within 0.001.
    #[error("criteria weights must sum to 1.0, got {sum:.3}")]
    InvalidState { sum: f64 },

    /// The text file handed to `analyze_file` does not exist.
    #[error("text file not found: {path}")]
    NotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}
