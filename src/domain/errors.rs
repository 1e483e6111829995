//! Analysis error taxonomy
//!
//! User-correctable errors (invalid locator, empty input) are recovered at
//! the pipeline boundary and converted to a user-facing message. Classifier
//! errors are fatal to the current run and propagate unchanged.

use thiserror::Error;

use super::services::ClassifierError;

/// Errors surfaced by the review-analysis pipeline
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Locator has too few segments to carry a catalog ID
    #[error("could not extract a catalog ID from locator '{locator}'")]
    InvalidLocator { locator: String },

    /// Neither a locator nor review text was provided
    #[error("no input provided")]
    EmptyInput,

    /// Classification was requested before model warm-up completed
    #[error("sentiment model is not ready yet")]
    ModelNotReady,

    /// Classifier invocation failed; not recovered, terminates the run
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

impl AnalysisError {
    /// Whether the error is correctable by the user (vs. fatal to the run)
    #[must_use]
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            Self::InvalidLocator { .. } | Self::EmptyInput | Self::ModelNotReady
        )
    }
}
