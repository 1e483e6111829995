//! Domain service traits for the review-analysis pipeline
//!
//! These traits are the seams between the pipeline and its collaborators:
//! the listing fetcher (network) and the sentiment classifier (model).
//! Implementations live in the infrastructure layer; tests substitute
//! stubs through the same traits.

use async_trait::async_trait;
use thiserror::Error;

use super::catalog::CatalogId;
use super::review::SentimentLabel;

/// Failure to retrieve a review listing page.
///
/// Non-fatal to the pipeline: callers treat it as "zero reviews available"
/// and surface a user-facing message. A single attempt is made, no retries.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to fetch review listing: {0}")]
    FetchFailed(String),
}

/// Classifier invocation failure.
///
/// Not recovered anywhere in the pipeline; terminates the current run.
#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("failed to load sentiment model: {0}")]
    ModelLoad(String),

    #[error("tokenization failed: {0}")]
    Tokenization(String),

    #[error("model inference failed: {0}")]
    Inference(String),

    #[error("classifier produced {got} labels for {expected} inputs")]
    OutputMismatch { expected: usize, got: usize },
}

/// Retrieves the raw markup of a title's review-listing page
#[async_trait]
pub trait ReviewListingFetcher: Send + Sync {
    /// One blocking GET for the listing page of `catalog_id`.
    /// Any transport error or non-success status is a [`FetchError`].
    async fn fetch_listing(&self, catalog_id: &CatalogId) -> Result<String, FetchError>;
}

/// Binary sentiment classifier over batches of raw text.
///
/// The loaded model is process-wide and read-only after initialization;
/// the pipeline receives it as an explicitly constructed component so
/// tests can substitute a stub.
pub trait SentimentClassifier: Send + Sync {
    /// Classifies a batch of texts, truncating each to `max_len` tokens.
    ///
    /// The output has exactly one label per input, in input order.
    /// Deterministic for fixed weights and fixed input.
    fn classify_batch(
        &self,
        texts: &[&str],
        max_len: usize,
    ) -> Result<Vec<SentimentLabel>, ClassifierError>;

    /// Classifies a single text as a batch of size one
    fn classify(&self, text: &str, max_len: usize) -> Result<SentimentLabel, ClassifierError> {
        let mut labels = self.classify_batch(&[text], max_len)?;
        labels.pop().ok_or(ClassifierError::OutputMismatch {
            expected: 1,
            got: 0,
        })
    }
}
