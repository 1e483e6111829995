//! Review Scope - Movie Review Sentiment Analysis Pipeline
//!
//! This crate classifies free-text movie reviews - typed directly, or
//! scraped from an IMDb review-listing page identified by a catalog ID -
//! as Positive/Negative with a pretrained binary BERT classifier, and
//! streams per-review progress and results as each classification
//! completes.

// Module declarations
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export the main entry points for embedding callers
pub use application::{AnalysisEvent, ModelLifecycle, ReviewAnalysisUseCases};
pub use domain::{AnalysisInput, CatalogId, ReviewRecord, SentimentLabel};
