//! Domain module - Core business logic and entities
//!
//! This module contains all domain-specific entities, value objects,
//! and domain services that represent the core review-analysis logic.
//!
//! Modern Rust module organization (Rust 2018+ style):
//! - Each module is its own file in the domain/ directory
//! - Public exports are defined here for convenience

pub mod catalog;
pub mod errors;
pub mod events;
pub mod review;
pub mod services;

// Re-export commonly used items for convenience
// Note: Be specific about re-exports to avoid ambiguous glob warnings
pub use catalog::CatalogId;
pub use errors::AnalysisError;
pub use events::{AnalysisProgress, RunId};
pub use review::{AnalysisInput, ReviewRecord, SentimentLabel};
pub use services::{ClassifierError, FetchError, ReviewListingFetcher, SentimentClassifier};
