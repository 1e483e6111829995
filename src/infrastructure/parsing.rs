//! HTML parsing infrastructure for review listings
//!
//! This module provides the review-listing parsing architecture with
//! per-record failure tolerance and configurable fallback selectors.

pub mod config;
pub mod error;
pub mod review_list_parser;

// Re-export public types
pub use config::{ParsingConfig, ReviewListSelectors};
pub use error::{ParsingError, ParsingResult};
pub use review_list_parser::{ParsedReviewList, ReviewListParser};
