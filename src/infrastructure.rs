//! Infrastructure layer for network access, parsing, and model inference
//!
//! This module provides the HTTP client, review-listing fetching and
//! parsing, the candle-backed sentiment classifier, configuration and
//! logging.

pub mod config; // Configuration constants and helpers
pub mod http_client; // Rate-limited HTTP client
pub mod logging; // Logging infrastructure
pub mod parsing; // Review listing parsing
pub mod review_fetcher; // Listing retrieval against the source site
pub mod sentiment; // Candle-backed sentiment classification

// Re-export commonly used items
pub use config::{imdb, AppConfig, ConfigManager, LoggingConfig, ModelConfig};
pub use http_client::{HttpClient, HttpClientConfig};
pub use logging::{get_log_directory, init_logging, init_logging_with_config};
pub use parsing::{
    ParsedReviewList, ParsingConfig, ParsingError, ParsingResult, ReviewListParser,
    ReviewListSelectors,
};
pub use review_fetcher::ImdbListingFetcher;
pub use sentiment::BertSentimentClassifier;
