//! Parsing configuration for HTML extraction
//!
//! Centralized configuration for CSS selectors and parsing behavior.

use serde::{Deserialize, Serialize};

/// Main parsing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsingConfig {
    /// Review listing selectors
    pub review_list_selectors: ReviewListSelectors,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            review_list_selectors: ReviewListSelectors::default(),
        }
    }
}

/// CSS selectors for review listing pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewListSelectors {
    /// Selectors for review container blocks - multiple fallbacks
    pub review_container: Vec<String>,

    /// Selectors for the review body text node
    pub review_body: Vec<String>,

    /// Selectors for the title link carrying the permalink
    pub review_title: Vec<String>,
}

impl Default for ReviewListSelectors {
    fn default() -> Self {
        Self {
            review_container: vec![
                "div.review-container".to_string(),
                ".lister-item.imdb-user-review".to_string(),
            ],
            review_body: vec![
                "div.text.show-more__control".to_string(),
                "div.content > div.text".to_string(),
            ],
            review_title: vec!["a.title".to_string()],
        }
    }
}
