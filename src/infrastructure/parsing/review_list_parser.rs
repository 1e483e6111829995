//! Review list parser implementation
//!
//! Robust HTML parsing for review listing pages with fallback selector
//! strategies. Malformed review blocks are skipped per-record; total parse
//! failure yields an empty result, never an error.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use super::config::ReviewListSelectors;
use super::error::{ParsingError, ParsingResult};
use crate::domain::ReviewRecord;

static DEFAULT_SELECTORS: Lazy<ReviewListSelectors> = Lazy::new(ReviewListSelectors::default);

/// Result of parsing one listing page
#[derive(Debug, Clone, Default)]
pub struct ParsedReviewList {
    /// Well-formed review records in document order
    pub records: Vec<ReviewRecord>,
    /// Review containers dropped for missing a body or title node
    pub skipped: usize,
}

/// Parser for extracting review records from listing pages
pub struct ReviewListParser {
    /// Compiled CSS selectors for different page elements
    container_selectors: Vec<Selector>,
    body_selectors: Vec<Selector>,
    title_selectors: Vec<Selector>,
}

impl ReviewListParser {
    /// Create a new review list parser with default selectors
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&DEFAULT_SELECTORS)
    }

    /// Create parser with custom selector configuration
    pub fn with_config(selectors: &ReviewListSelectors) -> ParsingResult<Self> {
        Ok(Self {
            container_selectors: Self::compile_selectors(&selectors.review_container)?,
            body_selectors: Self::compile_selectors(&selectors.review_body)?,
            title_selectors: Self::compile_selectors(&selectors.review_title)?,
        })
    }

    /// Compile multiple selector strings into Selector objects
    fn compile_selectors(selector_strings: &[String]) -> ParsingResult<Vec<Selector>> {
        let mut selectors = Vec::new();
        let mut errors = Vec::new();

        for selector_str in selector_strings {
            match Selector::parse(selector_str) {
                Ok(selector) => selectors.push(selector),
                Err(e) => {
                    warn!("Failed to compile selector '{}': {}", selector_str, e);
                    errors.push(format!("'{selector_str}': {e}"));
                }
            }
        }

        if selectors.is_empty() {
            return Err(ParsingError::configuration(format!(
                "No valid selectors compiled. Errors: {}",
                errors.join(", ")
            )));
        }

        Ok(selectors)
    }

    /// Parse a listing page into discrete review records.
    ///
    /// Containers missing either the body-text node or the title/link node
    /// are silently skipped and counted; they do not abort the batch.
    pub fn parse_listing(&self, html: &str) -> ParsedReviewList {
        let document = Html::parse_document(html);

        let mut records = Vec::new();
        let mut skipped = 0usize;

        // Try each container selector until one matches
        for selector in &self.container_selectors {
            let containers: Vec<ElementRef<'_>> = document.select(selector).collect();
            if containers.is_empty() {
                continue;
            }

            debug!("Found {} review containers", containers.len());

            for container in &containers {
                match self.extract_record(container) {
                    Some(record) => records.push(record),
                    None => {
                        skipped += 1;
                        debug!("Skipping review container missing body or title node");
                    }
                }
            }
            break;
        }

        if records.is_empty() && skipped == 0 {
            debug!("No review containers found on page");
        }

        ParsedReviewList { records, skipped }
    }

    /// Extract a single review record from a container element.
    ///
    /// Requires both a body-text node and a title link with an `href`;
    /// returns `None` for incomplete containers.
    fn extract_record(&self, container: &ElementRef<'_>) -> Option<ReviewRecord> {
        let body = self.extract_text_with_fallbacks(container, &self.body_selectors)?;
        let (title, permalink) = self.extract_title_link(container)?;

        Some(ReviewRecord::new(title, body, permalink))
    }

    /// Extract the title link's visible text and its `href` verbatim
    fn extract_title_link(&self, container: &ElementRef<'_>) -> Option<(String, String)> {
        for selector in &self.title_selectors {
            if let Some(anchor) = container.select(selector).next() {
                let href = anchor.value().attr("href")?;
                let title = anchor.text().collect::<String>().trim().to_string();
                return Some((title, href.to_string()));
            }
        }
        None
    }

    /// Extract text content using multiple selectors as fallbacks
    fn extract_text_with_fallbacks(
        &self,
        element: &ElementRef<'_>,
        selectors: &[Selector],
    ) -> Option<String> {
        for selector in selectors {
            if let Some(text) = Self::extract_text_by_selector(element, selector) {
                return Some(text);
            }
        }
        None
    }

    /// Extract text content using a single CSS selector
    fn extract_text_by_selector(element: &ElementRef<'_>, selector: &Selector) -> Option<String> {
        element
            .select(selector)
            .next()
            .map(|e| e.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
    }
}
