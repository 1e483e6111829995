//! Application use cases for review sentiment analysis
//!
//! Orchestrates the pipeline: catalog-ID extraction, listing fetch,
//! parsing, and the one-review-at-a-time batch classification run with
//! per-item progress events. Extraction and fetch errors are recovered
//! here and converted to user-facing messages; classifier errors are not
//! recovered and terminate the run.

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::dto;
use super::events::AnalysisEvent;
use super::lifecycle::ModelLifecycle;
use crate::domain::{
    AnalysisError, AnalysisInput, AnalysisProgress, CatalogId, ReviewListingFetcher,
    ReviewRecord, RunId, SentimentClassifier, SentimentLabel,
};
use crate::infrastructure::config::ModelConfig;
use crate::infrastructure::parsing::ReviewListParser;

/// Message shown when no input was provided
pub const EMPTY_INPUT_MESSAGE: &str = "Enter a valid IMDb title link or review.";

/// Message shown when no catalog ID could be extracted from the locator
pub const INVALID_LOCATOR_MESSAGE: &str = "Could not extract an IMDb ID from the link.";

/// Generic empty-result message. A failed listing fetch and a listing
/// with zero parsable reviews are deliberately reported the same way;
/// the two cases are distinguished only in the logs.
pub const NO_REVIEWS_MESSAGE: &str = "No reviews found for this title.";

/// Use cases driving one analysis request at a time
pub struct ReviewAnalysisUseCases {
    fetcher: Arc<dyn ReviewListingFetcher>,
    parser: Arc<ReviewListParser>,
    classifier: Arc<dyn SentimentClassifier>,
    lifecycle: ModelLifecycle,
    model_config: ModelConfig,
}

impl ReviewAnalysisUseCases {
    /// Creates the use-case layer from explicitly constructed components
    pub fn new(
        fetcher: Arc<dyn ReviewListingFetcher>,
        parser: Arc<ReviewListParser>,
        classifier: Arc<dyn SentimentClassifier>,
        lifecycle: ModelLifecycle,
        model_config: ModelConfig,
    ) -> Self {
        Self {
            fetcher,
            parser,
            classifier,
            lifecycle,
            model_config,
        }
    }

    /// Runs one analysis request, streaming events to `on_event`.
    ///
    /// Rejected with [`AnalysisError::ModelNotReady`] while the warm-up
    /// lifecycle has not fired. User-correctable outcomes (blank input,
    /// invalid locator, empty review set) become [`AnalysisEvent::Message`]
    /// events and return `Ok`; classifier failures propagate as errors.
    pub async fn analyze<F>(
        &self,
        input: AnalysisInput,
        mut on_event: F,
    ) -> Result<(), AnalysisError>
    where
        F: FnMut(AnalysisEvent),
    {
        if !self.lifecycle.is_ready() {
            return Err(AnalysisError::ModelNotReady);
        }

        if input.validate().is_err() {
            on_event(AnalysisEvent::Message {
                text: EMPTY_INPUT_MESSAGE.to_string(),
            });
            return Ok(());
        }

        match input {
            AnalysisInput::Listing(locator) => {
                let catalog_id = match CatalogId::extract(&locator) {
                    Ok(id) => id,
                    Err(e) => {
                        warn!("Locator rejected: {}", e);
                        on_event(AnalysisEvent::Message {
                            text: INVALID_LOCATOR_MESSAGE.to_string(),
                        });
                        return Ok(());
                    }
                };

                let records = self.collect_reviews(&catalog_id).await;
                if records.is_empty() {
                    on_event(AnalysisEvent::Message {
                        text: NO_REVIEWS_MESSAGE.to_string(),
                    });
                    return Ok(());
                }

                let run_id = RunId::new();
                info!(
                    "Starting batch run {} over {} reviews for {}",
                    run_id,
                    records.len(),
                    catalog_id
                );
                on_event(AnalysisEvent::Started {
                    run_id,
                    total_items: records.len(),
                });

                self.run_batch(run_id, &records, |record, label, progress| {
                    on_event(AnalysisEvent::ReviewClassified {
                        record: record.clone(),
                        label,
                        formatted: dto::format_review_result(record, label),
                        progress: progress.clone(),
                    });
                })?;

                on_event(AnalysisEvent::Finished { run_id });
            }
            AnalysisInput::DirectText(text) => {
                let label = self
                    .classifier
                    .classify(&text, self.model_config.max_seq_len)?;
                on_event(AnalysisEvent::DirectResult {
                    label,
                    formatted: dto::format_direct_result(label),
                });
            }
        }

        Ok(())
    }

    /// Fetches and parses the review listing for one catalog ID.
    ///
    /// A fetch failure collapses into an empty review set here; the
    /// user-facing outcome is the same generic empty-result message.
    async fn collect_reviews(&self, catalog_id: &CatalogId) -> Vec<ReviewRecord> {
        match self.fetcher.fetch_listing(catalog_id).await {
            Ok(markup) => {
                let parsed = self.parser.parse_listing(&markup);
                if parsed.skipped > 0 {
                    debug!("Skipped {} malformed review blocks", parsed.skipped);
                }
                parsed.records
            }
            Err(e) => {
                warn!("Treating listing fetch failure as an empty review set: {}", e);
                Vec::new()
            }
        }
    }

    /// Classifies `records` one at a time in input order, invoking
    /// `on_item` synchronously after each with the updated progress.
    ///
    /// An empty slice is a no-op: no classification calls, no progress.
    pub fn run_batch<F>(
        &self,
        run_id: RunId,
        records: &[ReviewRecord],
        mut on_item: F,
    ) -> Result<(), AnalysisError>
    where
        F: FnMut(&ReviewRecord, SentimentLabel, &AnalysisProgress),
    {
        if records.is_empty() {
            return Ok(());
        }

        let mut progress = AnalysisProgress::start(run_id, records.len());
        for record in records {
            let label = self
                .classifier
                .classify(&record.body, self.model_config.max_seq_len)?;
            progress.advance();
            on_item(record, label, &progress);
        }

        Ok(())
    }
}
