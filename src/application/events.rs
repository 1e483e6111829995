//! Analysis events streamed to the caller during a run
//!
//! Events are delivered synchronously through the caller's sink callback,
//! in processing order, so display surfaces can update incrementally
//! without buffering the whole result set.

use serde::Serialize;

use crate::domain::{AnalysisProgress, ReviewRecord, RunId, SentimentLabel};

/// One event in the per-run result stream
#[derive(Debug, Clone, Serialize)]
pub enum AnalysisEvent {
    /// A batch run over a review listing has started
    Started { run_id: RunId, total_items: usize },

    /// One review finished classification
    ReviewClassified {
        record: ReviewRecord,
        label: SentimentLabel,
        /// Pre-rendered result increment for display surfaces
        formatted: String,
        progress: AnalysisProgress,
    },

    /// Result of a direct single-text analysis (no intermediate progress)
    DirectResult {
        label: SentimentLabel,
        formatted: String,
    },

    /// User-facing message for recovered, user-correctable outcomes
    Message { text: String },

    /// The current run completed
    Finished { run_id: RunId },
}
