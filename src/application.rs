//! Application layer module
//!
//! Orchestrates the review-analysis pipeline: use cases, the model
//! warm-up lifecycle, result formatting and the event stream delivered
//! to display surfaces.

pub mod dto;
pub mod events;
pub mod lifecycle;
pub mod use_cases;

// Re-export commonly used items for convenience
pub use dto::{format_direct_result, format_review_result};
pub use events::AnalysisEvent;
pub use lifecycle::{spawn_warmup, ModelLifecycle, ModelState};
pub use use_cases::{
    ReviewAnalysisUseCases, EMPTY_INPUT_MESSAGE, INVALID_LOCATOR_MESSAGE, NO_REVIEWS_MESSAGE,
};
