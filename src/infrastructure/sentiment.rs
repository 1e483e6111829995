//! Sentiment model infrastructure
//!
//! Candle-backed implementation of the domain's `SentimentClassifier`
//! seam: a pretrained binary BERT sequence classifier plus tokenizer,
//! loaded once from disk and shared read-only.

pub mod classifier;
pub mod model;

pub use classifier::BertSentimentClassifier;
pub use model::BertForSequenceClassification;
