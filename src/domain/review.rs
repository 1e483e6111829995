//! Review entities and sentiment label value objects

use serde::{Deserialize, Serialize};

use super::errors::AnalysisError;

/// A single review extracted from a listing page.
///
/// Created by the listing parser, consumed by the batch runner and the
/// classifier; immutable after creation. Order of records follows document
/// order on the source page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Visible text of the review's title link
    pub title: String,
    /// Whitespace-trimmed review body
    pub body: String,
    /// Site-relative permalink, taken verbatim from the title link
    pub permalink: String,
}

impl ReviewRecord {
    /// Creates a new review record
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        permalink: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            permalink: permalink.into(),
        }
    }
}

/// Binary sentiment produced by the classifier, one per review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl SentimentLabel {
    /// Maps a classifier class index to a label: `0 -> Negative`,
    /// `1 -> Positive`. Any other index is not a valid class.
    #[must_use]
    pub fn from_class_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Negative),
            1 => Some(Self::Positive),
            _ => None,
        }
    }

    /// Display color for the label (`green` = positive, `red` = negative)
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Self::Positive => "green",
            Self::Negative => "red",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "Positive"),
            Self::Negative => write!(f, "Negative"),
        }
    }
}

/// Input for one analysis request.
///
/// The two input modes are mutually exclusive, so they are modeled as a
/// tagged variant rather than two independently-nullable fields; the
/// invalid "both set" and "both empty" states cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisInput {
    /// A locator string identifying a title page to scrape reviews from
    Listing(String),
    /// Raw review text to classify directly
    DirectText(String),
}

impl AnalysisInput {
    /// Rejects blank input before any backend work is attempted
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let value = match self {
            Self::Listing(locator) => locator,
            Self::DirectText(text) => text,
        };
        if value.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_index_mapping_is_fixed() {
        assert_eq!(
            SentimentLabel::from_class_index(0),
            Some(SentimentLabel::Negative)
        );
        assert_eq!(
            SentimentLabel::from_class_index(1),
            Some(SentimentLabel::Positive)
        );
        assert_eq!(SentimentLabel::from_class_index(2), None);
    }

    #[test]
    fn label_colors() {
        assert_eq!(SentimentLabel::Positive.color(), "green");
        assert_eq!(SentimentLabel::Negative.color(), "red");
    }

    #[test]
    fn blank_input_is_rejected_in_both_modes() {
        assert!(AnalysisInput::Listing("  ".to_string()).validate().is_err());
        assert!(AnalysisInput::DirectText(String::new()).validate().is_err());
    }

    #[test]
    fn non_blank_input_passes_validation() {
        assert!(AnalysisInput::Listing("https://x/y/z/a/b".to_string())
            .validate()
            .is_ok());
        assert!(AnalysisInput::DirectText("Loved it.".to_string())
            .validate()
            .is_ok());
    }
}
