//! End-to-end pipeline tests over stubbed collaborators
//!
//! Drives the full listing flow (extract -> fetch -> parse -> batch run)
//! through the public API with a canned listing page and a stub
//! classifier, verifying event order, progress, and the recovered-error
//! paths.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::Mutex;

use review_scope_lib::application::{
    AnalysisEvent, ModelLifecycle, ReviewAnalysisUseCases, NO_REVIEWS_MESSAGE,
};
use review_scope_lib::domain::{
    AnalysisInput, CatalogId, ClassifierError, FetchError, ReviewListingFetcher,
    SentimentClassifier, SentimentLabel,
};
use review_scope_lib::infrastructure::{ModelConfig, ReviewListParser};

const LISTING_PAGE: &str = r#"<html><body>
<div class="review-container">
    <a class="title" href="/review/rw0000001/">A triumph</a>
    <div class="content"><div class="text show-more__control">Loved every second of it.</div></div>
</div>
<div class="review-container">
    <a class="title" href="/review/rw0000002/">Dreadful</a>
    <div class="content"><div class="text show-more__control">A waste of two hours.</div></div>
</div>
<div class="review-container">
    <div class="content"><div class="text show-more__control">Malformed: no title link.</div></div>
</div>
</body></html>"#;

struct CannedFetcher {
    markup: Option<String>,
    requested: Mutex<Vec<String>>,
}

impl CannedFetcher {
    fn with_page(markup: &str) -> Self {
        Self {
            markup: Some(markup.to_string()),
            requested: Mutex::new(Vec::new()),
        }
    }

    fn unreachable() -> Self {
        Self {
            markup: None,
            requested: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ReviewListingFetcher for CannedFetcher {
    async fn fetch_listing(&self, catalog_id: &CatalogId) -> Result<String, FetchError> {
        self.requested
            .lock()
            .unwrap()
            .push(catalog_id.as_str().to_string());
        self.markup
            .clone()
            .ok_or_else(|| FetchError::FetchFailed("connection refused".to_string()))
    }
}

/// Negative iff the text mentions "waste"; deterministic and order-preserving
struct KeywordClassifier;

impl SentimentClassifier for KeywordClassifier {
    fn classify_batch(
        &self,
        texts: &[&str],
        _max_len: usize,
    ) -> Result<Vec<SentimentLabel>, ClassifierError> {
        Ok(texts
            .iter()
            .map(|text| {
                if text.contains("waste") {
                    SentimentLabel::Negative
                } else {
                    SentimentLabel::Positive
                }
            })
            .collect())
    }
}

fn pipeline(fetcher: CannedFetcher) -> ReviewAnalysisUseCases {
    let lifecycle = ModelLifecycle::new();
    lifecycle.mark_ready();
    ReviewAnalysisUseCases::new(
        Arc::new(fetcher),
        Arc::new(ReviewListParser::new().unwrap()),
        Arc::new(KeywordClassifier),
        lifecycle,
        ModelConfig::default(),
    )
}

#[tokio::test]
async fn listing_flow_streams_results_in_document_order() {
    let use_cases = pipeline(CannedFetcher::with_page(LISTING_PAGE));

    let events = Mutex::new(Vec::new());
    use_cases
        .analyze(
            AnalysisInput::Listing("https://www.imdb.com/title/tt0111161/".to_string()),
            |event| events.lock().unwrap().push(event),
        )
        .await
        .unwrap();

    let events = events.into_inner().unwrap();

    // Started + 2 classified (malformed block skipped) + Finished
    assert_eq!(events.len(), 4);

    match &events[0] {
        AnalysisEvent::Started { total_items, .. } => assert_eq!(*total_items, 2),
        other => panic!("expected Started, got {other:?}"),
    }

    match &events[1] {
        AnalysisEvent::ReviewClassified {
            record,
            label,
            formatted,
            progress,
        } => {
            assert_eq!(record.title, "A triumph");
            assert_eq!(*label, SentimentLabel::Positive);
            assert!(formatted.contains("https://www.imdb.com/review/rw0000001/"));
            assert!((progress.completed - 50.0).abs() < 1e-9);
        }
        other => panic!("expected ReviewClassified, got {other:?}"),
    }

    match &events[2] {
        AnalysisEvent::ReviewClassified {
            record,
            label,
            progress,
            ..
        } => {
            assert_eq!(record.title, "Dreadful");
            assert_eq!(*label, SentimentLabel::Negative);
            assert!((progress.completed - 100.0).abs() < 1e-9);
        }
        other => panic!("expected ReviewClassified, got {other:?}"),
    }

    assert!(matches!(events[3], AnalysisEvent::Finished { .. }));
}

#[tokio::test]
async fn fetcher_receives_extracted_catalog_id() {
    let fetcher = CannedFetcher::with_page(LISTING_PAGE);
    let requested = Arc::new(fetcher);

    let lifecycle = ModelLifecycle::new();
    lifecycle.mark_ready();
    let use_cases = ReviewAnalysisUseCases::new(
        requested.clone(),
        Arc::new(ReviewListParser::new().unwrap()),
        Arc::new(KeywordClassifier),
        lifecycle,
        ModelConfig::default(),
    );

    use_cases
        .analyze(
            AnalysisInput::Listing("https://www.imdb.com/title/tt1234567/reviews".to_string()),
            |_| {},
        )
        .await
        .unwrap();

    assert_eq!(
        *requested.requested.lock().unwrap(),
        vec!["tt1234567".to_string()]
    );
}

#[tokio::test]
async fn unreachable_listing_surfaces_generic_message_without_crashing() {
    let use_cases = pipeline(CannedFetcher::unreachable());

    let messages = Mutex::new(Vec::new());
    use_cases
        .analyze(
            AnalysisInput::Listing("https://www.imdb.com/title/tt0111161/".to_string()),
            |event| {
                if let AnalysisEvent::Message { text } = event {
                    messages.lock().unwrap().push(text);
                }
            },
        )
        .await
        .unwrap();

    assert_eq!(
        messages.into_inner().unwrap(),
        vec![NO_REVIEWS_MESSAGE.to_string()]
    );
}

#[tokio::test]
async fn listing_with_no_parsable_reviews_reports_same_generic_message() {
    let use_cases = pipeline(CannedFetcher::with_page("<html><body>nothing here</body></html>"));

    let messages = Mutex::new(Vec::new());
    use_cases
        .analyze(
            AnalysisInput::Listing("https://www.imdb.com/title/tt0111161/".to_string()),
            |event| {
                if let AnalysisEvent::Message { text } = event {
                    messages.lock().unwrap().push(text);
                }
            },
        )
        .await
        .unwrap();

    assert_eq!(
        messages.into_inner().unwrap(),
        vec![NO_REVIEWS_MESSAGE.to_string()]
    );
}

#[tokio::test]
async fn repeated_classification_of_same_text_is_stable() {
    let use_cases = pipeline(CannedFetcher::with_page(LISTING_PAGE));

    let mut labels = Vec::new();
    for _ in 0..2 {
        use_cases
            .analyze(
                AnalysisInput::DirectText("A masterpiece, loved every second.".to_string()),
                |event| {
                    if let AnalysisEvent::DirectResult { label, .. } = event {
                        labels.push(label);
                    }
                },
            )
            .await
            .unwrap();
    }

    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0], labels[1]);
}
