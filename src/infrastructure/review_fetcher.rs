//! Review listing fetcher against the IMDb review pages
//!
//! One blocking GET per analysis request, no retry policy. Transport
//! failures and non-success statuses are converted into [`FetchError`];
//! callers treat that as "zero reviews available".

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use super::config::imdb;
use super::http_client::HttpClient;
use crate::domain::{CatalogId, FetchError, ReviewListingFetcher};

/// Fetcher for IMDb review-listing pages
pub struct ImdbListingFetcher {
    http: Arc<HttpClient>,
}

impl ImdbListingFetcher {
    /// Creates a fetcher on top of a shared HTTP client
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ReviewListingFetcher for ImdbListingFetcher {
    async fn fetch_listing(&self, catalog_id: &CatalogId) -> Result<String, FetchError> {
        let url = imdb::reviews_url(catalog_id);

        self.http.get_text(&url).await.map_err(|e| {
            warn!("Review listing fetch failed for {}: {:#}", catalog_id, e);
            FetchError::FetchFailed(e.to_string())
        })
    }
}
