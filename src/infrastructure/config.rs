//! Configuration infrastructure
//!
//! Contains configuration loading and management for the review-analysis
//! pipeline: HTTP client settings, on-disk model location and sequence
//! caps, and logging behavior. Configuration is stored as JSON under the
//! user config directory and written with defaults on first run.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;
use tracing::info;

use super::http_client::HttpClientConfig;
use super::parsing::ParsingConfig;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP client settings used by the review fetcher
    pub http: HttpClientConfig,

    /// Sentiment model location and sequence caps
    pub model: ModelConfig,

    /// CSS selector configuration for the listing parser
    pub parsing: ParsingConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http: HttpClientConfig::default(),
            model: ModelConfig::default(),
            parsing: ParsingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Sentiment model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Directory holding `config.json`, `tokenizer.json` and the weights
    pub model_dir: PathBuf,

    /// Token cap for analysis-path classification
    pub max_seq_len: usize,

    /// Token cap for the warm-up priming call. Warm-up is not a
    /// correctness path; its cap is arbitrary and smaller.
    pub warmup_seq_len: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("./model"),
            max_seq_len: defaults::MAX_SEQ_LEN,
            warmup_seq_len: defaults::WARMUP_SEQ_LEN,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (`error`, `warn`, `info`, `debug`, `trace`)
    pub level: String,

    /// Whether to also write logs to a rotating file next to the executable
    pub file_logging: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_logging: true,
        }
    }
}

/// Configuration manager handling the on-disk config file lifecycle
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Get the application configuration directory
    pub fn get_config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get user config directory")?
            .join("review-scope");

        Ok(config_dir)
    }

    /// Create a new configuration manager
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;
        let config_path = config_dir.join("review_scope_config.json");

        Ok(Self { config_path })
    }

    /// Load configuration from file, creating the default if it doesn't exist
    pub async fn load_config(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            info!(
                "Configuration file not found, creating default: {:?}",
                self.config_path
            );
            let default_config = AppConfig::default();
            self.save_config(&default_config).await?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(&self.config_path)
            .await
            .context("Failed to read configuration file")?;

        serde_json::from_str::<AppConfig>(&content)
            .context("Failed to parse configuration file")
    }

    /// Save configuration to file
    pub async fn save_config(&self, config: &AppConfig) -> Result<()> {
        if let Some(config_dir) = self.config_path.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir)
                    .await
                    .context("Failed to create config directory")?;
                info!("Created configuration directory: {:?}", config_dir);
            }
        }

        let content =
            serde_json::to_string_pretty(config).context("Failed to serialize configuration")?;

        fs::write(&self.config_path, content)
            .await
            .context("Failed to write configuration file")?;

        Ok(())
    }

    /// Get the path of the managed config file
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }
}

/// IMDb site constants and URL helpers
pub mod imdb {
    use crate::domain::CatalogId;

    /// Base URL for the review source site
    pub const BASE_URL: &str = "https://www.imdb.com";

    /// Fixed query parameters for the review listing: newest submissions
    /// first, no rating filter
    pub const REVIEWS_QUERY: &str = "?sort=submissionDate&dir=desc&ratingFilter=0";

    /// Builds the review-listing page URL for one catalog ID
    #[must_use]
    pub fn reviews_url(catalog_id: &CatalogId) -> String {
        format!("{BASE_URL}/title/{catalog_id}/reviews{REVIEWS_QUERY}")
    }

    /// Resolves a site-relative permalink against the base URL
    #[must_use]
    pub fn resolve_permalink(permalink: &str) -> String {
        format!("{BASE_URL}{permalink}")
    }
}

/// Default configuration values
pub mod defaults {
    /// Token cap for analysis-path classification
    pub const MAX_SEQ_LEN: usize = 300;

    /// Token cap for the warm-up priming call
    pub const WARMUP_SEQ_LEN: usize = 110;

    /// Default request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CatalogId;

    #[test]
    fn default_config_has_expected_caps() {
        let config = AppConfig::default();
        assert_eq!(config.model.max_seq_len, 300);
        assert_eq!(config.model.warmup_seq_len, 110);
    }

    #[test]
    fn reviews_url_matches_listing_address_shape() {
        let id = CatalogId::extract("https://www.imdb.com/title/tt1234567/").unwrap();
        assert_eq!(
            imdb::reviews_url(&id),
            "https://www.imdb.com/title/tt1234567/reviews?sort=submissionDate&dir=desc&ratingFilter=0"
        );
    }

    #[test]
    fn permalink_resolution_prepends_base_url() {
        assert_eq!(
            imdb::resolve_permalink("/review/rw1234567/"),
            "https://www.imdb.com/review/rw1234567/"
        );
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.model.max_seq_len, config.model.max_seq_len);
        assert_eq!(parsed.logging.level, config.logging.level);
    }
}
