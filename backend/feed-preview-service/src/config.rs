use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub feed: FeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Parameters of the feed feature itself.
///
/// `label` names the feed in rendered headers; `page_size` bounds the post
/// page fetched per snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_feed_label")]
    pub label: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            label: default_feed_label(),
            page_size: default_page_size(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            feed: FeedConfig {
                label: std::env::var("FEED_LABEL").unwrap_or_else(|_| default_feed_label()),
                page_size: std::env::var("FEED_PAGE_SIZE")
                    .unwrap_or_else(|_| default_page_size().to_string())
                    .parse()
                    .map_err(|e| AppError::Config(format!("invalid FEED_PAGE_SIZE: {}", e)))?,
            },
        })
    }
}

fn default_feed_label() -> String {
    "Main".to_string()
}

fn default_page_size() -> usize {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_config_defaults() {
        let config = FeedConfig::default();
        assert_eq!(config.label, "Main");
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_feed_config_defaults_apply_when_decoding() {
        let config: FeedConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.label, "Main");
        assert_eq!(config.page_size, 20);
    }
}
