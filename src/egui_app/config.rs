use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};
use std::time::Duration;

/// Default notes API base URL
const DEFAULT_API_URL: &str = "https://keep-clone-be.onrender.com";

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let api_url =
            std::env::var("KEEP_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        // Push channel defaults to the API host unless overridden
        let events_url = std::env::var("KEEP_EVENTS_URL").unwrap_or_else(|_| api_url.clone());
        let app = AppConfig::builder()
            .api_url(api_url)
            .events_url(events_url)
            .build()
            .unwrap_or_default();
        Self { app }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Get the full URL for a push-channel endpoint
    pub fn events_url(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.app.events_url.as_deref().unwrap_or_else(|| self.base_url()),
            path
        )
    }

    pub fn base_url(&self) -> &str {
        self.app.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Per-request timeout
    pub fn request_timeout(&self) -> Duration {
        self.app.request_timeout
    }

    /// Attempt budget for the initial list fetch
    pub fn max_retries(&self) -> u32 {
        self.app.max_retries
    }

    /// Reconnect attempt budget for the push channel
    pub fn reconnect_attempts(&self) -> u32 {
        self.app.reconnect_attempts
    }

    /// Initial delay between push-channel reconnects
    pub fn reconnect_delay(&self) -> Duration {
        self.app.reconnect_delay
    }
}
