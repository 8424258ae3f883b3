//! Application configuration module
//!
//! Provides builder-validated configuration shared by the client modules.

use std::time::Duration;
use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the notes REST API
    pub api_url: Option<String>,
    /// Base URL of the push-channel endpoint
    pub events_url: Option<String>,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Attempt budget for the initial list fetch
    pub max_retries: u32,
    /// Reconnect attempt budget for the push channel
    pub reconnect_attempts: u32,
    /// Initial delay between push-channel reconnects
    pub reconnect_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            events_url: None,
            request_timeout: Duration::from_secs(20),
            max_retries: 3,
            reconnect_attempts: 5,
            reconnect_delay: Duration::from_millis(1000),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    api_url: Option<String>,
    events_url: Option<String>,
    request_timeout: Option<Duration>,
    max_retries: Option<u32>,
    reconnect_attempts: Option<u32>,
    reconnect_delay: Option<Duration>,
}

impl AppConfigBuilder {
    /// Set the REST API base URL
    pub fn api_url(mut self, url: String) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Set the push-channel base URL
    pub fn events_url(mut self, url: String) -> Self {
        self.events_url = Some(url);
        self
    }

    /// Set the per-request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set the initial-fetch retry budget
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Set the push-channel reconnect budget
    pub fn reconnect_attempts(mut self, attempts: u32) -> Self {
        self.reconnect_attempts = Some(attempts);
        self
    }

    /// Set the initial reconnect delay
    pub fn reconnect_delay(mut self, delay: Duration) -> Self {
        self.reconnect_delay = Some(delay);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        for url in [&self.api_url, &self.events_url].into_iter().flatten() {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        Ok(AppConfig {
            api_url: self.api_url,
            events_url: self.events_url,
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            max_retries: self.max_retries.unwrap_or(defaults.max_retries),
            reconnect_attempts: self
                .reconnect_attempts
                .unwrap_or(defaults.reconnect_attempts),
            reconnect_delay: self.reconnect_delay.unwrap_or(defaults.reconnect_delay),
        })
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
