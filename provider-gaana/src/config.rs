//! Provider Configuration
//!
//! Everything the connector needs is passed in here explicitly; there is no
//! ambient or global configuration state.

use std::time::Duration;

use crate::error::{GaanaError, Result};

/// Default weight the host adds to candidates from this source.
pub const DEFAULT_SOURCE_WEIGHT: f64 = 0.5;

/// Default upper bound on every outbound request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Gaana catalog connector.
///
/// # Example
///
/// ```
/// use provider_gaana::config::GaanaConfig;
///
/// let config = GaanaConfig::new("https://gaana-api.example.com")
///     .with_source_weight(0.7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaanaConfig {
    /// Base URL of the catalog API, without a trailing slash
    pub base_url: String,

    /// Source weight consumed by the host's candidate-scoring step
    pub source_weight: f64,

    /// Per-request timeout applied to every outbound call
    pub timeout: Duration,
}

impl GaanaConfig {
    /// Creates a configuration for the given API base URL.
    ///
    /// A trailing slash on the base URL is removed so endpoint paths can be
    /// appended verbatim.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            source_weight: DEFAULT_SOURCE_WEIGHT,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the source weight.
    pub fn with_source_weight(mut self, weight: f64) -> Self {
        self.source_weight = weight;
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(GaanaError::Config(
                "Gaana base URL is required. Use GaanaConfig::new() to set it.".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(GaanaError::Config(format!(
                "Gaana base URL must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        if !(0.0..=1.0).contains(&self.source_weight) {
            return Err(GaanaError::Config(format!(
                "Source weight must be within 0.0..=1.0, got {}",
                self.source_weight
            )));
        }

        if self.timeout.is_zero() {
            return Err(GaanaError::Config(
                "Request timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
