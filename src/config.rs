//! Webhook endpoint configuration.
//!
//! Configuration is read from an optional JSON file and then overridden from
//! the environment:
//!
//! ```json
//! {
//!   "webhookUrl": "https://example.app.n8n.cloud/webhook/chat",
//!   "timeoutSecs": 30
//! }
//! ```
//!
//! Both keys are optional. Without a timeout, webhook calls wait
//! indefinitely.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Webhook endpoint used when no configuration overrides it.
pub const DEFAULT_WEBHOOK_URL: &str = "https://uanvi.app.n8n.cloud/webhook/chat";

/// Environment variable overriding the webhook endpoint.
pub const WEBHOOK_URL_ENV: &str = "COURIER_WEBHOOK_URL";

/// Environment variable overriding the request timeout in seconds.
pub const WEBHOOK_TIMEOUT_ENV: &str = "COURIER_WEBHOOK_TIMEOUT_SECS";

/// Validated webhook configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourierConfig {
    webhook_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
}

/// Raw configuration file contents before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConfigFile {
    webhook_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl Default for CourierConfig {
    fn default() -> Self {
        Self {
            webhook_url: DEFAULT_WEBHOOK_URL.to_owned(),
            timeout_secs: None,
        }
    }
}

impl CourierConfig {
    /// Creates a configuration for the given webhook endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] unless `webhook_url` is an
    /// absolute `http` or `https` URL.
    pub fn new(webhook_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            webhook_url: validate_url(webhook_url)?,
            timeout_secs: None,
        })
    }

    /// Sets the request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] when `secs` is zero.
    pub fn with_timeout_secs(mut self, secs: u64) -> Result<Self, ConfigError> {
        if secs == 0 {
            return Err(ConfigError::InvalidTimeout(secs.to_string()));
        }
        self.timeout_secs = Some(secs);
        Ok(self)
    }

    /// Parses a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed documents and the
    /// validation errors of [`CourierConfig::new`] and
    /// [`CourierConfig::with_timeout_secs`].
    pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(document)?;
        let base = match file.webhook_url {
            Some(url) => Self::new(&url)?,
            None => Self::default(),
        };
        match file.timeout_secs {
            Some(secs) => base.with_timeout_secs(secs),
            None => Ok(base),
        }
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, otherwise
    /// the errors of [`CourierConfig::from_json_str`].
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&document)
    }

    /// Applies [`WEBHOOK_URL_ENV`] and [`WEBHOOK_TIMEOUT_ENV`] from the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`CourierConfig::with_overrides_from`].
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides read through `lookup`, keyed by environment
    /// variable name. Blank values are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] or
    /// [`ConfigError::InvalidTimeout`] when an override does not validate.
    pub fn with_overrides_from(
        self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = self;
        if let Some(url) = present(WEBHOOK_URL_ENV) {
            config.webhook_url = validate_url(&url)?;
        }
        if let Some(raw) = present(WEBHOOK_TIMEOUT_ENV) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
            config = config.with_timeout_secs(secs)?;
        }
        Ok(config)
    }

    /// Returns the webhook endpoint.
    #[must_use]
    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    /// Returns the request timeout, if one is configured.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn validate_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let invalid = |reason: String| ConfigError::InvalidUrl {
        url: raw.to_owned(),
        reason,
    };
    let url = Url::parse(trimmed).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    Ok(trimmed.to_owned())
}

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file {}: {source}", .path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration document is not valid JSON for this schema.
    #[error("invalid configuration document: {0}")]
    Json(#[from] serde_json::Error),

    /// The webhook URL does not validate.
    #[error("invalid webhook URL '{url}': {reason}")]
    InvalidUrl {
        /// Rejected value.
        url: String,
        /// Reason for rejection.
        reason: String,
    },

    /// The timeout is not a positive number of seconds.
    #[error("invalid webhook timeout '{0}', expected a positive number of seconds")]
    InvalidTimeout(String),
}
