//! Configuration management for the aura application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. Command-line flags may override the loaded
//! values before validation.
//!
//! # Environment Variables
//!
//! - `HF_TOKEN`: Access token for the inference API (required)
//! - `AURA_DB_PATH`: Path to the journal database (defaults to ~/.local/share/aura/journal.db)
//! - `AURA_SENTIMENT_MODEL`: Sentiment model name
//! - `AURA_INFERENCE_URL`: Base URL of the inference API
//! - `AURA_REQUEST_TIMEOUT_SECS`: Timeout for one inference request

use crate::constants::{
    DEFAULT_DB_PATH, DEFAULT_INFERENCE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SENTIMENT_MODEL,
    ENV_VAR_AURA_DB_PATH, ENV_VAR_AURA_INFERENCE_URL, ENV_VAR_AURA_REQUEST_TIMEOUT_SECS,
    ENV_VAR_AURA_SENTIMENT_MODEL, ENV_VAR_HF_TOKEN, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the aura application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use aura::Config;
/// use std::path::PathBuf;
/// use std::time::Duration;
///
/// let config = Config {
///     hf_token: "hf_example".to_string(),
///     db_path: PathBuf::from("/tmp/aura/journal.db"),
///     sentiment_model: "cardiffnlp/twitter-roberta-base-sentiment".to_string(),
///     inference_url: "https://router.huggingface.co/hf-inference".to_string(),
///     request_timeout: Duration::from_secs(30),
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Access token for the inference API.
    pub hf_token: String,

    /// Location of the SQLite journal database.
    pub db_path: PathBuf,

    /// Text-classification model used for sentiment.
    pub sentiment_model: String,

    /// Base URL of the inference API.
    pub inference_url: String,

    /// Timeout applied to each inference request.
    pub request_timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("hf_token", &REDACTED_PLACEHOLDER)
            .field("db_path", &REDACTED_PLACEHOLDER)
            .field("sentiment_model", &self.sentiment_model)
            .field("inference_url", &self.inference_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The database path is expanded with `shellexpand` to handle `~` and
    /// environment variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - `HF_TOKEN` is missing or blank
    /// - The database path expansion fails
    /// - `AURA_REQUEST_TIMEOUT_SECS` is not a positive integer
    pub fn load() -> AppResult<Self> {
        let hf_token = env::var(ENV_VAR_HF_TOKEN)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config(format!(
                    "{} is missing. Set it to your inference API token (HF_TOKEN=hf_...)",
                    ENV_VAR_HF_TOKEN
                ))
            })?;

        let db_path_str =
            env::var(ENV_VAR_AURA_DB_PATH).unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
        let db_path = expand_path(&db_path_str)?;

        let sentiment_model = env::var(ENV_VAR_AURA_SENTIMENT_MODEL)
            .unwrap_or_else(|_| DEFAULT_SENTIMENT_MODEL.to_string());

        let inference_url = env::var(ENV_VAR_AURA_INFERENCE_URL)
            .unwrap_or_else(|_| DEFAULT_INFERENCE_URL.to_string());

        let request_timeout = match env::var(ENV_VAR_AURA_REQUEST_TIMEOUT_SECS) {
            Ok(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    AppError::Config(format!(
                        "{} must be a whole number of seconds, got '{}'",
                        ENV_VAR_AURA_REQUEST_TIMEOUT_SECS, raw
                    ))
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Config {
            hf_token: hf_token.trim().to_string(),
            db_path,
            sentiment_model,
            inference_url,
            request_timeout,
        })
    }

    /// Replaces the database path, expanding `~` and variables as `load` does.
    pub fn override_db_path(&mut self, raw: &str) -> AppResult<()> {
        self.db_path = expand_path(raw)?;
        Ok(())
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the token, database path or model is empty,
    /// the inference URL is not http(s), or the timeout is zero.
    pub fn validate(&self) -> AppResult<()> {
        if self.hf_token.trim().is_empty() {
            return Err(AppError::Config(format!("{} is empty", ENV_VAR_HF_TOKEN)));
        }

        if self.db_path.as_os_str().is_empty() {
            return Err(AppError::Config("Database path is empty".to_string()));
        }

        if self.sentiment_model.trim().is_empty() {
            return Err(AppError::Config("Sentiment model name is empty".to_string()));
        }

        if !(self.inference_url.starts_with("http://") || self.inference_url.starts_with("https://"))
        {
            return Err(AppError::Config(format!(
                "Inference URL must start with http:// or https://, got '{}'",
                self.inference_url
            )));
        }

        if self.request_timeout.is_zero() {
            return Err(AppError::Config(
                "Request timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

fn expand_path(raw: &str) -> AppResult<PathBuf> {
    let expanded = shellexpand::full(raw)
        .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
    Ok(PathBuf::from(expanded.into_owned()))
}
