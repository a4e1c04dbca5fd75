//! Constants used throughout the application.
//!
//! This module contains all constants used in the Aura application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "aura";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A journaling tool that tracks the mood of your entries";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable holding the inference API token.
pub const ENV_VAR_HF_TOKEN: &str = "HF_TOKEN";
/// Environment variable for the journal database path.
pub const ENV_VAR_AURA_DB_PATH: &str = "AURA_DB_PATH";
/// Environment variable for the sentiment model name.
pub const ENV_VAR_AURA_SENTIMENT_MODEL: &str = "AURA_SENTIMENT_MODEL";
/// Environment variable for the inference API base URL.
pub const ENV_VAR_AURA_INFERENCE_URL: &str = "AURA_INFERENCE_URL";
/// Environment variable for the inference request timeout, in seconds.
pub const ENV_VAR_AURA_REQUEST_TIMEOUT_SECS: &str = "AURA_REQUEST_TIMEOUT_SECS";
/// Default location of the journal database.
pub const DEFAULT_DB_PATH: &str = "~/.local/share/aura/journal.db";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Sentiment Inference
/// Default text-classification model used for sentiment.
pub const DEFAULT_SENTIMENT_MODEL: &str = "cardiffnlp/twitter-roberta-base-sentiment";
/// Default base URL of the hosted inference API.
pub const DEFAULT_INFERENCE_URL: &str = "https://router.huggingface.co/hf-inference";
/// Default timeout for a single inference request.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Raw model label for negative sentiment.
pub const MODEL_LABEL_NEGATIVE: &str = "LABEL_0";
/// Raw model label for neutral sentiment.
pub const MODEL_LABEL_NEUTRAL: &str = "LABEL_1";
/// Raw model label for positive sentiment.
pub const MODEL_LABEL_POSITIVE: &str = "LABEL_2";

// Tagging
/// Confidence at or above which a positive or negative label is considered strong.
pub const STRONG_SENTIMENT_THRESHOLD: f64 = 0.80;

// Display
/// Timestamp format used when listing entries.
pub const LIST_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "aura";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
