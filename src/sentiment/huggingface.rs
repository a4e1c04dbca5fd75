//! Hosted inference API client for sentiment classification.
//!
//! This module provides a simple blocking client for a text-classification model
//! served over HTTP, mapping the model's raw labels to sentiment labels.

use crate::constants::{MODEL_LABEL_NEGATIVE, MODEL_LABEL_NEUTRAL, MODEL_LABEL_POSITIVE};
use crate::errors::{AppError, AppResult, SentimentError};
use crate::journal::{Sentiment, SentimentLabel};
use crate::sentiment::SentimentProvider;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Request body for text classification.
#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
}

/// One scored label from the model.
#[derive(Debug, Deserialize)]
struct Prediction {
    label: String,
    score: f64,
}

/// The API returns either one list per input or a single flat list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassifyResponse {
    Nested(Vec<Vec<Prediction>>),
    Flat(Vec<Prediction>),
}

impl ClassifyResponse {
    fn into_predictions(self) -> Vec<Prediction> {
        match self {
            ClassifyResponse::Nested(lists) => lists.into_iter().flatten().collect(),
            ClassifyResponse::Flat(list) => list,
        }
    }
}

/// Client for a hosted sentiment model.
pub struct HuggingFaceClient {
    base_url: String,
    model: String,
    token: String,
    client: Client,
}

impl HuggingFaceClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the inference API (e.g., "https://router.huggingface.co/hf-inference")
    /// * `model` - Model name (e.g., "cardiffnlp/twitter-roberta-base-sentiment")
    /// * `token` - API access token
    /// * `timeout` - Timeout applied to each request
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            token: token.into(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model)
    }
}

impl SentimentProvider for HuggingFaceClient {
    /// Classifies `text` and returns the top-scoring label.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API is not reachable
    /// - The token is rejected
    /// - The model is not found or still loading
    /// - The response is malformed or carries a score outside `[0, 1]`
    fn get_sentiment(&mut self, text: &str) -> Result<Sentiment, SentimentError> {
        debug!("Requesting sentiment from model: {}", self.model);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.token)
            .json(&ClassifyRequest { inputs: text })
            .send()
            .map_err(SentimentError::Request)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => SentimentError::Unauthorized {
                    status: status.as_u16(),
                },
                404 => SentimentError::ModelNotFound(self.model.clone()),
                503 => SentimentError::ModelLoading(self.model.clone()),
                _ => SentimentError::InvalidResponse(format!("HTTP {}: {}", status, error_text)),
            });
        }

        let body = response.text().map_err(SentimentError::Request)?;
        let parsed: ClassifyResponse = serde_json::from_str(&body).map_err(|e| {
            SentimentError::InvalidResponse(format!("Failed to parse classification: {}", e))
        })?;

        let top = parsed
            .into_predictions()
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .ok_or_else(|| SentimentError::InvalidResponse("no predictions returned".to_string()))?;

        if !(0.0..=1.0).contains(&top.score) {
            return Err(SentimentError::InvalidResponse(format!(
                "score {} is outside [0, 1]",
                top.score
            )));
        }

        let label = map_model_label(&top.label);
        debug!("Classified as {} ({:.4})", label, top.score);
        Ok(Sentiment::new(label, top.score))
    }
}

/// Maps a raw model label to a sentiment label.
///
/// `LABEL_0/1/2` map to negative/neutral/positive, canonical names in any case are
/// lower-cased, and anything else is returned unchanged.
pub fn map_model_label(raw: &str) -> String {
    let mapped = match raw {
        MODEL_LABEL_NEGATIVE => Some(SentimentLabel::Negative),
        MODEL_LABEL_NEUTRAL => Some(SentimentLabel::Neutral),
        MODEL_LABEL_POSITIVE => Some(SentimentLabel::Positive),
        other => other.to_lowercase().parse().ok(),
    };

    match mapped {
        Some(label) => label.as_str().to_string(),
        None => raw.to_string(),
    }
}
