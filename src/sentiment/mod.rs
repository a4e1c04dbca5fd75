//! Sentiment inference behind a single-method capability.
//!
//! Providers are composed by plain wrapping: [`CachingSentimentProxy`] holds any
//! other [`SentimentProvider`] and memoizes its successful results.
//!
//! # Module Structure
//!
//! - `huggingface`: blocking HTTP client for a hosted text-classification model
//! - `cache`: in-process memoizing proxy
//!
//! # Example
//!
//! ```no_run
//! use aura::sentiment::{CachingSentimentProxy, HuggingFaceClient, SentimentProvider};
//! use std::time::Duration;
//!
//! let client = HuggingFaceClient::new(
//!     "https://router.huggingface.co/hf-inference",
//!     "cardiffnlp/twitter-roberta-base-sentiment",
//!     "hf_token",
//!     Duration::from_secs(30),
//! )?;
//! let mut proxy = CachingSentimentProxy::new(client);
//! let sentiment = proxy.get_sentiment("Software architecture rocks!")?;
//! println!("{} ({:.2})", sentiment.label, sentiment.score);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cache;
pub mod huggingface;

use crate::errors::SentimentError;
use crate::journal::Sentiment;

pub use cache::CachingSentimentProxy;
pub use huggingface::HuggingFaceClient;

/// Something that can score text for sentiment.
pub trait SentimentProvider {
    /// Returns the label and confidence for `text`.
    fn get_sentiment(&mut self, text: &str) -> Result<Sentiment, SentimentError>;
}

impl<P: SentimentProvider + ?Sized> SentimentProvider for &mut P {
    fn get_sentiment(&mut self, text: &str) -> Result<Sentiment, SentimentError> {
        (**self).get_sentiment(text)
    }
}

impl<P: SentimentProvider + ?Sized> SentimentProvider for Box<P> {
    fn get_sentiment(&mut self, text: &str) -> Result<Sentiment, SentimentError> {
        (**self).get_sentiment(text)
    }
}
