//! Memoizing proxy over a sentiment provider.

use crate::errors::SentimentError;
use crate::journal::Sentiment;
use crate::sentiment::SentimentProvider;
use std::collections::HashMap;
use tracing::debug;

/// Wraps a provider and remembers every successful result for the life of the process.
///
/// The cache key is the exact input text: no trimming or case folding, so
/// `"Good day"` and `"good day "` are separate entries. Failures are passed through
/// and never cached, so retrying the same text contacts the provider again. The cache
/// is unbounded and has no expiry.
pub struct CachingSentimentProxy<P> {
    inner: P,
    cache: HashMap<String, Sentiment>,
}

impl<P: SentimentProvider> CachingSentimentProxy<P> {
    /// Wraps `inner` with an empty cache.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: HashMap::new(),
        }
    }

    /// Number of memoized texts.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// The wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Returns the wrapped provider, discarding the cache.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: SentimentProvider> SentimentProvider for CachingSentimentProxy<P> {
    fn get_sentiment(&mut self, text: &str) -> Result<Sentiment, SentimentError> {
        if let Some(hit) = self.cache.get(text) {
            debug!("Sentiment cache hit");
            return Ok(hit.clone());
        }

        debug!("Sentiment cache miss, calling provider");
        let sentiment = self.inner.get_sentiment(text)?;
        self.cache.insert(text.to_string(), sentiment.clone());
        Ok(sentiment)
    }
}
