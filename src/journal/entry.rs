//! The journal entry record and its value types.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Identifier assigned to an entry by the store at insert time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(i64);

impl EntryId {
    /// Wraps a raw store id.
    pub fn new(raw: i64) -> Self {
        EntryId(raw)
    }

    /// Returns the raw store id.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(EntryId)
    }
}

/// The three canonical sentiment labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// All labels, in the order used for reporting and tie-breaks.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = String;

    /// Parses a canonical label. Matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(SentimentLabel::Positive),
            "neutral" => Ok(SentimentLabel::Neutral),
            "negative" => Ok(SentimentLabel::Negative),
            other => Err(format!(
                "'{}' is not a sentiment label (expected positive, neutral or negative)",
                other
            )),
        }
    }
}

/// A sentiment result: label plus confidence.
///
/// The label is kept as the provider returned it (after model-label mapping), so a
/// label outside the canonical three survives until tagging.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentiment {
    pub label: String,
    /// Confidence in `[0.0, 1.0]`.
    pub score: f64,
}

impl Sentiment {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Sentiment {
            label: label.into(),
            score,
        }
    }

    /// The canonical label, if the provider returned one of the three.
    pub fn canonical_label(&self) -> Option<SentimentLabel> {
        self.label.parse().ok()
    }
}

/// Human-facing mood tag derived from sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoodTag {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    NeedsAttention,
    Unrated,
}

impl MoodTag {
    pub const ALL: [MoodTag; 6] = [
        MoodTag::VeryPositive,
        MoodTag::Positive,
        MoodTag::Neutral,
        MoodTag::Negative,
        MoodTag::NeedsAttention,
        MoodTag::Unrated,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MoodTag::VeryPositive => "very positive",
            MoodTag::Positive => "positive",
            MoodTag::Neutral => "neutral",
            MoodTag::Negative => "negative",
            MoodTag::NeedsAttention => "needs attention",
            MoodTag::Unrated => "unrated",
        }
    }
}

impl fmt::Display for MoodTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoodTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| format!("unknown mood tag '{}'", s))
    }
}

/// One journaled text record.
///
/// `sentiment` holds label and score together, so an entry can never carry one
/// without the other. `tag` is `None` only between construction and decoration;
/// `id` is `None` until the store assigns one.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: Option<EntryId>,
    pub text: String,
    pub sentiment: Option<Sentiment>,
    pub timestamp: DateTime<Utc>,
    pub tag: Option<MoodTag>,
}

impl Entry {
    pub fn sentiment_label(&self) -> Option<&str> {
        self.sentiment.as_ref().map(|s| s.label.as_str())
    }

    pub fn sentiment_score(&self) -> Option<f64> {
        self.sentiment.as_ref().map(|s| s.score)
    }
}
