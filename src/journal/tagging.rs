//! Mood tagging of entries.

use crate::constants::STRONG_SENTIMENT_THRESHOLD;
use crate::journal::entry::{Entry, MoodTag, Sentiment};

/// Maps a sentiment result to its mood tag.
///
/// The threshold is inclusive. A present sentiment whose label is not one of the
/// three canonical labels matches no case and falls through to `Unrated`.
pub fn tag_for(sentiment: Option<&Sentiment>) -> MoodTag {
    let Some(sentiment) = sentiment else {
        return MoodTag::Unrated;
    };
    let strong = sentiment.score >= STRONG_SENTIMENT_THRESHOLD;

    match sentiment.label.as_str() {
        "positive" if strong => MoodTag::VeryPositive,
        "positive" => MoodTag::Positive,
        "neutral" => MoodTag::Neutral,
        "negative" if strong => MoodTag::NeedsAttention,
        "negative" => MoodTag::Negative,
        _ => MoodTag::Unrated,
    }
}

/// Attaches a mood tag to an entry without touching any other field.
pub struct TaggingDecorator;

impl TaggingDecorator {
    /// Sets `entry.tag` from its sentiment and returns the same entry.
    ///
    /// Idempotent: re-tagging an entry whose sentiment is unchanged yields the same tag.
    pub fn add_tag(entry: &mut Entry) -> &mut Entry {
        entry.tag = Some(tag_for(entry.sentiment.as_ref()));
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::factory::EntryFactory;

    fn tag(label: &str, score: f64) -> MoodTag {
        tag_for(Some(&Sentiment::new(label, score)))
    }

    #[test]
    fn test_decision_table() {
        assert_eq!(tag_for(None), MoodTag::Unrated);
        assert_eq!(tag("positive", 0.95), MoodTag::VeryPositive);
        assert_eq!(tag("positive", 0.5), MoodTag::Positive);
        assert_eq!(tag("neutral", 0.99), MoodTag::Neutral);
        assert_eq!(tag("neutral", 0.1), MoodTag::Neutral);
        assert_eq!(tag("negative", 0.91), MoodTag::NeedsAttention);
        assert_eq!(tag("negative", 0.2), MoodTag::Negative);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(tag("positive", 0.80), MoodTag::VeryPositive);
        assert_eq!(tag("positive", 0.79999), MoodTag::Positive);
        assert_eq!(tag("negative", 0.8), MoodTag::NeedsAttention);
        assert_eq!(tag("negative", 0.79999), MoodTag::Negative);
    }

    #[test]
    fn test_unrecognized_label_falls_through_to_unrated() {
        assert_eq!(tag("LABEL_3", 0.99), MoodTag::Unrated);
        assert_eq!(tag("Positive", 0.99), MoodTag::Unrated);
        assert_eq!(tag("", 0.5), MoodTag::Unrated);
    }

    #[test]
    fn test_add_tag_only_sets_tag() {
        let mut entry = EntryFactory::create("Life is good", Some(Sentiment::new("positive", 0.85)));
        let before = entry.clone();

        TaggingDecorator::add_tag(&mut entry);

        assert_eq!(entry.tag, Some(MoodTag::VeryPositive));
        assert_eq!(entry.text, before.text);
        assert_eq!(entry.sentiment, before.sentiment);
        assert_eq!(entry.timestamp, before.timestamp);
        assert_eq!(entry.id, before.id);
    }

    #[test]
    fn test_add_tag_is_idempotent() {
        let mut entry = EntryFactory::create("rough week", Some(Sentiment::new("negative", 0.8)));
        let first = TaggingDecorator::add_tag(&mut entry).tag;
        let second = TaggingDecorator::add_tag(&mut entry).tag;
        assert_eq!(first, second);
        assert_eq!(second, Some(MoodTag::NeedsAttention));

        let mut unrated = EntryFactory::create("no signal", None);
        TaggingDecorator::add_tag(&mut unrated);
        TaggingDecorator::add_tag(&mut unrated);
        assert_eq!(unrated.tag, Some(MoodTag::Unrated));
    }
}
