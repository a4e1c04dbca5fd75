//! Mood statistics over the stored entries.

use crate::journal::{Entry, MoodTag, SentimentLabel};
use std::collections::BTreeMap;
use std::fmt;

/// Aggregate mood statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodReport {
    /// Number of entries examined.
    pub total: usize,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    /// Entries without any sentiment.
    pub unrated: usize,
    /// Mean score over entries that have one; `0.0` when none do.
    pub average_score: f64,
    /// Label with the highest count, ties going to the first of positive, neutral,
    /// negative. `None` (shown as "n/a") when no entry has a canonical label, so an
    /// empty journal never reports a mood.
    pub most_common: Option<SentimentLabel>,
    /// Entries per mood tag. Untagged entries are not counted.
    pub tags: BTreeMap<MoodTag, usize>,
}

impl MoodReport {
    /// Builds a report from a list of entries.
    ///
    /// Pure and deterministic. Entries whose label is outside the canonical three
    /// count toward no label but their score still feeds the average. Ties for the
    /// most common label go to the first of `positive, neutral, negative`.
    pub fn from_entries(entries: &[Entry]) -> Self {
        let mut report = MoodReport {
            total: entries.len(),
            positive: 0,
            neutral: 0,
            negative: 0,
            unrated: 0,
            average_score: 0.0,
            most_common: None,
            tags: BTreeMap::new(),
        };

        let mut score_sum = 0.0;
        let mut scored = 0usize;

        for entry in entries {
            match &entry.sentiment {
                Some(sentiment) => {
                    score_sum += sentiment.score;
                    scored += 1;
                    match sentiment.canonical_label() {
                        Some(SentimentLabel::Positive) => report.positive += 1,
                        Some(SentimentLabel::Neutral) => report.neutral += 1,
                        Some(SentimentLabel::Negative) => report.negative += 1,
                        None => {}
                    }
                }
                None => report.unrated += 1,
            }

            if let Some(tag) = entry.tag {
                *report.tags.entry(tag).or_insert(0) += 1;
            }
        }

        if scored > 0 {
            report.average_score = score_sum / scored as f64;
        }

        let mut best: Option<(SentimentLabel, usize)> = None;
        for label in SentimentLabel::ALL {
            let count = report.count_for(label);
            if count > 0 && best.map_or(true, |(_, top)| count > top) {
                best = Some((label, count));
            }
        }
        report.most_common = best.map(|(label, _)| label);

        report
    }

    /// Entry count for one label.
    pub fn count_for(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }
}

impl fmt::Display for MoodReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total entries: {}", self.total)?;
        for label in SentimentLabel::ALL {
            writeln!(f, "  {:<9} {}", format!("{}:", label), self.count_for(label))?;
        }
        writeln!(f, "  {:<9} {}", "unrated:", self.unrated)?;
        writeln!(
            f,
            "Average sentiment score: {:.2}%",
            self.average_score * 100.0
        )?;
        match self.most_common {
            Some(label) => writeln!(f, "Most common mood: {}", label)?,
            None => writeln!(f, "Most common mood: n/a (no entry has a sentiment label)")?,
        }
        if !self.tags.is_empty() {
            writeln!(f, "By tag:")?;
            for (tag, count) in &self.tags {
                writeln!(f, "  {}: {}", tag, count)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{EntryFactory, Sentiment, TaggingDecorator};

    fn entry(sentiment: Option<(&str, f64)>) -> Entry {
        let mut entry = EntryFactory::create(
            "text",
            sentiment.map(|(label, score)| Sentiment::new(label, score)),
        );
        TaggingDecorator::add_tag(&mut entry);
        entry
    }

    #[test]
    fn test_empty_report() {
        let report = MoodReport::from_entries(&[]);
        assert_eq!(report.total, 0);
        assert_eq!(report.positive, 0);
        assert_eq!(report.neutral, 0);
        assert_eq!(report.negative, 0);
        assert_eq!(report.average_score, 0.0);
        assert!(!report.average_score.is_nan());
        assert_eq!(report.most_common, None);
    }

    #[test]
    fn test_counts_average_and_most_common() {
        let entries = vec![
            entry(Some(("positive", 0.9))),
            entry(Some(("positive", 0.5))),
            entry(Some(("neutral", 0.6))),
        ];
        let report = MoodReport::from_entries(&entries);

        assert_eq!(report.positive, 2);
        assert_eq!(report.neutral, 1);
        assert_eq!(report.negative, 0);
        assert!((report.average_score - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(report.most_common, Some(SentimentLabel::Positive));
    }

    #[test]
    fn test_unscored_entries_do_not_dilute_average() {
        let entries = vec![entry(Some(("negative", 0.4))), entry(None), entry(None)];
        let report = MoodReport::from_entries(&entries);

        assert_eq!(report.total, 3);
        assert_eq!(report.unrated, 2);
        assert!((report.average_score - 0.4).abs() < 1e-9);
        assert_eq!(report.most_common, Some(SentimentLabel::Negative));
    }

    #[test]
    fn test_only_unrated_entries() {
        let report = MoodReport::from_entries(&[entry(None)]);
        assert_eq!(report.average_score, 0.0);
        assert_eq!(report.most_common, None);
        assert!(report
            .to_string()
            .contains("Most common mood: n/a (no entry has a sentiment label)"));
        assert_eq!(report.tags.get(&MoodTag::Unrated), Some(&1));
    }

    #[test]
    fn test_tie_goes_to_enumeration_order() {
        let entries = vec![
            entry(Some(("negative", 0.3))),
            entry(Some(("neutral", 0.3))),
        ];
        assert_eq!(
            MoodReport::from_entries(&entries).most_common,
            Some(SentimentLabel::Neutral)
        );

        let entries = vec![
            entry(Some(("negative", 0.3))),
            entry(Some(("positive", 0.3))),
            entry(Some(("neutral", 0.3))),
        ];
        assert_eq!(
            MoodReport::from_entries(&entries).most_common,
            Some(SentimentLabel::Positive)
        );
    }

    #[test]
    fn test_unknown_label_counts_toward_average_only() {
        let entries = vec![entry(Some(("LABEL_3", 1.0))), entry(Some(("neutral", 0.5)))];
        let report = MoodReport::from_entries(&entries);

        assert_eq!(report.neutral, 1);
        assert_eq!(report.positive + report.negative, 0);
        assert_eq!(report.unrated, 0);
        assert!((report.average_score - 0.75).abs() < 1e-9);
        assert_eq!(report.tags.get(&MoodTag::Unrated), Some(&1));
    }

    #[test]
    fn test_display_mentions_most_common() {
        let report = MoodReport::from_entries(&[entry(Some(("positive", 0.9)))]);
        let text = report.to_string();
        assert!(text.contains("Total entries: 1"));
        assert!(text.contains("Most common mood: positive"));
        assert!(text.contains("very positive: 1"));
    }
}
