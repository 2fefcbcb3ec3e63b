use super::lexicon::{SentimentLabel, TextSentiment};
use crate::signal::{SignalSnapshot, SnapshotMap};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Accumulates scored posts for one source into a snapshot.
///
/// Ratios come out as counted fractions of the sample, so each lies in
/// [0,1] and their sum never exceeds 1 by construction.
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    source: String,
    positive: u64,
    negative: u64,
    neutral: u64,
    collected_at: DateTime<Utc>,
}

impl SnapshotBuilder {
    pub fn new(source: impl Into<String>, collected_at: DateTime<Utc>) -> Self {
        Self {
            source: source.into(),
            positive: 0,
            negative: 0,
            neutral: 0,
            collected_at,
        }
    }

    pub fn record(&mut self, sentiment: &TextSentiment) {
        match sentiment.label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    pub fn sample_size(&self) -> u64 {
        self.positive + self.negative + self.neutral
    }

    /// Finish the source. An empty batch yields `None`; downstream the
    /// missing source degrades to the neutral midpoint.
    pub fn build(self) -> Option<SignalSnapshot> {
        let total = self.sample_size();
        if total == 0 {
            return None;
        }
        Some(SignalSnapshot::new(
            self.source,
            self.positive as f64 / total as f64,
            self.negative as f64 / total as f64,
            total,
            self.collected_at,
        ))
    }
}

/// One collector sweep over all sources, kept as a historical record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionRun {
    pub id: Uuid,
    pub collected_at: DateTime<Utc>,
    pub snapshots: SnapshotMap,
}

impl CollectionRun {
    pub fn new(collected_at: DateTime<Utc>, snapshots: SnapshotMap) -> Self {
        Self {
            id: Uuid::new_v4(),
            collected_at,
            snapshots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::SentimentLexicon;

    #[test]
    fn test_builder_counts_to_ratios() {
        let lexicon = SentimentLexicon::new();
        let mut builder = SnapshotBuilder::new("ptt", Utc::now());
        builder.record(&lexicon.score_text("支持！加油！"));
        builder.record(&lexicon.score_text("貪污失職"));
        builder.record(&lexicon.score_text("今天開會"));
        builder.record(&lexicon.score_text("讚，正確的決定"));

        let snapshot = builder.build().expect("non-empty batch");
        assert_eq!(snapshot.sample_size, 4);
        assert!((snapshot.positive_ratio - 0.5).abs() < 1e-12);
        assert!((snapshot.negative_ratio - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_empty_batch_builds_nothing() {
        let builder = SnapshotBuilder::new("dcard", Utc::now());
        assert!(builder.build().is_none());
    }
}
