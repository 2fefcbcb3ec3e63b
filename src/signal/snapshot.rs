use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// Mapping from source name ("ptt", "dcard", "news", ...) to its snapshot.
pub type SnapshotMap = HashMap<String, SignalSnapshot>;

/// One collector observation for one source.
///
/// Immutable once built; a new collection run produces new snapshots.
/// `positive_ratio` and `negative_ratio` are fractions of `sample_size`,
/// so each lies in [0,1] and their sum never exceeds 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalSnapshot {
    pub source: String,
    pub positive_ratio: f64,
    pub negative_ratio: f64,
    pub sample_size: u64,
    pub collected_at: DateTime<Utc>,
}

impl SignalSnapshot {
    /// Build a snapshot, normalizing out-of-range ratios at the collector
    /// boundary. Bad inputs are clamped with a warning, not rejected.
    pub fn new(
        source: impl Into<String>,
        positive_ratio: f64,
        negative_ratio: f64,
        sample_size: u64,
        collected_at: DateTime<Utc>,
    ) -> Self {
        let source = source.into();
        let mut snapshot = Self {
            source,
            positive_ratio,
            negative_ratio,
            sample_size,
            collected_at,
        };
        snapshot.normalize();
        snapshot
    }

    /// Clamp ratios into [0,1] and rescale when their sum exceeds 1.
    /// Deserialized snapshots should pass through here before entering
    /// the pipeline.
    pub fn normalize(&mut self) {
        let clamp = |v: f64| {
            if v.is_finite() {
                v.clamp(0.0, 1.0)
            } else {
                0.0
            }
        };

        let pos = clamp(self.positive_ratio);
        let neg = clamp(self.negative_ratio);
        if pos != self.positive_ratio || neg != self.negative_ratio {
            warn!(
                source = %self.source,
                positive = self.positive_ratio,
                negative = self.negative_ratio,
                "snapshot ratios out of [0,1], clamped"
            );
        }
        self.positive_ratio = pos;
        self.negative_ratio = neg;

        let sum = self.positive_ratio + self.negative_ratio;
        if sum > 1.0 {
            warn!(
                source = %self.source,
                sum,
                "snapshot ratios sum above 1, rescaled"
            );
            self.positive_ratio /= sum;
            self.negative_ratio /= sum;
        }
    }

    /// Fraction of the sample expressing neither stance.
    pub fn neutral_ratio(&self) -> f64 {
        (1.0 - self.positive_ratio - self.negative_ratio).max(0.0)
    }
}
