use super::DimensionScore;
use crate::pipeline::threshold::{self, Verdict};
use serde::{Deserialize, Serialize};

/// Final output of one prediction run.
///
/// Carries the full ordered audit trail of dimension scores so a reader
/// can reconstruct how the estimates were produced. Deliberately free of
/// wall-clock fields: identical inputs must serialize to identical
/// results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub target_id: String,
    /// Predicted fraction of eligible voters casting a ballot, in [0,1].
    pub turnout_rate: f64,
    /// Predicted fraction of cast ballots approving the recall, in [0,1].
    pub approval_rate: f64,
    pub verdict: Verdict,
    /// Confidence in the estimates, in [0,1].
    pub confidence: f64,
    /// Total samples behind the snapshots that fed this run.
    pub sample_size: u64,
    /// Scores in canonical scorer order.
    pub scores: Vec<DimensionScore>,
}

impl PredictionResult {
    /// Predicted share of ALL eligible voters casting an approve ballot.
    pub fn approve_votes_ratio(&self) -> f64 {
        self.turnout_rate * self.approval_rate
    }

    /// Distance above (+) or below (-) the statutory turnout floor.
    pub fn turnout_margin(&self) -> f64 {
        self.turnout_rate - threshold::MIN_TURNOUT
    }

    /// Distance above (+) or below (-) the statutory approval bar.
    pub fn approval_margin(&self) -> f64 {
        self.approval_rate - threshold::APPROVAL_BAR
    }
}
