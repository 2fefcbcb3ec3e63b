//! Signal Model
//!
//! Fixed-shape input and output records for the prediction pipeline.
//! Snapshots are produced by collectors and consumed read-only; scores
//! and results are recomputed fresh on every run and never mutated.

mod score;
mod snapshot;
mod target;
mod result;
mod weather;

pub use score::DimensionScore;
pub use snapshot::{SignalSnapshot, SnapshotMap};
pub use target::RecallTarget;
pub use result::PredictionResult;
pub use weather::{WeatherCondition, WeatherObservation};

use serde::{Deserialize, Serialize};

/// MECE age partition used by every stratified table in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    /// 18-35
    Youth,
    /// 36-55
    Middle,
    /// 56+
    Elder,
}

impl AgeGroup {
    /// Canonical iteration order, used wherever output must be stable.
    pub const ALL: [AgeGroup; 3] = [AgeGroup::Youth, AgeGroup::Middle, AgeGroup::Elder];

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Youth => "youth",
            AgeGroup::Middle => "middle",
            AgeGroup::Elder => "elder",
        }
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
