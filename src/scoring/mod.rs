//! Per-Dimension Scorers
//!
//! Each scorer maps one MECE dimension's raw signal to one or more
//! bounded [`DimensionScore`]s. Scorers are deterministic, side-effect
//! free, and never fail: missing sources substitute the configured
//! neutral midpoint, out-of-range inputs are clamped with a warning
//! trail in the score rationale.

mod atmosphere;
mod intensity;
mod media;
mod motivation;
mod region;
mod sentiment;
mod weather;

pub use atmosphere::AtmosphereScorer;
pub use intensity::IntensityScorer;
pub use media::MediaScorer;
pub use motivation::MotivationScorer;
pub use region::RegionScorer;
pub use sentiment::SentimentScorer;
pub use weather::WeatherScorer;

use crate::config::ModelConfig;
use crate::signal::{DimensionScore, RecallTarget, SignalSnapshot, WeatherObservation};
use std::collections::HashMap;

/// Read-only inputs shared by every scorer for one prediction run.
#[derive(Debug, Clone, Copy)]
pub struct ScoreContext<'a> {
    pub target: &'a RecallTarget,
    pub snapshots: &'a HashMap<String, SignalSnapshot>,
    pub weather: Option<&'a WeatherObservation>,
}

impl<'a> ScoreContext<'a> {
    pub fn new(
        target: &'a RecallTarget,
        snapshots: &'a HashMap<String, SignalSnapshot>,
    ) -> Self {
        Self {
            target,
            snapshots,
            weather: None,
        }
    }

    pub fn with_weather(mut self, weather: Option<&'a WeatherObservation>) -> Self {
        self.weather = weather;
        self
    }

    /// Positive ratio for one source, falling back to the configured
    /// neutral midpoint. Returns `(ratio, substituted)`.
    pub fn positive_ratio_or_neutral(&self, source: &str, config: &ModelConfig) -> (f64, bool) {
        match self.snapshots.get(source) {
            Some(snapshot) => (snapshot.positive_ratio.clamp(0.0, 1.0), false),
            None => (config.baselines.neutral_sentiment, true),
        }
    }

    /// Total sample count across all snapshots.
    pub fn total_samples(&self) -> u64 {
        self.snapshots.values().map(|s| s.sample_size).sum()
    }
}

/// One MECE analysis dimension.
pub trait Scorer: Send + Sync {
    /// Stable dimension prefix, e.g. "sentiment".
    fn dimension(&self) -> &'static str;

    /// Produce this dimension's scores. Deterministic given identical
    /// inputs; output order follows [`crate::signal::AgeGroup::ALL`]
    /// for stratified dimensions.
    fn score(&self, ctx: &ScoreContext<'_>, config: &ModelConfig) -> Vec<DimensionScore>;
}

/// The canonical scorer set, in audit-trail order.
pub fn default_scorers() -> Vec<Box<dyn Scorer>> {
    vec![
        Box::new(SentimentScorer),
        Box::new(MotivationScorer),
        Box::new(MediaScorer),
        Box::new(AtmosphereScorer),
        Box::new(WeatherScorer),
        Box::new(RegionScorer),
        Box::new(IntensityScorer),
    ]
}
