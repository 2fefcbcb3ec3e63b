//! Aggregation & Prediction Pipeline
//!
//! Stateless transformation from a snapshot collection to a
//! [`PredictionResult`]: run the canonical scorer set, combine the
//! scores with the fixed weighted formula, apply the statutory
//! threshold. The pipeline performs no I/O and holds no state:
//! identical inputs yield bit-identical results, and independent
//! targets can be computed concurrently without coordination.

mod aggregator;
mod confidence;
pub mod threshold;

pub use aggregator::{aggregate, Estimates};
pub use confidence::sample_confidence;
pub use threshold::{evaluate, Verdict, APPROVAL_BAR, MIN_TURNOUT};

use crate::config::ModelConfig;
use crate::error::PredictError;
use crate::scoring::{default_scorers, ScoreContext, Scorer};
use crate::signal::{PredictionResult, SnapshotMap, WeatherObservation};
use tracing::{debug, info};

/// The prediction pipeline for one model configuration.
pub struct Predictor {
    config: ModelConfig,
    scorers: Vec<Box<dyn Scorer>>,
}

impl Predictor {
    /// Build a predictor, rejecting structurally unusable
    /// configurations up front.
    pub fn new(config: ModelConfig) -> Result<Self, PredictError> {
        config.validate()?;
        Ok(Self {
            config,
            scorers: default_scorers(),
        })
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Predict the recall outcome for one registered target.
    ///
    /// Unknown targets are rejected; every data-quality problem short
    /// of that is normalized in place (neutral midpoints, clamps) and
    /// leaves its trace in the returned audit trail.
    pub fn predict(
        &self,
        target_id: &str,
        snapshots: &SnapshotMap,
        weather: Option<&WeatherObservation>,
    ) -> Result<PredictionResult, PredictError> {
        let target = self.config.target(target_id)?;
        let ctx = ScoreContext::new(target, snapshots).with_weather(weather);

        let mut scores = Vec::new();
        for scorer in &self.scorers {
            let produced = scorer.score(&ctx, &self.config);
            debug!(
                dimension = scorer.dimension(),
                count = produced.len(),
                "scored dimension"
            );
            scores.extend(produced);
        }

        let estimates = aggregate(&scores, &self.config, target);
        let verdict = evaluate(estimates.turnout, estimates.approval);
        let sample_size = ctx.total_samples();

        info!(
            target_id,
            turnout = estimates.turnout,
            approval = estimates.approval,
            %verdict,
            "prediction complete"
        );

        Ok(PredictionResult {
            target_id: target_id.to_string(),
            turnout_rate: estimates.turnout,
            approval_rate: estimates.approval,
            verdict,
            confidence: sample_confidence(sample_size),
            sample_size,
            scores,
        })
    }

    /// The documented degraded mode: a prediction from no signals at
    /// all, every sentiment dimension at its neutral midpoint.
    pub fn neutral_baseline(&self, target_id: &str) -> Result<PredictionResult, PredictError> {
        let empty = SnapshotMap::new();
        self.predict(target_id, &empty, None)
    }
}
