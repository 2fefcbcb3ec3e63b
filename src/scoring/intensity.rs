use super::{ScoreContext, Scorer};
use crate::config::ModelConfig;
use crate::signal::DimensionScore;

/// Political intensity of the recall itself, taken straight from the
/// target profile. Bounds [0.8, 1.8] (local councilor up to a
/// national figure).
pub struct IntensityScorer;

impl Scorer for IntensityScorer {
    fn dimension(&self) -> &'static str {
        "intensity"
    }

    fn score(&self, ctx: &ScoreContext<'_>, _config: &ModelConfig) -> Vec<DimensionScore> {
        vec![DimensionScore::new(
            "intensity",
            ctx.target.intensity,
            (0.8, 1.8),
            format!("target profile '{}'", ctx.target.id),
        )]
    }
}
