use super::{ScoreContext, Scorer};
use crate::config::ModelConfig;
use crate::signal::DimensionScore;

/// Regional adjustment: historical turnout, mobilization capacity and
/// the district multiplier table. Bounds [0.95, 1.1].
pub struct RegionScorer;

impl Scorer for RegionScorer {
    fn dimension(&self) -> &'static str {
        "region"
    }

    fn score(&self, ctx: &ScoreContext<'_>, config: &ModelConfig) -> Vec<DimensionScore> {
        let params = &config.region;
        let target = ctx.target;

        let mut adjustment = 1.0;
        let mut rationale = format!("district {}", target.district);

        if let Some(historical) = target.historical_turnout {
            if historical > params.high_turnout_threshold {
                adjustment += params.high_turnout_bonus;
                rationale.push_str("; high historical turnout bonus");
            } else if historical < params.low_turnout_threshold {
                adjustment -= params.low_turnout_penalty;
                rationale.push_str("; low historical turnout penalty");
            }
        }

        // Mobilization of 0.5 is exactly neutral.
        let capacity = target.mobilization.unwrap_or(0.5).clamp(0.0, 1.0);
        adjustment *= params.mobilization_base + capacity * params.mobilization_span;

        let multiplier = config
            .region_multipliers
            .get(&target.district)
            .copied()
            .unwrap_or(1.0);
        adjustment *= multiplier;

        vec![DimensionScore::new(
            "region",
            adjustment,
            (params.lower_bound, params.upper_bound),
            rationale,
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::RecallTarget;
    use std::collections::HashMap;

    fn score_for(target: RecallTarget) -> DimensionScore {
        let config = ModelConfig::default();
        let snapshots = HashMap::new();
        let ctx = ScoreContext::new(&target, &snapshots);
        RegionScorer.score(&ctx, &config).remove(0)
    }

    #[test]
    fn test_unknown_district_defaults_neutral() {
        let score = score_for(RecallTarget::new("t", "T", "atlantis", 1.0));
        assert_eq!(score.coefficient, 1.0);
    }

    #[test]
    fn test_high_turnout_and_mobilization_bonus_clamped() {
        let score = score_for(
            RecallTarget::new("t", "T", "tainan", 1.0)
                .with_historical_turnout(0.7)
                .with_mobilization(1.0),
        );
        // 1.1 * 1.1 * 1.08 = 1.3068, clamped to the upper bound.
        assert_eq!(score.coefficient, 1.1);
        assert!(score.clamped);
    }

    #[test]
    fn test_low_turnout_penalty_applies() {
        let score = score_for(
            RecallTarget::new("t", "T", "taoyuan", 1.0).with_historical_turnout(0.4),
        );
        // (1.0 - 0.05) * 1.0 * 1.0
        assert!((score.coefficient - 0.95).abs() < 1e-9);
    }
}
