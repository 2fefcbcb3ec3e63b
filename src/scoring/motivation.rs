use super::{ScoreContext, Scorer};
use crate::config::ModelConfig;
use crate::signal::{AgeGroup, DimensionScore};

/// Voting intention V_i per age group: political interest x political
/// efficacy x economic motivation, with an interest boost when the
/// target is high-profile. Bounds [0,1].
pub struct MotivationScorer;

impl Scorer for MotivationScorer {
    fn dimension(&self) -> &'static str {
        "motivation"
    }

    fn score(&self, ctx: &ScoreContext<'_>, config: &ModelConfig) -> Vec<DimensionScore> {
        let boost = if config.is_high_profile(ctx.target) {
            config.high_profile_interest_boost
        } else {
            1.0
        };

        AgeGroup::ALL
            .iter()
            .map(|&age| {
                let Some(params) = config.motivation.get(&age) else {
                    return DimensionScore::new(
                        format!("motivation.{age}"),
                        0.5,
                        (0.0, 1.0),
                        "no motivation table, neutral midpoint",
                    );
                };
                let interest = params.political_interest * boost;
                let intention =
                    interest * params.political_efficacy * params.economic_motivation;
                let rationale = format!(
                    "interest {:.3} x efficacy {:.3} x economic {:.3}",
                    interest, params.political_efficacy, params.economic_motivation
                );
                DimensionScore::new(format!("motivation.{age}"), intention, (0.0, 1.0), rationale)
            })
            .collect()
    }
}
