use super::{ScoreContext, Scorer};
use crate::config::ModelConfig;
use crate::signal::{AgeGroup, DimensionScore};

/// Media catalysis E_media per age group: a damped sum of platform
/// weight x influence multiplier x attention over the age group's
/// platform mix, on top of the configured base. Bounds [0.5, 1.5].
pub struct MediaScorer;

impl Scorer for MediaScorer {
    fn dimension(&self) -> &'static str {
        "media"
    }

    fn score(&self, ctx: &ScoreContext<'_>, config: &ModelConfig) -> Vec<DimensionScore> {
        let attention = if config.is_high_profile(ctx.target) {
            config.media.high_profile_attention
        } else {
            config.media.base_attention
        };

        AgeGroup::ALL
            .iter()
            .map(|&age| {
                let mut contribution = 0.0;
                if let Some(weights) = config.media_weights.get(&age) {
                    let mut platforms: Vec<(&String, &f64)> = weights.iter().collect();
                    platforms.sort_by(|a, b| a.0.cmp(b.0));
                    for (platform, &weight) in platforms {
                        let multiplier = config
                            .platform_multipliers
                            .get(platform)
                            .copied()
                            .unwrap_or(1.0);
                        contribution += attention * weight * multiplier * config.media.damping;
                    }
                }
                let coefficient = config.media.base + contribution;
                let rationale = format!(
                    "attention {attention:.2}, damped platform mix {contribution:.4}"
                );
                DimensionScore::new(format!("media.{age}"), coefficient, (0.5, 1.5), rationale)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::RecallTarget;
    use std::collections::HashMap;

    #[test]
    fn test_ordinary_target_coefficients() {
        let config = ModelConfig::default();
        let target = RecallTarget::new("t", "T", "taipei", 1.0);
        let snapshots = HashMap::new();
        let ctx = ScoreContext::new(&target, &snapshots);

        let scores = MediaScorer.score(&ctx, &config);
        // youth mix: 0.3*1.1 + 0.25*1.2 + 0.25*1.0 + 0.2*1.3 = 1.14
        // 0.5 + 1.0 * 1.14 * 0.3
        assert!((scores[0].coefficient - 0.842).abs() < 1e-9);
        for score in &scores {
            assert!(score.is_within_bounds());
        }
    }

    #[test]
    fn test_high_profile_target_raises_coefficient() {
        let config = ModelConfig::default();
        let ordinary = RecallTarget::new("a", "A", "taipei", 1.0);
        let famous = RecallTarget::new("b", "B", "taipei", 1.8);
        let snapshots = HashMap::new();

        let low = MediaScorer.score(&ScoreContext::new(&ordinary, &snapshots), &config);
        let high = MediaScorer.score(&ScoreContext::new(&famous, &snapshots), &config);
        for (l, h) in low.iter().zip(high.iter()) {
            assert!(h.coefficient > l.coefficient);
        }
    }
}
