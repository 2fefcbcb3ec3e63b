use super::{ScoreContext, Scorer};
use crate::config::ModelConfig;
use crate::signal::{AgeGroup, DimensionScore};
use std::fmt::Write as _;

/// Age-stratified sentiment: the forum-usage-weighted positive ratio
/// each age group is exposed to (S1 youth forums, S2 middle forums,
/// S3 elder news). Bounds [0,1].
pub struct SentimentScorer;

impl Scorer for SentimentScorer {
    fn dimension(&self) -> &'static str {
        "sentiment"
    }

    fn score(&self, ctx: &ScoreContext<'_>, config: &ModelConfig) -> Vec<DimensionScore> {
        AgeGroup::ALL
            .iter()
            .map(|&age| stratum_score(age, ctx, config))
            .collect()
    }
}

fn stratum_score(age: AgeGroup, ctx: &ScoreContext<'_>, config: &ModelConfig) -> DimensionScore {
    let mut weighted = 0.0;
    let mut weight_sum = 0.0;
    let mut rationale = String::from("forum-usage weighted positive ratio");

    if let Some(usage) = config.forum_usage.get(&age) {
        // Deterministic order regardless of HashMap iteration.
        let mut sources: Vec<(&String, &f64)> = usage.iter().collect();
        sources.sort_by(|a, b| a.0.cmp(b.0));

        for (source, &weight) in sources {
            if weight <= 0.0 {
                continue;
            }
            let (ratio, substituted) = ctx.positive_ratio_or_neutral(source, config);
            weighted += ratio * weight;
            weight_sum += weight;
            if substituted {
                let _ = write!(rationale, "; {source} missing, neutral midpoint");
            } else {
                let _ = write!(rationale, "; {source} {ratio:.3}*{weight:.2}");
            }
        }
    }

    let coefficient = if weight_sum > 0.0 {
        weighted / weight_sum
    } else {
        rationale.push_str("; no usage table, neutral midpoint");
        config.baselines.neutral_sentiment
    };

    DimensionScore::new(
        format!("sentiment.{age}"),
        coefficient,
        (0.0, 1.0),
        rationale,
    )
}
