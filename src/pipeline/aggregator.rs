use crate::config::ModelConfig;
use crate::signal::{AgeGroup, DimensionScore, RecallTarget};
use std::collections::HashMap;

/// Turnout/approval estimates before the statutory test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimates {
    pub turnout: f64,
    pub approval: f64,
}

/// Combine dimension scores into turnout and approval estimates.
///
/// turnout  = sum over ages of share_i x V_i x E_media,i x E_social,i,
///            then x weather x region x intensity
/// approval = sum over ages of share_i x sensitivity_i x S_i,
///            then x intensity
///
/// Scores are consumed through a keyed lookup and the age sum runs in
/// the fixed [`AgeGroup::ALL`] order, so callers may supply the list in
/// any order and get bit-identical results. Duplicate keys average,
/// which keeps the lookup commutative too. Missing keys degrade to
/// their dimension's neutral value; a fully empty list returns the
/// configured baselines. Both estimates are clamped to [0,1].
pub fn aggregate(
    scores: &[DimensionScore],
    config: &ModelConfig,
    target: &RecallTarget,
) -> Estimates {
    if scores.is_empty() {
        return Estimates {
            turnout: config.baselines.base_turnout.clamp(0.0, 1.0),
            approval: config.baselines.base_approval.clamp(0.0, 1.0),
        };
    }

    let lookup = build_lookup(scores);
    let neutral_ratio = config.baselines.neutral_sentiment;
    let coefficient = |key: &str, neutral: f64| -> f64 {
        lookup.get(key).copied().unwrap_or(neutral)
    };

    let mut turnout = 0.0;
    let mut approval = 0.0;
    for age in AgeGroup::ALL {
        let share = config.population_share(target, age);
        let motivation = coefficient(&format!("motivation.{age}"), neutral_ratio);
        let media = coefficient(&format!("media.{age}"), 1.0);
        let atmosphere = coefficient(&format!("atmosphere.{age}"), 1.0);
        turnout += share * motivation * media * atmosphere;

        let sentiment = coefficient(&format!("sentiment.{age}"), neutral_ratio);
        let sensitivity = config
            .sentiment_sensitivity
            .get(&age)
            .copied()
            .unwrap_or(1.0);
        approval += share * sensitivity * sentiment;
    }

    let weather = coefficient("weather", 1.0);
    let region = coefficient("region", 1.0);
    let intensity = coefficient("intensity", 1.0);

    Estimates {
        turnout: (turnout * weather * region * intensity).clamp(0.0, 1.0),
        approval: (approval * intensity).clamp(0.0, 1.0),
    }
}

/// Coefficient per dimension key; duplicates average so the lookup is
/// insensitive to input order.
fn build_lookup(scores: &[DimensionScore]) -> HashMap<String, f64> {
    let mut sums: HashMap<String, (f64, u32)> = HashMap::new();
    for score in scores {
        let entry = sums.entry(score.dimension.clone()).or_insert((0.0, 0));
        entry.0 += score.coefficient;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(key, (sum, count))| (key, sum / count as f64))
        .collect()
}
