use super::{ScoreContext, Scorer};
use crate::config::ModelConfig;
use crate::signal::DimensionScore;

/// Weather adjustment T_weather: a single penalty-based coefficient.
/// Missing observations are neutral, not an error. Bounds
/// [floor, 1.0].
pub struct WeatherScorer;

impl Scorer for WeatherScorer {
    fn dimension(&self) -> &'static str {
        "weather"
    }

    fn score(&self, ctx: &ScoreContext<'_>, config: &ModelConfig) -> Vec<DimensionScore> {
        let penalties = &config.weather;
        let bounds = (penalties.floor, 1.0);

        let Some(observation) = ctx.weather else {
            return vec![DimensionScore::new(
                "weather",
                1.0,
                bounds,
                "no observation, neutral",
            )];
        };

        let mut coefficient = 1.0;
        let mut rationale = format!(
            "{:.1}C, {:.1}mm, {:?}",
            observation.temperature_c, observation.rainfall_mm, observation.condition
        );

        // Severest bracket first so a scorching day is not billed as
        // merely hot.
        if observation.temperature_c >= penalties.scorching_threshold_c {
            coefficient -= penalties.scorching_penalty;
            rationale.push_str("; scorching penalty");
        } else if observation.temperature_c > penalties.hot_threshold_c {
            coefficient -= penalties.hot_penalty;
            rationale.push_str("; hot penalty");
        } else if observation.temperature_c < penalties.cold_threshold_c {
            coefficient -= penalties.cold_penalty;
            rationale.push_str("; cold penalty");
        }

        if observation.rainfall_mm >= penalties.downpour_threshold_mm {
            coefficient -= penalties.downpour_penalty;
            rationale.push_str("; downpour penalty");
        } else if observation.rainfall_mm > penalties.rain_threshold_mm {
            coefficient -= penalties.rain_penalty;
            rationale.push_str("; rain penalty");
        }

        if observation.condition.is_severe() {
            coefficient -= penalties.severe_condition_penalty;
            rationale.push_str("; severe condition penalty");
        }

        vec![DimensionScore::new("weather", coefficient, bounds, rationale)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{RecallTarget, WeatherCondition, WeatherObservation};
    use std::collections::HashMap;

    fn score_for(observation: Option<WeatherObservation>) -> DimensionScore {
        let config = ModelConfig::default();
        let target = RecallTarget::new("t", "T", "taipei", 1.0);
        let snapshots = HashMap::new();
        let ctx = ScoreContext::new(&target, &snapshots).with_weather(observation.as_ref());
        WeatherScorer.score(&ctx, &config).remove(0)
    }

    #[test]
    fn test_missing_observation_is_neutral() {
        let score = score_for(None);
        assert_eq!(score.coefficient, 1.0);
        assert!(score.rationale.contains("neutral"));
    }

    #[test]
    fn test_mild_day_no_penalty() {
        let score = score_for(Some(WeatherObservation::new(
            24.0,
            0.0,
            WeatherCondition::Clear,
        )));
        assert_eq!(score.coefficient, 1.0);
    }

    #[test]
    fn test_scorching_day_takes_severe_bracket_only() {
        let score = score_for(Some(WeatherObservation::new(
            36.0,
            0.0,
            WeatherCondition::Clear,
        )));
        assert!((score.coefficient - 0.90).abs() < 1e-9);
    }

    #[test]
    fn test_typhoon_downpour_floors_out() {
        let score = score_for(Some(WeatherObservation::new(
            28.0,
            40.0,
            WeatherCondition::Typhoon,
        )));
        // 1.0 - 0.20 - 0.15 = 0.65
        assert!((score.coefficient - 0.65).abs() < 1e-9);
        assert!(score.coefficient >= 0.5);
    }
}
