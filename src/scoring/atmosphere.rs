use super::{ScoreContext, Scorer};
use crate::config::ModelConfig;
use crate::signal::{AgeGroup, DimensionScore};

/// Social-atmosphere amplifier E_social per age group.
///
/// Combines forum positivity, discussion heat (sample volume against
/// the configured normalizer) and peer pressure into an amplification
/// term, scaled by each age group's sensitivity. Bounds [0.5, 1.5].
pub struct AtmosphereScorer;

impl Scorer for AtmosphereScorer {
    fn dimension(&self) -> &'static str {
        "atmosphere"
    }

    fn score(&self, ctx: &ScoreContext<'_>, config: &ModelConfig) -> Vec<DimensionScore> {
        let params = &config.atmosphere;

        let sentiment_score = sentiment_component(ctx, config);
        let heat = discussion_heat(ctx, config);
        let heat_multiplier = (heat + params.heat_offset).min(params.heat_cap);
        let pressure_factor =
            (params.default_peer_pressure + params.pressure_offset).min(params.pressure_cap);

        AgeGroup::ALL
            .iter()
            .map(|&age| {
                let sensitivity = config
                    .atmosphere_sensitivity
                    .get(&age)
                    .copied()
                    .unwrap_or(0.25);
                let coefficient = params.base
                    + sentiment_score * heat_multiplier * pressure_factor * sensitivity;
                let rationale = format!(
                    "sentiment {sentiment_score:.3} x heat {heat_multiplier:.3} x pressure {pressure_factor:.3} x sensitivity {sensitivity:.2}"
                );
                DimensionScore::new(
                    format!("atmosphere.{age}"),
                    coefficient,
                    (0.5, 1.5),
                    rationale,
                )
            })
            .collect()
    }
}

/// Mean positive ratio over the configured atmosphere sources, lifted
/// by the 0.5 base the amplifier formula expects.
fn sentiment_component(ctx: &ScoreContext<'_>, config: &ModelConfig) -> f64 {
    if config.atmosphere_sources.is_empty() {
        return config.baselines.neutral_sentiment + 0.5;
    }
    let sum: f64 = config
        .atmosphere_sources
        .iter()
        .map(|source| ctx.positive_ratio_or_neutral(source, config).0)
        .sum();
    sum / config.atmosphere_sources.len() as f64 + 0.5
}

/// Discussion heat in [0,1]: total sample volume over the normalizer.
fn discussion_heat(ctx: &ScoreContext<'_>, config: &ModelConfig) -> f64 {
    let normalizer = config.atmosphere.heat_normalizer.max(1.0);
    (ctx.total_samples() as f64 / normalizer).min(1.0)
}
