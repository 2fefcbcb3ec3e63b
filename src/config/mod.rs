//! Configuration Module
//!
//! Every number the aggregation pipeline sums or multiplies lives here:
//! population shares, forum-usage mixes, media platform weights,
//! atmosphere response parameters, weather penalties, regional
//! multipliers, baselines and the target registry. The tables are
//! parameters, not constants: scorers and the aggregator receive an
//! explicit `ModelConfig` and hold no state of their own.
//!
//! The `Default` implementation carries the reference tables the model
//! was calibrated with; deployments override them through a JSON
//! document managed by [`ConfigManager`].

use crate::error::PredictError;
use crate::signal::{AgeGroup, RecallTarget};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::fs;
use tracing::info;

/// Voting-motivation parameters for one age group. Each factor lies in
/// [0,1]; the voting intention is their product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotivationParams {
    pub political_interest: f64,
    pub political_efficacy: f64,
    pub economic_motivation: f64,
}

/// Media catalysis parameters shared across age groups.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MediaParams {
    /// Coefficient floor before platform contributions are added.
    pub base: f64,
    /// Damping applied to the summed platform contributions.
    pub damping: f64,
    /// Attention level for ordinary targets.
    pub base_attention: f64,
    /// Attention level for high-profile targets.
    pub high_profile_attention: f64,
}

/// Social-atmosphere amplifier parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereParams {
    /// Coefficient floor before the amplification term is added.
    pub base: f64,
    /// Discussion-heat multiplier: min(heat + offset, cap).
    pub heat_offset: f64,
    pub heat_cap: f64,
    /// Peer-pressure factor: min(pressure + offset, cap).
    pub pressure_offset: f64,
    pub pressure_cap: f64,
    /// Peer pressure assumed when no survey data is available, in [0,1].
    pub default_peer_pressure: f64,
    /// Sample count at which discussion heat saturates at 1.0.
    pub heat_normalizer: f64,
}

/// Turnout penalties applied by the weather scorer. Thresholds are
/// checked severest-first so a scorching day is not billed as merely hot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherPenalties {
    pub hot_threshold_c: f64,
    pub hot_penalty: f64,
    pub scorching_threshold_c: f64,
    pub scorching_penalty: f64,
    pub cold_threshold_c: f64,
    pub cold_penalty: f64,
    pub rain_threshold_mm: f64,
    pub rain_penalty: f64,
    pub downpour_threshold_mm: f64,
    pub downpour_penalty: f64,
    pub severe_condition_penalty: f64,
    /// Lower bound of the weather coefficient.
    pub floor: f64,
}

/// Fallback estimates for degraded runs and neutral substitutions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baselines {
    /// Turnout returned when no dimension scores are available at all.
    pub base_turnout: f64,
    /// Approval returned when no dimension scores are available at all.
    pub base_approval: f64,
    /// Positive-ratio midpoint substituted for missing sources.
    pub neutral_sentiment: f64,
}

/// Regional-adjustment parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionParams {
    /// Historical turnout above this earns a bonus.
    pub high_turnout_threshold: f64,
    pub high_turnout_bonus: f64,
    /// Historical turnout below this takes a penalty.
    pub low_turnout_threshold: f64,
    pub low_turnout_penalty: f64,
    /// Mobilization scaling: factor = base + capacity * span.
    pub mobilization_base: f64,
    pub mobilization_span: f64,
    /// Final clamp for the adjustment factor.
    pub lower_bound: f64,
    pub upper_bound: f64,
}

/// The complete coefficient-table set for one model edition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// National population share per age group; shares sum to 1.0.
    pub population_shares: HashMap<AgeGroup, f64>,
    /// Forum usage mix per age group: source name -> weight. Weights of
    /// one age group sum to 1.0.
    pub forum_usage: HashMap<AgeGroup, HashMap<String, f64>>,
    /// Approval-side sentiment sensitivity per age group.
    pub sentiment_sensitivity: HashMap<AgeGroup, f64>,
    /// Atmosphere sensitivity per age group.
    pub atmosphere_sensitivity: HashMap<AgeGroup, f64>,
    /// Sources whose positive ratios feed the atmosphere scorer.
    pub atmosphere_sources: Vec<String>,
    pub motivation: HashMap<AgeGroup, MotivationParams>,
    /// Media platform mix per age group: platform -> weight.
    pub media_weights: HashMap<AgeGroup, HashMap<String, f64>>,
    /// Platform influence multipliers; unknown platforms count as 1.0.
    pub platform_multipliers: HashMap<String, f64>,
    pub media: MediaParams,
    pub atmosphere: AtmosphereParams,
    pub weather: WeatherPenalties,
    /// District multiplier table; unknown districts count as 1.0.
    pub region_multipliers: HashMap<String, f64>,
    pub region: RegionParams,
    /// Intensity at and above which a target counts as high-profile.
    pub high_profile_cutoff: f64,
    /// Interest boost applied to high-profile targets' motivation.
    pub high_profile_interest_boost: f64,
    pub baselines: Baselines,
    /// Registered recall targets by id.
    pub targets: HashMap<String, RecallTarget>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        let population_shares = HashMap::from([
            (AgeGroup::Youth, 0.30),
            (AgeGroup::Middle, 0.45),
            (AgeGroup::Elder, 0.25),
        ]);

        let forum_usage = HashMap::from([
            (
                AgeGroup::Youth,
                HashMap::from([
                    ("ptt".to_string(), 0.45),
                    ("dcard".to_string(), 0.35),
                    ("mobile01".to_string(), 0.20),
                ]),
            ),
            (
                AgeGroup::Middle,
                HashMap::from([
                    ("ptt".to_string(), 0.25),
                    ("dcard".to_string(), 0.15),
                    ("mobile01".to_string(), 0.60),
                ]),
            ),
            (
                AgeGroup::Elder,
                HashMap::from([
                    ("news".to_string(), 0.80),
                    ("facebook".to_string(), 0.20),
                ]),
            ),
        ]);

        let sentiment_sensitivity = HashMap::from([
            (AgeGroup::Youth, 1.2),
            (AgeGroup::Middle, 1.0),
            (AgeGroup::Elder, 0.8),
        ]);

        let atmosphere_sensitivity = HashMap::from([
            (AgeGroup::Youth, 0.30),
            (AgeGroup::Middle, 0.25),
            (AgeGroup::Elder, 0.20),
        ]);

        let motivation = HashMap::from([
            (
                AgeGroup::Youth,
                MotivationParams {
                    political_interest: 0.6,
                    political_efficacy: 0.7,
                    economic_motivation: 0.8,
                },
            ),
            (
                AgeGroup::Middle,
                MotivationParams {
                    political_interest: 0.8,
                    political_efficacy: 0.6,
                    economic_motivation: 0.9,
                },
            ),
            (
                AgeGroup::Elder,
                MotivationParams {
                    political_interest: 0.9,
                    political_efficacy: 0.5,
                    economic_motivation: 0.7,
                },
            ),
        ]);

        let media_weights = HashMap::from([
            (
                AgeGroup::Youth,
                HashMap::from([
                    ("instagram".to_string(), 0.30),
                    ("tiktok".to_string(), 0.25),
                    ("youtube".to_string(), 0.25),
                    ("ptt".to_string(), 0.20),
                ]),
            ),
            (
                AgeGroup::Middle,
                HashMap::from([
                    ("facebook".to_string(), 0.40),
                    ("line".to_string(), 0.30),
                    ("tv".to_string(), 0.20),
                    ("news".to_string(), 0.10),
                ]),
            ),
            (
                AgeGroup::Elder,
                HashMap::from([
                    ("tv".to_string(), 0.50),
                    ("newspaper".to_string(), 0.20),
                    ("radio".to_string(), 0.20),
                    ("word_of_mouth".to_string(), 0.10),
                ]),
            ),
        ]);

        let platform_multipliers = HashMap::from([
            ("instagram".to_string(), 1.1),
            ("tiktok".to_string(), 1.2),
            ("youtube".to_string(), 1.0),
            ("ptt".to_string(), 1.3),
            ("facebook".to_string(), 1.1),
            ("line".to_string(), 0.9),
            ("tv".to_string(), 1.2),
            ("news".to_string(), 1.0),
            ("newspaper".to_string(), 0.8),
            ("radio".to_string(), 0.7),
            ("word_of_mouth".to_string(), 0.8),
        ]);

        let region_multipliers = HashMap::from([
            ("taipei".to_string(), 1.05),
            ("new_taipei".to_string(), 1.02),
            ("taoyuan".to_string(), 1.00),
            ("taichung".to_string(), 1.03),
            ("tainan".to_string(), 1.08),
            ("kaohsiung".to_string(), 1.06),
            ("keelung".to_string(), 0.98),
            ("hsinchu".to_string(), 1.01),
            ("miaoli".to_string(), 0.97),
            ("changhua".to_string(), 1.00),
            ("nantou".to_string(), 0.96),
            ("yunlin".to_string(), 0.98),
            ("chiayi".to_string(), 1.02),
            ("pingtung".to_string(), 1.04),
            ("yilan".to_string(), 0.99),
            ("hualien".to_string(), 0.95),
            ("taitung".to_string(), 0.94),
            ("penghu".to_string(), 0.92),
            ("kinmen".to_string(), 0.90),
            ("lienchiang".to_string(), 0.88),
        ]);

        let targets = [
            RecallTarget::new("han_kuo_yu", "Han Kuo-yu", "kaohsiung", 1.8)
                .with_historical_turnout(0.42)
                .with_mobilization(0.8),
            RecallTarget::new("ko_wen_je", "Ko Wen-je", "taipei", 1.6)
                .with_historical_turnout(0.60)
                .with_mobilization(0.7),
            RecallTarget::new("lo_chih_chiang", "Lo Chih-chiang", "taipei", 1.5)
                .with_historical_turnout(0.55),
            RecallTarget::new("chen_po_wei", "Chen Po-wei", "taichung", 1.2)
                .with_historical_turnout(0.52)
                .with_mobilization(0.6),
            RecallTarget::new("chiu_jo_hua", "Chiu Jo-hua", "taoyuan", 0.9),
            RecallTarget::new("generic_legislator", "Generic Legislator", "taoyuan", 1.0),
        ]
        .into_iter()
        .map(|t| (t.id.clone(), t))
        .collect();

        Self {
            population_shares,
            forum_usage,
            sentiment_sensitivity,
            atmosphere_sensitivity,
            atmosphere_sources: vec!["ptt".to_string(), "dcard".to_string()],
            motivation,
            media_weights,
            platform_multipliers,
            media: MediaParams {
                base: 0.5,
                damping: 0.3,
                base_attention: 1.0,
                high_profile_attention: 1.5,
            },
            atmosphere: AtmosphereParams {
                base: 0.7,
                heat_offset: 0.8,
                heat_cap: 1.5,
                pressure_offset: 0.9,
                pressure_cap: 1.3,
                default_peer_pressure: 0.6,
                heat_normalizer: 1000.0,
            },
            weather: WeatherPenalties {
                hot_threshold_c: 30.0,
                hot_penalty: 0.05,
                scorching_threshold_c: 35.0,
                scorching_penalty: 0.10,
                cold_threshold_c: 10.0,
                cold_penalty: 0.08,
                rain_threshold_mm: 5.0,
                rain_penalty: 0.10,
                downpour_threshold_mm: 15.0,
                downpour_penalty: 0.20,
                severe_condition_penalty: 0.15,
                floor: 0.5,
            },
            region_multipliers,
            region: RegionParams {
                high_turnout_threshold: 0.60,
                high_turnout_bonus: 0.10,
                low_turnout_threshold: 0.50,
                low_turnout_penalty: 0.05,
                mobilization_base: 0.9,
                mobilization_span: 0.2,
                lower_bound: 0.95,
                upper_bound: 1.10,
            },
            high_profile_cutoff: 1.3,
            high_profile_interest_boost: 1.2,
            baselines: Baselines {
                base_turnout: 0.45,
                base_approval: 0.40,
                neutral_sentiment: 0.5,
            },
            targets,
        }
    }
}

impl ModelConfig {
    /// Look up a registered target. Unknown ids are fatal to the single
    /// prediction call that asked for them.
    pub fn target(&self, id: &str) -> Result<&RecallTarget, PredictError> {
        self.targets
            .get(id)
            .ok_or_else(|| PredictError::UnknownTarget(id.to_string()))
    }

    /// Population share for one age group, honoring target overrides.
    pub fn population_share(&self, target: &RecallTarget, age: AgeGroup) -> f64 {
        target
            .population_overrides
            .get(&age)
            .or_else(|| self.population_shares.get(&age))
            .copied()
            .unwrap_or(0.0)
    }

    /// Whether the target's intensity makes it a high-profile recall.
    pub fn is_high_profile(&self, target: &RecallTarget) -> bool {
        target.intensity >= self.high_profile_cutoff
    }

    /// Structural sanity checks. Out-of-range coefficients are handled
    /// by clamp-and-warn downstream; this only rejects configurations
    /// no clamp can rescue.
    pub fn validate(&self) -> Result<(), PredictError> {
        for age in AgeGroup::ALL {
            if !self.population_shares.contains_key(&age) {
                return Err(PredictError::InvalidConfig(format!(
                    "population_shares missing age group '{age}'"
                )));
            }
            if !self.motivation.contains_key(&age) {
                return Err(PredictError::InvalidConfig(format!(
                    "motivation missing age group '{age}'"
                )));
            }
        }
        let share_sum: f64 = AgeGroup::ALL
            .iter()
            .filter_map(|a| self.population_shares.get(a))
            .sum();
        if share_sum <= 0.0 {
            return Err(PredictError::InvalidConfig(
                "population shares sum to zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Loads and persists `ModelConfig` documents as JSON.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the configuration, writing and returning the defaults when
    /// the file does not exist yet.
    pub async fn load(&self) -> Result<ModelConfig> {
        if !self.path.exists() {
            let default = ModelConfig::default();
            self.save(&default).await?;
            info!(path = %self.path.display(), "wrote default model configuration");
            return Ok(default);
        }
        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("reading config {}", self.path.display()))?;
        let config: ModelConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", self.path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub async fn save(&self, config: &ModelConfig) -> Result<()> {
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .await
            .with_context(|| format!("writing config {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(ModelConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_shares_sum_to_one() {
        let config = ModelConfig::default();
        let sum: f64 = AgeGroup::ALL
            .iter()
            .map(|a| config.population_shares[a])
            .sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_forum_usage_weights_sum_to_one() {
        let config = ModelConfig::default();
        for age in AgeGroup::ALL {
            let sum: f64 = config.forum_usage[&age].values().sum();
            assert!((sum - 1.0).abs() < 1e-12, "{age} usage sums to {sum}");
        }
    }

    #[test]
    fn test_unknown_target_rejected() {
        let config = ModelConfig::default();
        assert!(matches!(
            config.target("nobody"),
            Err(PredictError::UnknownTarget(_))
        ));
    }

    #[test]
    fn test_missing_age_group_is_invalid() {
        let mut config = ModelConfig::default();
        config.motivation.remove(&AgeGroup::Elder);
        assert!(matches!(
            config.validate(),
            Err(PredictError::InvalidConfig(_))
        ));
    }
}
