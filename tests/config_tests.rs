//! Configuration persistence and registry behavior.

use recallcast::config::{ConfigManager, ModelConfig};
use recallcast::signal::{AgeGroup, RecallTarget};
use recallcast::PredictError;

#[tokio::test]
async fn test_missing_file_seeds_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");

    let manager = ConfigManager::new(&path);
    let config = manager.load().await.unwrap();

    assert_eq!(config, ModelConfig::default());
    assert!(path.exists(), "defaults should have been written");
}

#[tokio::test]
async fn test_round_trip_preserves_tables() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    let manager = ConfigManager::new(&path);

    let mut config = ModelConfig::default();
    config.baselines.base_turnout = 0.52;
    config.sentiment_sensitivity.insert(AgeGroup::Elder, 0.75);
    config.targets.insert(
        "new_target".to_string(),
        RecallTarget::new("new_target", "New Target", "hsinchu", 1.1)
            .with_historical_turnout(0.58),
    );

    manager.save(&config).await.unwrap();
    let loaded = manager.load().await.unwrap();

    assert_eq!(loaded, config);
    assert_eq!(loaded.targets["new_target"].district, "hsinchu");
}

#[tokio::test]
async fn test_structurally_broken_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    let manager = ConfigManager::new(&path);

    let mut config = ModelConfig::default();
    config.population_shares.clear();
    manager.save(&config).await.unwrap();

    let err = manager.load().await.unwrap_err();
    assert!(err.to_string().contains("population_shares"));
}

#[test]
fn test_coefficient_changes_need_no_code() {
    // The aggregator reads weights from the document, so an edited
    // table must flow straight through to the estimates.
    let mut config = ModelConfig::default();
    for age in AgeGroup::ALL {
        config.sentiment_sensitivity.insert(age, 2.0);
    }

    let predictor = recallcast::Predictor::new(config).unwrap();
    let boosted = predictor.neutral_baseline("generic_legislator").unwrap();

    let baseline_predictor = recallcast::Predictor::new(ModelConfig::default()).unwrap();
    let baseline = baseline_predictor
        .neutral_baseline("generic_legislator")
        .unwrap();

    assert!(boosted.approval_rate > baseline.approval_rate);
}

#[test]
fn test_unknown_target_error_names_the_id() {
    let config = ModelConfig::default();
    match config.target("ghost") {
        Err(PredictError::UnknownTarget(id)) => assert_eq!(id, "ghost"),
        other => panic!("expected UnknownTarget, got {other:?}"),
    }
}
