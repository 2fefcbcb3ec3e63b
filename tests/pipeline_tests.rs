//! End-to-end properties of the aggregation & prediction pipeline.

use chrono::{TimeZone, Utc};
use recallcast::config::ModelConfig;
use recallcast::pipeline::{aggregate, Predictor, Verdict};
use recallcast::signal::{SignalSnapshot, SnapshotMap};
use recallcast::PredictError;

fn scenario_snapshots() -> SnapshotMap {
    let at = Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap();
    let mut map = SnapshotMap::new();
    map.insert(
        "ptt".to_string(),
        SignalSnapshot::new("ptt", 0.40, 0.20, 100, at),
    );
    map.insert(
        "dcard".to_string(),
        SignalSnapshot::new("dcard", 0.35, 0.15, 80, at),
    );
    map.insert(
        "news".to_string(),
        SignalSnapshot::new("news", 0.50, 0.30, 60, at),
    );
    map
}

fn predictor() -> Predictor {
    Predictor::new(ModelConfig::default()).unwrap()
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let predictor = predictor();
    let snapshots = scenario_snapshots();

    let first = predictor
        .predict("generic_legislator", &snapshots, None)
        .unwrap();
    let second = predictor
        .predict("generic_legislator", &snapshots, None)
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_aggregation_is_order_independent() {
    let predictor = predictor();
    let snapshots = scenario_snapshots();
    let result = predictor
        .predict("generic_legislator", &snapshots, None)
        .unwrap();

    let config = ModelConfig::default();
    let target = config.target("generic_legislator").unwrap();

    let forward = aggregate(&result.scores, &config, target);
    let mut reversed = result.scores.clone();
    reversed.reverse();
    let backward = aggregate(&reversed, &config, target);

    assert_eq!(forward, backward);
    assert_eq!(forward.turnout, result.turnout_rate);
    assert_eq!(forward.approval, result.approval_rate);
}

#[test]
fn test_outputs_bounded_under_adversarial_inputs() {
    let predictor = predictor();
    let at = Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap();

    // A collector that skipped validation entirely.
    let mut snapshots = SnapshotMap::new();
    snapshots.insert(
        "ptt".to_string(),
        SignalSnapshot {
            source: "ptt".to_string(),
            positive_ratio: 42.0,
            negative_ratio: -7.0,
            sample_size: u64::MAX,
            collected_at: at,
        },
    );
    snapshots.insert(
        "dcard".to_string(),
        SignalSnapshot {
            source: "dcard".to_string(),
            positive_ratio: f64::NAN,
            negative_ratio: f64::INFINITY,
            sample_size: 0,
            collected_at: at,
        },
    );

    let result = predictor.predict("han_kuo_yu", &snapshots, None).unwrap();
    assert!((0.0..=1.0).contains(&result.turnout_rate));
    assert!((0.0..=1.0).contains(&result.approval_rate));
    for score in &result.scores {
        assert!(
            score.is_within_bounds(),
            "{} out of bounds: {}",
            score.dimension,
            score.coefficient
        );
    }
}

#[test]
fn test_empty_snapshots_degrade_to_neutral_baseline() {
    let predictor = predictor();
    let result = predictor.neutral_baseline("generic_legislator").unwrap();

    assert!((0.0..=1.0).contains(&result.turnout_rate));
    assert!((0.0..=1.0).contains(&result.approval_rate));
    assert_eq!(result.sample_size, 0);
    assert_eq!(result.confidence, 0.3);

    // Every sentiment stratum sits exactly on the neutral midpoint.
    for score in result.scores.iter().filter(|s| s.dimension.starts_with("sentiment.")) {
        assert!((score.coefficient - 0.5).abs() < 1e-12);
        assert!(score.rationale.contains("neutral midpoint"));
    }

    // And the baseline is itself deterministic.
    let again = predictor.neutral_baseline("generic_legislator").unwrap();
    assert_eq!(result, again);
}

#[test]
fn test_unknown_target_is_rejected_in_isolation() {
    let predictor = predictor();
    let snapshots = scenario_snapshots();

    let err = predictor.predict("nobody", &snapshots, None).unwrap_err();
    assert!(matches!(err, PredictError::UnknownTarget(_)));

    // The failure is per-call: other targets still compute.
    assert!(predictor
        .predict("generic_legislator", &snapshots, None)
        .is_ok());
}

/// Golden regression: the three-snapshot scenario against values
/// recomputed longhand from the documented formula and the default
/// tables.
#[test]
fn test_golden_scenario() {
    let predictor = predictor();
    let snapshots = scenario_snapshots();
    let result = predictor
        .predict("generic_legislator", &snapshots, None)
        .unwrap();

    // Age-stratified sentiment from the forum-usage tables; mobile01
    // and facebook have no snapshot and take the 0.5 neutral midpoint.
    let s_youth = 0.45 * 0.40 + 0.35 * 0.35 + 0.20 * 0.50;
    let s_middle = 0.25 * 0.40 + 0.15 * 0.35 + 0.60 * 0.50;
    let s_elder = 0.80 * 0.50 + 0.20 * 0.50;

    let audit = |dimension: &str| -> f64 {
        result
            .scores
            .iter()
            .find(|s| s.dimension == dimension)
            .unwrap_or_else(|| panic!("missing {dimension}"))
            .coefficient
    };
    assert!((audit("sentiment.youth") - s_youth).abs() < 1e-9);
    assert!((audit("sentiment.middle") - s_middle).abs() < 1e-9);
    assert!((audit("sentiment.elder") - s_elder).abs() < 1e-9);

    // Approval: population share x sensitivity x stratum sentiment,
    // intensity 1.0 for the generic target.
    let expected_approval = 0.30 * 1.2 * s_youth + 0.45 * 1.0 * s_middle + 0.25 * 0.8 * s_elder;
    assert!((result.approval_rate - expected_approval).abs() < 1e-9);

    // Turnout: share x motivation x media x atmosphere per age, then
    // the three global amplifiers (all neutral here).
    let v_youth = 0.6 * 0.7 * 0.8;
    let v_middle = 0.8 * 0.6 * 0.9;
    let v_elder = 0.9 * 0.5 * 0.7;

    let m_youth = 0.5 + (0.30 * 1.1 + 0.25 * 1.2 + 0.25 * 1.0 + 0.20 * 1.3) * 0.3;
    let m_middle = 0.5 + (0.40 * 1.1 + 0.30 * 0.9 + 0.20 * 1.2 + 0.10 * 1.0) * 0.3;
    let m_elder = 0.5 + (0.50 * 1.2 + 0.20 * 0.8 + 0.20 * 0.7 + 0.10 * 0.8) * 0.3;

    let sentiment_component = (0.40 + 0.35) / 2.0 + 0.5;
    let heat_multiplier = (240.0 / 1000.0 + 0.8_f64).min(1.5);
    let pressure_factor = (0.6 + 0.9_f64).min(1.3);
    let amp = sentiment_component * heat_multiplier * pressure_factor;
    let a_youth = 0.7 + amp * 0.30;
    let a_middle = 0.7 + amp * 0.25;
    let a_elder = 0.7 + amp * 0.20;

    let expected_turnout = 0.30 * v_youth * m_youth * a_youth
        + 0.45 * v_middle * m_middle * a_middle
        + 0.25 * v_elder * m_elder * a_elder;
    assert!(
        (result.turnout_rate - expected_turnout).abs() < 1e-9,
        "turnout {} vs expected {}",
        result.turnout_rate,
        expected_turnout
    );

    // Turnout clears the floor, approval stays under the bar.
    assert!(result.turnout_rate >= 0.25);
    assert!(result.approval_rate <= 0.50);
    assert_eq!(result.verdict, Verdict::Fail);
    assert_eq!(result.confidence, 0.6);
    assert_eq!(result.sample_size, 240);
}

#[test]
fn test_result_serializes_with_named_fields() {
    let predictor = predictor();
    let snapshots = scenario_snapshots();
    let result = predictor
        .predict("generic_legislator", &snapshots, None)
        .unwrap();

    let value = serde_json::to_value(&result).unwrap();
    for field in [
        "target_id",
        "turnout_rate",
        "approval_rate",
        "verdict",
        "confidence",
        "sample_size",
        "scores",
    ] {
        assert!(value.get(field).is_some(), "missing field {field}");
    }
    assert_eq!(value["verdict"], "fail");
}
