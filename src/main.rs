//! Recallcast demo binary.
//!
//! Loads (or seeds) the model configuration, obtains a snapshot set
//! (from a JSON file when given one, otherwise from the seeded synthetic
//! generator) and prints a prediction report for every registered
//! target. Results are also written to a timestamped JSON file the way
//! the dashboard's history importer expects them.

use anyhow::{Context, Result};
use chrono::Utc;
use recallcast::collect::CollectionRun;
use recallcast::config::ConfigManager;
use recallcast::pipeline::Predictor;
use recallcast::signal::SnapshotMap;
use recallcast::synth::SyntheticGenerator;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

const CONFIG_PATH: &str = "recallcast.json";
const SYNTH_SEED: u64 = 42;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    println!("\n{}", "═".repeat(60));
    println!("  RECALLCAST :: recall vote forecast");
    println!("{}", "═".repeat(60));

    let config = ConfigManager::new(CONFIG_PATH).load().await?;

    let now = Utc::now();
    let snapshots: SnapshotMap = match std::env::args().nth(1) {
        Some(path) => {
            info!(path, "loading snapshots");
            let content = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("reading snapshots {path}"))?;
            let mut parsed: SnapshotMap = serde_json::from_str(&content)?;
            for snapshot in parsed.values_mut() {
                snapshot.normalize();
            }
            parsed
        }
        None => {
            warn!("no snapshot file given, using synthetic data (seed {SYNTH_SEED})");
            SyntheticGenerator::from_seed(SYNTH_SEED).snapshot_set(now)
        }
    };
    let run = CollectionRun::new(now, snapshots);

    let predictor = Predictor::new(config)?;

    let mut target_ids: Vec<String> = predictor.config().targets.keys().cloned().collect();
    target_ids.sort();

    let mut results = Vec::new();
    for target_id in &target_ids {
        let result = predictor.predict(target_id, &run.snapshots, None)?;
        let target = predictor.config().target(target_id)?;

        println!("\n▸ {} ({})", target.name, target.district);
        println!("    turnout   {:>6.1}%", result.turnout_rate * 100.0);
        println!("    approval  {:>6.1}%", result.approval_rate * 100.0);
        println!(
            "    verdict   {}  (margins: turnout {:+.1}pp, approval {:+.1}pp)",
            result.verdict,
            result.turnout_margin() * 100.0,
            result.approval_margin() * 100.0
        );
        println!(
            "    confidence {:.0}%  over {} samples",
            result.confidence * 100.0,
            result.sample_size
        );
        results.push(result);
    }

    let out_path = format!("prediction_results_{}.json", now.format("%Y%m%d_%H%M%S"));
    let document = serde_json::json!({
        "run_id": run.id,
        "collected_at": run.collected_at,
        "results": results,
    });
    tokio::fs::write(&out_path, serde_json::to_string_pretty(&document)?).await?;
    println!("\nresults written to {out_path}");

    Ok(())
}
