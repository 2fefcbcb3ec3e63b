//! Formula-redesign workflow demo.
//!
//! Hands the pipeline's aggregation formula to the three-role workflow
//! (coder drafts a redesign, reviewer tears it apart, optimizer tightens
//! it) against a local Ollama daemon. Purely a demonstration: nothing
//! the agents say feeds back into the production pipeline.

use anyhow::Result;
use recallcast::workflow::{OllamaProvider, WorkflowConfig, WorkflowRunner};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const REDESIGN_TASK: &str = "\
Redesign the approval-rate formula of a recall-vote forecast model.

Current formula:
  approval = sum over age groups of
      population_share_i * sentiment_sensitivity_i * S_i
  scaled by a political-intensity coefficient and clamped to [0,1],
  where S_i is the forum-usage-weighted positive sentiment ratio the
  age group is exposed to (youth: ptt/dcard/mobile01, middle: mostly
  mobile01, elder: news/facebook).

Known criticisms:
  - sensitivity coefficients (1.2 / 1.0 / 0.8) are hand-tuned, not fitted
  - sentiment ratio conflates approval of the recall with general mood
  - no term separates decided voters from persuadable ones

Propose a better formula. Keep every input observable from scraped
forum/news sentiment and published demographics. Define every symbol.";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let provider = Arc::new(OllamaProvider::default());
    let runner = WorkflowRunner::new(provider, WorkflowConfig::default());

    let transcript = runner.run(REDESIGN_TASK).await?;

    for message in &transcript.messages {
        println!("\n{}", "─".repeat(60));
        println!("[round {} · {}]", message.round, message.role);
        println!("{}", message.content);
    }
    println!("\n{}", "─".repeat(60));
    println!(
        "{} messages, terminated_early={}",
        transcript.messages.len(),
        transcript.terminated_early
    );

    Ok(())
}
