//! Recallcast
//!
//! A recall-vote forecasting toolkit with:
//! - Deterministic aggregation & prediction pipeline (MECE dimension
//!   scorers, weighted aggregation, statutory threshold evaluation)
//! - Externalized coefficient tables with JSON persistence
//! - Collector-boundary sentiment lexicon and snapshot validation
//! - Seed-controlled synthetic data for demos and tests
//! - A three-role LLM workflow demo harness (coder/reviewer/optimizer)

pub mod collect;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod scoring;
pub mod signal;
pub mod synth;
pub mod workflow;

// Re-exports for convenience
pub use config::{ConfigManager, ModelConfig};
pub use error::PredictError;
pub use pipeline::{Predictor, Verdict};
pub use signal::{DimensionScore, PredictionResult, RecallTarget, SignalSnapshot};
