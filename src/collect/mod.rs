//! Collector Boundary
//!
//! Everything that turns raw scraped text into validated
//! [`crate::signal::SignalSnapshot`]s: the rule-based sentiment
//! lexicon and the per-source snapshot builder. The scraping clients
//! themselves live outside this repository; they hand batches of text
//! to this module and nothing else touches the pipeline.

mod lexicon;
mod snapshots;

pub use lexicon::{RecallStance, SentimentLabel, SentimentLexicon, TextSentiment};
pub use snapshots::{CollectionRun, SnapshotBuilder};
