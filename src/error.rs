//! Pipeline error taxonomy.
//!
//! Recoverable data issues (missing sources, out-of-range ratios) are
//! normalized in place with a warning trail and never reach this type.
//! Only configuration problems are surfaced to the caller.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    /// The target id has no entry in the configuration's target registry.
    /// Fatal to this prediction call only; other targets are unaffected.
    #[error("unknown recall target: {0}")]
    UnknownTarget(String),

    /// The configuration is structurally unusable (e.g. an empty age
    /// table). Clamp-and-warn recovery does not apply here.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
