use serde::{Deserialize, Serialize};

/// How the roles take turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowType {
    /// One pass through the rotation, then stop.
    Sequential,
    /// Keep rotating until the termination marker or the round budget.
    RoundRobin,
    /// Coder drafts, reviewer and optimizer respond to the draft,
    /// coder integrates.
    Hierarchical,
}

/// Knobs for one workflow run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowConfig {
    pub workflow_type: WorkflowType,
    /// Upper bound on full rotations (round-robin only).
    pub max_rounds: usize,
    /// A message containing this marker ends the run.
    pub termination_marker: String,
    /// Use one model for every role instead of the per-role defaults.
    pub model_override: Option<String>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            workflow_type: WorkflowType::RoundRobin,
            max_rounds: 10,
            termination_marker: "TERMINATE".to_string(),
            model_override: None,
        }
    }
}
