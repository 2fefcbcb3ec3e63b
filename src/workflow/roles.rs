use serde::{Deserialize, Serialize};

/// The three demo roles, rotated over a shared transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowRole {
    Coder,
    Reviewer,
    Optimizer,
}

impl WorkflowRole {
    /// Canonical rotation order.
    pub const ROTATION: [WorkflowRole; 3] = [
        WorkflowRole::Coder,
        WorkflowRole::Reviewer,
        WorkflowRole::Optimizer,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WorkflowRole::Coder => "coder",
            WorkflowRole::Reviewer => "reviewer",
            WorkflowRole::Optimizer => "optimizer",
        }
    }

    /// Get the default model for this role.
    pub fn default_model(&self) -> &'static str {
        match self {
            WorkflowRole::Coder => "qwen2.5-coder:7b",
            WorkflowRole::Reviewer => "deepseek-r1:8b",
            WorkflowRole::Optimizer => "qwen3:8b",
        }
    }

    /// System prompt for this role.
    pub fn system_prompt(&self) -> String {
        match self {
            WorkflowRole::Coder =>
                "You are a senior engineer responsible for drafting solutions. \
                 Produce a complete, concrete proposal for the task: working code or a \
                 fully specified formula, with the reasoning behind each decision. \
                 Handle edge cases explicitly. Do not hand-wave: every quantity you \
                 introduce must be defined. \
                 When the task is fully solved and reviewed, end your message with TERMINATE.".to_string(),

            WorkflowRole::Reviewer =>
                "You are a strict technical reviewer. Examine the latest proposal in the \
                 transcript for correctness, boundary conditions, and unstated assumptions. \
                 Rate it 1-10, list concrete defects ordered by severity, and demand fixes \
                 for anything that would produce wrong results. Never accept an estimate \
                 whose inputs or bounds are undefined.".to_string(),

            WorkflowRole::Optimizer =>
                "You are an optimization specialist. Take the reviewed proposal and make it \
                 tighter: simplify redundant terms, improve numerical stability, and call out \
                 anything that can be precomputed or tabulated. Preserve behavior exactly \
                 unless the reviewer flagged it as wrong. Summarize the delta you applied.".to_string(),
        }
    }
}

impl std::fmt::Display for WorkflowRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
