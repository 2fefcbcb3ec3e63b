use super::config::{WorkflowConfig, WorkflowType};
use super::provider::LLMProvider;
use super::roles::WorkflowRole;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// One message in a workflow transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowMessage {
    pub role: WorkflowRole,
    pub round: usize,
    pub content: String,
}

/// Full record of one workflow run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowTranscript {
    pub task: String,
    pub messages: Vec<WorkflowMessage>,
    pub rounds_completed: usize,
    /// True when a role emitted the termination marker before the
    /// round budget ran out.
    pub terminated_early: bool,
}

/// Drives the three-role rotation over a shared transcript. All actual
/// model work is delegated to the provider.
pub struct WorkflowRunner {
    provider: Arc<dyn LLMProvider>,
    config: WorkflowConfig,
}

impl WorkflowRunner {
    pub fn new(provider: Arc<dyn LLMProvider>, config: WorkflowConfig) -> Self {
        Self { provider, config }
    }

    pub async fn run(&self, task: &str) -> Result<WorkflowTranscript> {
        info!(workflow = ?self.config.workflow_type, "starting workflow");
        match self.config.workflow_type {
            WorkflowType::Sequential => self.run_rounds(task, 1).await,
            WorkflowType::RoundRobin => self.run_rounds(task, self.config.max_rounds).await,
            WorkflowType::Hierarchical => self.run_hierarchical(task).await,
        }
    }

    async fn run_rounds(&self, task: &str, rounds: usize) -> Result<WorkflowTranscript> {
        let mut transcript = WorkflowTranscript {
            task: task.to_string(),
            messages: Vec::new(),
            rounds_completed: 0,
            terminated_early: false,
        };

        'rounds: for round in 0..rounds {
            for role in WorkflowRole::ROTATION {
                let content = self.step(role, task, &transcript).await?;
                let terminated = content.contains(&self.config.termination_marker);
                transcript.messages.push(WorkflowMessage {
                    role,
                    round,
                    content,
                });
                if terminated {
                    transcript.terminated_early = true;
                    break 'rounds;
                }
            }
            transcript.rounds_completed = round + 1;
        }

        info!(
            messages = transcript.messages.len(),
            terminated_early = transcript.terminated_early,
            "workflow finished"
        );
        Ok(transcript)
    }

    /// Coder drafts; reviewer and optimizer each respond to the draft
    /// alone; coder integrates the feedback.
    async fn run_hierarchical(&self, task: &str) -> Result<WorkflowTranscript> {
        let mut transcript = WorkflowTranscript {
            task: task.to_string(),
            messages: Vec::new(),
            rounds_completed: 0,
            terminated_early: false,
        };

        let draft = self.step(WorkflowRole::Coder, task, &transcript).await?;
        transcript.messages.push(WorkflowMessage {
            role: WorkflowRole::Coder,
            round: 0,
            content: draft,
        });

        for role in [WorkflowRole::Reviewer, WorkflowRole::Optimizer] {
            let content = self.step(role, task, &transcript).await?;
            transcript.messages.push(WorkflowMessage {
                role,
                round: 1,
                content,
            });
        }

        let integrated = self.step(WorkflowRole::Coder, task, &transcript).await?;
        transcript.terminated_early = integrated.contains(&self.config.termination_marker);
        transcript.messages.push(WorkflowMessage {
            role: WorkflowRole::Coder,
            round: 2,
            content: integrated,
        });
        transcript.rounds_completed = 2;

        Ok(transcript)
    }

    async fn step(
        &self,
        role: WorkflowRole,
        task: &str,
        transcript: &WorkflowTranscript,
    ) -> Result<String> {
        let model = self
            .config
            .model_override
            .as_deref()
            .unwrap_or_else(|| role.default_model());

        let prompt = render_prompt(task, transcript);
        debug!(%role, model, "dispatching workflow step");
        self.provider
            .generate(model, prompt, Some(role.system_prompt()))
            .await
    }
}

/// Task statement plus the conversation so far, oldest first.
fn render_prompt(task: &str, transcript: &WorkflowTranscript) -> String {
    let mut prompt = format!("TASK:\n{task}\n");
    if !transcript.messages.is_empty() {
        prompt.push_str("\nTRANSCRIPT SO FAR:\n");
        for message in &transcript.messages {
            prompt.push_str(&format!("[{}] {}\n", message.role, message.content));
        }
    }
    prompt.push_str("\nRespond in your role.");
    prompt
}
