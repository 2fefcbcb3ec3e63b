//! Workflow Demo Harness
//!
//! A thin coordinator for the coder / reviewer / optimizer role
//! rotation. All model inference is delegated to an [`LLMProvider`]
//! backend; this module only owns the prompts, the turn order, and the
//! transcript.

mod config;
mod provider;
mod roles;
mod runner;

pub use config::{WorkflowConfig, WorkflowType};
pub use provider::{LLMProvider, OllamaProvider};
pub use roles::WorkflowRole;
pub use runner::{WorkflowMessage, WorkflowRunner, WorkflowTranscript};
