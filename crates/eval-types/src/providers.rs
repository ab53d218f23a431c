//! The two external capability sets the orchestrator drives: running the
//! agent under evaluation, and scoring its outputs. Both are single-method
//! async traits so any concrete SDK integration is a thin adapter.

use async_trait::async_trait;

use crate::error::EvalError;
use crate::log::LogSink;
use crate::scoring::{ScoreInput, ScoreOutcome};

/// Runs the agent under evaluation against a single prompt.
#[async_trait]
pub trait AgentProvider: Send + Sync {
    /// Executes `prompt`, logging every tool call it makes to `ctx`, and
    /// returns the agent's final output.
    async fn execute(&self, prompt: &str, ctx: &mut dyn LogSink) -> Result<String, EvalError>;
}

/// Scores a single agent output against its reference.
#[async_trait]
pub trait ScoreProvider: Send + Sync {
    /// Scores `input`, returning the outcome in the vocabulary
    /// `input.scoring_type` calls for.
    async fn score(&self, input: ScoreInput) -> Result<ScoreOutcome, EvalError>;
}
