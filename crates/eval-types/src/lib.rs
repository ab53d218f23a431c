//! Shared data model for the evaluation commitment engine: the test record
//! vocabulary, the structured error type, run configuration, the provider
//! traits the orchestrator drives, and the terminal proof bundle shape.
//!
//! This crate holds plain data and trait contracts only; every algorithm
//! lives in a downstream crate (`eval-field`, `eval-merkle`, `eval-witness`,
//! ...) that depends on it.

mod bundle;
mod config;
mod error;
mod log;
mod providers;
mod record;
mod scoring;

pub use bundle::{Aggregates, Commitments, Groth16ProofWire, MethodologyCommitments, ProofBundle, Selection};
pub use config::{Config, ProverArtefactPaths};
pub use error::{EvalError, EvalErrorKind};
pub use log::{InMemoryLogSink, LogSink, ToolCallRecord};
pub use providers::{AgentProvider, ScoreProvider};
pub use record::{ScoreValue, ScoringKind, TestRecord};
pub use scoring::{ScoreInput, ScoreOutcome, ScoringDescriptor};
