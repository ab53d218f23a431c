//! Everything `run_and_prove` needs beyond the validated batch itself.

use std::path::PathBuf;

use eval_types::{ScoringDescriptor, ToolCallRecord};

/// The methodology material a run commits to, alongside the batch of
/// [`eval_types::TestRecord`]s themselves.
#[derive(Debug, Clone)]
pub struct RunInputs {
    /// The sanitised-on-ingest execution transcript (tool calls made while
    /// producing the batch's agent outputs).
    pub execution_transcript: Vec<ToolCallRecord>,
    /// The scoring rule bound to each test.
    pub scoring_descriptors: Vec<ScoringDescriptor>,
    /// Root of the library checkout whose manifest is hashed into
    /// `libraryVersion`.
    pub library_root: PathBuf,
    /// If set, the batch's normalised scores are reconciled to sum to this
    /// value before witness assembly, rather than using the raw per-record
    /// rounding.
    pub claimed_total_override: Option<u64>,
}
