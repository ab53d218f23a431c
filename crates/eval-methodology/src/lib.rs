//! The three methodology commitments that bind a proof to how it was
//! produced: the execution transcript, the scoring rules, and the library
//! code itself.

mod logs;
mod manifest;
mod scoring;

pub use logs::{execution_logs_hash, sanitise_tool_call, sanitise_transcript};
pub use manifest::{library_code_manifest_hash, library_code_manifest_hash_cached};
pub use scoring::scoring_method_hash;
