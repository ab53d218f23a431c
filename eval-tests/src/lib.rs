//! Integration tests for the evaluation commitment engine.
//!
//! This crate bridges the gap between:
//! - the leaf crates (`eval-field`, `eval-merkle`, `eval-witness`, ...) that
//!   each cover one stage of the pipeline in isolation
//! - `eval-orchestrator`, which drives all of them together against a
//!   `ProverBackend`

#[cfg(test)]
mod tests;
