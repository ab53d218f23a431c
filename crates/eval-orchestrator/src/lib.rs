//! Drives a batch of evaluated tests through the subset-then-full Groth16
//! proof sequence and assembles the resulting [`eval_types::ProofBundle`].

mod cancellation;
mod input;
mod orchestrator;

pub use cancellation::CancellationToken;
pub use input::RunInputs;
pub use orchestrator::Orchestrator;
