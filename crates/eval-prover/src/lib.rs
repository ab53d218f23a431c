//! The collaborator-prover interface: wire types shared by both circuits'
//! public signals, the async [`ProverBackend`] contract a concrete prover
//! implements, a concurrency-bounding wrapper, and a native placeholder for
//! wiring and golden-path tests.

mod backend;
mod placeholder;
mod wire;

pub use backend::{BoundedProver, ProverBackend};
pub use placeholder::PlaceholderProver;
pub use wire::{FullProofResult, SubsetProofResult};
