//! The async trait the orchestrator drives to obtain proofs. Concrete
//! implementations (a circom/snarkjs subprocess, an in-process arkworks
//! prover, a remote proving service) live outside this crate; only the
//! contract and the native placeholder live here.

use async_trait::async_trait;
use eval_types::EvalError;
use eval_witness::{FullWitness, SubsetWitness};

use crate::wire::{FullProofResult, SubsetProofResult};

/// Produces Groth16 proofs for the two circuits from assembled witnesses.
/// The prover may suspend for an arbitrary duration (it is typically an
/// external process or service); the orchestrator's cancellation token
/// bounds both calls.
#[async_trait]
pub trait ProverBackend: Send + Sync {
    /// Proves the subset circuit.
    async fn prove_subset(&self, witness: &SubsetWitness) -> Result<SubsetProofResult, EvalError>;

    /// Proves the full-dataset circuit. Called only after a subset proof
    /// exists; `witness.subset_merkle_root`/`subset_claimed_score` are
    /// already pinned to that proof's public outputs.
    async fn prove_full(&self, witness: &FullWitness) -> Result<FullProofResult, EvalError>;
}

/// Wraps a [`ProverBackend`] with a bound on concurrent invocations, so a
/// process-wide prover pool (e.g. a fixed number of subprocess workers)
/// isn't oversubscribed by concurrent `run_and_prove` calls.
pub struct BoundedProver<P> {
    inner: P,
    permits: tokio::sync::Semaphore,
}

impl<P: ProverBackend> BoundedProver<P> {
    /// Wraps `inner`, allowing at most `max_concurrent` in-flight proof
    /// requests (subset and full calls share the same budget).
    #[must_use]
    pub fn new(inner: P, max_concurrent: usize) -> Self {
        BoundedProver {
            inner,
            permits: tokio::sync::Semaphore::new(max_concurrent),
        }
    }
}

#[async_trait]
impl<P: ProverBackend> ProverBackend for BoundedProver<P> {
    async fn prove_subset(&self, witness: &SubsetWitness) -> Result<SubsetProofResult, EvalError> {
        let _permit = self.permits.acquire().await.map_err(|err| EvalError::ProverInvocationError {
            message: format!("prover concurrency limiter closed: {err}"),
        })?;
        self.inner.prove_subset(witness).await
    }

    async fn prove_full(&self, witness: &FullWitness) -> Result<FullProofResult, EvalError> {
        let _permit = self.permits.acquire().await.map_err(|err| EvalError::ProverInvocationError {
            message: format!("prover concurrency limiter closed: {err}"),
        })?;
        self.inner.prove_full(witness).await
    }
}
