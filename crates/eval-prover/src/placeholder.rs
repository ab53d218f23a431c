//! A native, non-cryptographic stand-in for a real Groth16 prover. Computes
//! the same public signals a circuit would produce by recomputing them
//! directly over the witness, and returns a sentinel proof. Useful for
//! wiring and golden-path tests before a real prover backend is plugged in;
//! never treated as a verified proof (the verifier rejects sentinel
//! bundles outright — see `eval-verifier`).

use async_trait::async_trait;
use eval_field::poseidon;
use eval_types::{EvalError, Groth16ProofWire};
use eval_witness::{FullWitness, SubsetWitness};

use crate::backend::ProverBackend;
use crate::wire::{FullProofResult, SubsetProofResult};

fn leaf_hash_at(
    slot: usize,
    test_id_field: &[eval_field::Field],
    prompt_hash: &[eval_field::Field],
    ideal_hash: &[eval_field::Field],
    agent_hash: &[eval_field::Field],
    score: &[eval_field::Field],
) -> Result<eval_field::Field, EvalError> {
    poseidon(&[
        test_id_field[slot],
        prompt_hash[slot],
        ideal_hash[slot],
        agent_hash[slot],
        score[slot],
    ])
}

fn depth_for_capacity(capacity: usize) -> u32 {
    if capacity <= 1 {
        0
    } else {
        capacity.trailing_zeros()
    }
}

/// Recomputes exactly what a circuit would output, without any zero-knowledge
/// guarantee. The returned [`Groth16ProofWire`] is [`Groth16ProofWire::sentinel`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderProver;

#[async_trait]
impl ProverBackend for PlaceholderProver {
    async fn prove_subset(&self, witness: &SubsetWitness) -> Result<SubsetProofResult, EvalError> {
        let capacity = witness.test_id_field.len();
        let mut leaf_hashes = Vec::with_capacity(capacity);
        for slot in 0..capacity {
            leaf_hashes.push(leaf_hash_at(
                slot,
                &witness.test_id_field,
                &witness.prompt_hash,
                &witness.ideal_hash,
                &witness.agent_hash,
                &witness.score,
            )?);
        }
        let merkle_root = eval_merkle::build_root(&leaf_hashes, depth_for_capacity(capacity))?;

        Ok(SubsetProofResult {
            proof: Groth16ProofWire::sentinel(),
            merkle_root,
            claimed_score: witness.claimed_score,
            num_tests: witness.num_tests,
            logs_commitment: poseidon(&[witness.execution_logs_hash])?,
            library_version: poseidon(&[witness.library_code_hash])?,
            scoring_method: poseidon(&[witness.scoring_method_hash])?,
        })
    }

    async fn prove_full(&self, witness: &FullWitness) -> Result<FullProofResult, EvalError> {
        Ok(FullProofResult {
            proof: Groth16ProofWire::sentinel(),
            merkle_root: witness.merkle_root,
            claimed_score: witness.claimed_score,
            num_tests: witness.num_tests,
            subset_merkle_root: witness.subset_merkle_root,
            subset_claimed_score: witness.subset_claimed_score,
            num_subset: witness.num_subset,
            logs_commitment: poseidon(&[witness.execution_logs_hash])?,
            library_version: poseidon(&[witness.library_code_hash])?,
            scoring_method: poseidon(&[witness.scoring_method_hash])?,
        })
    }
}
