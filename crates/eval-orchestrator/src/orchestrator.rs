//! The dual-proof sequence: selection, subset proof, full proof, bundle
//! assembly. Subset proof is produced strictly before full proof, since the
//! full circuit's `subsetMerkleRoot` input is pinned from the subset proof's
//! public output.

use std::sync::Arc;

use eval_field::field_to_decimal;
use eval_methodology::{execution_logs_hash, library_code_manifest_hash_cached, scoring_method_hash};
use eval_prover::{PlaceholderProver, ProverBackend};
use eval_selector::select_public_subset;
use eval_types::{Aggregates, Commitments, Config, EvalError, ProofBundle, ScoreValue, TestRecord};
use eval_witness::{assemble_full_witness, assemble_subset_witness, reconcile_scores, FullWitnessInputs, MethodologyFields};
use tracing::Instrument;

use crate::cancellation::CancellationToken;
use crate::input::RunInputs;

/// Drives a batch through both Groth16 circuits and assembles the resulting
/// [`ProofBundle`]. One instance per concurrent run; holds no mutable state
/// beyond its configuration and prover handle.
pub struct Orchestrator {
    config: Config,
    prover: Arc<dyn ProverBackend>,
}

fn validate_batch(records: &[TestRecord], max_tests: usize) -> Result<(), EvalError> {
    if records.is_empty() {
        return Err(EvalError::InvalidBatch {
            message: "batch must contain at least one test record".to_string(),
        });
    }
    if records.len() > max_tests {
        return Err(EvalError::InvalidBatch {
            message: format!("batch size {} exceeds max_tests {max_tests}", records.len()),
        });
    }
    let mut seen = std::collections::HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id.as_str()) {
            return Err(EvalError::InvalidBatch {
                message: format!("duplicate test id: {}", record.id),
            });
        }
    }
    Ok(())
}

fn apply_reconciliation(records: &[TestRecord], claimed_total: u64) -> Result<Vec<TestRecord>, EvalError> {
    let raw_scores: Vec<u32> = records.iter().map(TestRecord::normalised_score).collect();
    let reconciled = reconcile_scores(&raw_scores, claimed_total)?;
    Ok(records
        .iter()
        .zip(reconciled)
        .map(|(record, score)| TestRecord {
            score: ScoreValue::Number(f64::from(score)),
            ..record.clone()
        })
        .collect())
}

impl Orchestrator {
    /// Validates `config` and builds an orchestrator around it and the
    /// prover backend that will receive both circuits' witnesses.
    pub fn new(config: Config, prover: Arc<dyn ProverBackend>) -> Result<Self, EvalError> {
        config.validate()?;
        Ok(Orchestrator { config, prover })
    }

    /// Runs the full sequence: normalise, select, build and prove the subset
    /// witness, build and prove the full witness (pinning the subset proof's
    /// outputs), assemble the bundle.
    ///
    /// `cancel` is polled before each prover invocation; if it fires mid-call
    /// the run aborts with [`EvalError::ProverInvocationError`].
    pub async fn run_and_prove(
        &self,
        records: &[TestRecord],
        inputs: RunInputs,
        mut cancel: CancellationToken,
    ) -> Result<ProofBundle, EvalError> {
        validate_batch(records, self.config.max_tests)?;

        let records = match inputs.claimed_total_override {
            Some(total) => apply_reconciliation(records, total)?,
            None => records.to_vec(),
        };

        let methodology = MethodologyFields {
            execution_logs_hash: execution_logs_hash(&inputs.execution_transcript),
            library_code_hash: library_code_manifest_hash_cached(&inputs.library_root)?,
            scoring_method_hash: scoring_method_hash(&inputs.scoring_descriptors),
        };

        let ids: Vec<String> = records.iter().map(|r| r.id.clone()).collect();
        let selection = select_public_subset(&ids, self.config.public_percentage, self.config.minimum_public)?;
        let n = records.len();
        let k = selection.public_indices.len();
        tracing::info!(n, k, seed = %selection.seed, "selected public subset");

        let subset_witness = assemble_subset_witness(&records, &selection.public_indices, self.config.max_subset, methodology)?;

        if cancel.is_cancelled() {
            return Err(EvalError::ProverInvocationError {
                message: "run cancelled before subset proof".to_string(),
            });
        }
        let subset_span = tracing::info_span!("prove_subset", n, k);
        let (subset_result, subset_is_placeholder) = self
            .prove_subset_with_fallback(&subset_witness)
            .instrument(subset_span)
            .await?;
        tracing::info!(root = %field_to_decimal(&subset_result.merkle_root), "subset proof produced");

        let full_witness = assemble_full_witness(FullWitnessInputs {
            records: &records,
            max_tests: self.config.max_tests,
            full_depth: self.config.full_depth,
            max_subset: self.config.max_subset,
            subset_depth: self.config.subset_depth,
            subset_indices: &selection.public_indices,
            subset_merkle_root: subset_result.merkle_root,
            subset_claimed_score: subset_result.claimed_score,
            methodology,
        })?;

        if cancel.is_cancelled() {
            return Err(EvalError::ProverInvocationError {
                message: "run cancelled before full proof".to_string(),
            });
        }
        let full_span = tracing::info_span!("prove_full", n, k);
        let (full_result, full_is_placeholder) = self
            .prove_full_with_fallback(&full_witness)
            .instrument(full_span)
            .await?;
        tracing::info!(root = %field_to_decimal(&full_result.merkle_root), "full proof produced");

        if full_result.library_version != subset_result.library_version
            || full_result.scoring_method != subset_result.scoring_method
        {
            return Err(EvalError::CircuitInputOutOfRange {
                message: "subset and full proofs disagree on methodology commitments".to_string(),
            });
        }

        let is_placeholder = subset_is_placeholder || full_is_placeholder;

        let commitments = Commitments {
            full_root: field_to_decimal(&full_result.merkle_root),
            subset_root: field_to_decimal(&subset_result.merkle_root),
            logs_commitment: field_to_decimal(&full_result.logs_commitment),
            library_version: field_to_decimal(&full_result.library_version),
            scoring_method: field_to_decimal(&full_result.scoring_method),
        };

        #[allow(clippy::cast_precision_loss, reason = "reporting-only mean, not a circuit input")]
        let aggregates = Aggregates {
            full_sum: full_result.claimed_score.to_string(),
            subset_sum: subset_result.claimed_score.to_string(),
            n,
            k,
            mean_full: full_result.claimed_score as f64 / n as f64,
            mean_subset: subset_result.claimed_score as f64 / k as f64,
        };

        Ok(ProofBundle {
            full_proof: full_result.proof,
            subset_proof: subset_result.proof,
            commitments,
            aggregates,
            public_indices: selection.public_indices,
            is_placeholder,
        })
    }

    async fn prove_subset_with_fallback(
        &self,
        witness: &eval_witness::SubsetWitness,
    ) -> Result<(eval_prover::SubsetProofResult, bool), EvalError> {
        match self.prover.prove_subset(witness).await {
            Ok(result) => Ok((result, false)),
            Err(err) if self.config.allow_placeholder => {
                tracing::warn!(error = %err, "subset prover failed, falling back to placeholder");
                Ok((PlaceholderProver.prove_subset(witness).await?, true))
            }
            Err(err) => Err(err),
        }
    }

    async fn prove_full_with_fallback(
        &self,
        witness: &eval_witness::FullWitness,
    ) -> Result<(eval_prover::FullProofResult, bool), EvalError> {
        match self.prover.prove_full(witness).await {
            Ok(result) => Ok((result, false)),
            Err(err) if self.config.allow_placeholder => {
                tracing::warn!(error = %err, "full prover failed, falling back to placeholder");
                Ok((PlaceholderProver.prove_full(witness).await?, true))
            }
            Err(err) => Err(err),
        }
    }
}
