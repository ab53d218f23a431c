//! The subset and full witness structures and their assembly from a batch of
//! test records.

use eval_field::Field;
use eval_merkle::{build_levels, path_for_index, root_from_levels};
use eval_record::{leaf_fields, LeafFields};
use eval_types::{EvalError, TestRecord};

use crate::methodology::MethodologyFields;

/// Private and public inputs for the subset circuit.
#[derive(Debug, Clone)]
pub struct SubsetWitness {
    /// Per-slot canonical id field, padded to `max_subset` with zero.
    pub test_id_field: Vec<Field>,
    /// Per-slot prompt hash.
    pub prompt_hash: Vec<Field>,
    /// Per-slot ideal-output hash.
    pub ideal_hash: Vec<Field>,
    /// Per-slot agent-output hash.
    pub agent_hash: Vec<Field>,
    /// Per-slot normalised score.
    pub score: Vec<Field>,
    /// Sanitised execution-log commitment (private; re-hashed to a public output).
    pub execution_logs_hash: Field,
    /// Library-code manifest commitment (private; re-hashed to a public output).
    pub library_code_hash: Field,
    /// Scoring-method commitment (private; re-hashed to a public output).
    pub scoring_method_hash: Field,
    /// Number of real (non-padding) slots.
    pub num_tests_private: usize,
    /// Public: the integer sum of the subset's scores.
    pub claimed_score: u64,
    /// Public: the subset size, `k`.
    pub num_tests: usize,
}

/// Private and public inputs for the full-dataset circuit.
#[derive(Debug, Clone)]
pub struct FullWitness {
    /// Per-slot canonical id field, padded to `max_tests` with zero.
    pub test_id_field: Vec<Field>,
    /// Per-slot prompt hash.
    pub prompt_hash: Vec<Field>,
    /// Per-slot ideal-output hash.
    pub ideal_hash: Vec<Field>,
    /// Per-slot agent-output hash.
    pub agent_hash: Vec<Field>,
    /// Per-slot normalised score.
    pub score: Vec<Field>,
    /// Per-slot authentication path siblings, leaf-to-root.
    pub auth_siblings: Vec<Vec<Field>>,
    /// Per-slot authentication path direction bits, leaf-to-root.
    pub auth_bits: Vec<Vec<u8>>,
    /// Sanitised execution-log commitment (private; re-hashed to a public output).
    pub execution_logs_hash: Field,
    /// Library-code manifest commitment (private; re-hashed to a public output).
    pub library_code_hash: Field,
    /// Scoring-method commitment (private; re-hashed to a public output).
    pub scoring_method_hash: Field,
    /// The padded subset scores, private, used to reconstruct `subset_merkle_root_private`.
    pub subset_scores: Vec<Field>,
    /// The original (pre-padding) indices making up the public subset.
    pub subset_indices: Vec<usize>,
    /// Number of real (non-padding) subset slots.
    pub num_subset_private: usize,
    /// The subset root recomputed here from private leaves; must equal
    /// `subset_merkle_root` (the public input pinned from the subset proof).
    pub subset_merkle_root_private: Field,
    /// The subset score sum recomputed here; must equal `subset_claimed_score`.
    pub subset_claimed_score_private: u64,
    /// Public: root of the full-dataset tree.
    pub merkle_root: Field,
    /// Public: the integer sum of every score in the batch.
    pub claimed_score: u64,
    /// Public: the batch size, `n`.
    pub num_tests: usize,
    /// Public: the subset root, pinned from the subset proof's output.
    pub subset_merkle_root: Field,
    /// Public: the subset claimed score, pinned from the subset proof's output.
    pub subset_claimed_score: u64,
    /// Public: the subset size, `k`.
    pub num_subset: usize,
}

fn leaves_for(records: &[TestRecord]) -> Vec<LeafFields> {
    records.iter().map(leaf_fields).collect()
}

fn field_column(leaves: &[LeafFields], pick: impl Fn(&LeafFields) -> Field) -> Vec<Field> {
    leaves.iter().map(pick).collect()
}

/// Builds the subset witness over `records[selected_indices]`, padded to
/// `max_subset`. `selected_indices` need not be sorted; output slot order
/// follows input order.
pub fn assemble_subset_witness(
    records: &[TestRecord],
    selected_indices: &[usize],
    max_subset: usize,
    methodology: MethodologyFields,
) -> Result<SubsetWitness, EvalError> {
    let k = selected_indices.len();
    if k == 0 {
        return Err(EvalError::InvalidBatch {
            message: "the public subset selection is empty".to_string(),
        });
    }
    if k > max_subset {
        return Err(EvalError::CircuitInputOutOfRange {
            message: format!("subset size {k} exceeds max_subset {max_subset}"),
        });
    }

    let mut leaves = Vec::with_capacity(k);
    let mut scores = Vec::with_capacity(k);
    for &idx in selected_indices {
        let record = records.get(idx).ok_or_else(|| EvalError::InvalidBatch {
            message: format!("selected index {idx} is out of range for a batch of {}", records.len()),
        })?;
        scores.push(record.normalised_score());
        leaves.push(leaf_fields(record));
    }
    leaves.resize(max_subset, LeafFields::zero());

    let claimed_score: u64 = scores.into_iter().map(u64::from).sum();

    Ok(SubsetWitness {
        test_id_field: field_column(&leaves, |l| l.test_id_field),
        prompt_hash: field_column(&leaves, |l| l.prompt_hash),
        ideal_hash: field_column(&leaves, |l| l.ideal_hash),
        agent_hash: field_column(&leaves, |l| l.agent_hash),
        score: field_column(&leaves, |l| l.score),
        execution_logs_hash: methodology.execution_logs_hash,
        library_code_hash: methodology.library_code_hash,
        scoring_method_hash: methodology.scoring_method_hash,
        num_tests_private: k,
        claimed_score,
        num_tests: k,
    })
}

/// Everything [`assemble_full_witness`] needs beyond the batch itself.
#[derive(Debug, Clone)]
pub struct FullWitnessInputs<'a> {
    /// The full, normalised batch.
    pub records: &'a [TestRecord],
    /// Capacity of the full-dataset tree.
    pub max_tests: usize,
    /// Depth of the full-dataset tree.
    pub full_depth: u32,
    /// Capacity of the subset tree (for padding the private reconstruction).
    pub max_subset: usize,
    /// Depth of the subset tree (for recomputing the private subset root).
    pub subset_depth: u32,
    /// The subset indices disclosed by the selector.
    pub subset_indices: &'a [usize],
    /// The subset root, as reported by the already-produced subset proof.
    pub subset_merkle_root: Field,
    /// The subset claimed score, as reported by the subset proof.
    pub subset_claimed_score: u64,
    /// The methodology commitments shared with the subset proof.
    pub methodology: MethodologyFields,
}

/// Builds the full-dataset witness, including the per-slot Merkle
/// authentication paths and the private subset-reconstruction data that lets
/// the circuit bind this proof to the already-produced subset proof.
pub fn assemble_full_witness(inputs: FullWitnessInputs<'_>) -> Result<FullWitness, EvalError> {
    let n = inputs.records.len();
    if n == 0 {
        return Err(EvalError::InvalidBatch {
            message: "cannot build a full witness over an empty batch".to_string(),
        });
    }
    if n > inputs.max_tests {
        return Err(EvalError::CircuitInputOutOfRange {
            message: format!("batch size {n} exceeds max_tests {}", inputs.max_tests),
        });
    }

    let leaves = leaves_for(inputs.records);
    let scores: Vec<u32> = inputs.records.iter().map(TestRecord::normalised_score).collect();
    let claimed_score: u64 = scores.iter().copied().map(u64::from).sum();

    let leaf_hashes: Vec<Field> = leaves
        .iter()
        .map(LeafFields::leaf_hash)
        .collect::<Result<_, _>>()?;
    let levels = build_levels(&leaf_hashes, inputs.full_depth)?;
    let merkle_root = root_from_levels(&levels);
    let padded_capacity = levels.first().map_or(0, Vec::len);

    let mut auth_siblings = Vec::with_capacity(padded_capacity);
    let mut auth_bits = Vec::with_capacity(padded_capacity);
    for slot in 0..padded_capacity {
        let path = path_for_index(&levels, slot);
        auth_siblings.push(path.siblings);
        auth_bits.push(path.bits);
    }

    let mut padded_leaves = leaves.clone();
    padded_leaves.resize(padded_capacity, LeafFields::zero());
    let mut padded_scores = scores.clone();
    padded_scores.resize(padded_capacity, 0);

    let mut subset_leaf_hashes = Vec::with_capacity(inputs.subset_indices.len());
    let mut subset_scores_raw = Vec::with_capacity(inputs.subset_indices.len());
    for &idx in inputs.subset_indices {
        let leaf = leaves.get(idx).ok_or_else(|| EvalError::InvalidBatch {
            message: format!("subset index {idx} is out of range for a batch of {n}"),
        })?;
        subset_leaf_hashes.push(leaf.leaf_hash()?);
        subset_scores_raw.push(scores[idx]);
    }

    let subset_merkle_root_private = eval_merkle::build_root(&subset_leaf_hashes, inputs.subset_depth)?;
    if subset_merkle_root_private != inputs.subset_merkle_root {
        return Err(EvalError::CircuitInputOutOfRange {
            message: "subset root reconstructed from private leaves does not match the subset proof's public output".to_string(),
        });
    }

    let subset_claimed_score_private: u64 = subset_scores_raw.iter().copied().map(u64::from).sum();
    if subset_claimed_score_private != inputs.subset_claimed_score {
        return Err(EvalError::CircuitInputOutOfRange {
            message: "subset score sum reconstructed from private leaves does not match the subset proof's public output".to_string(),
        });
    }

    let num_subset_private = inputs.subset_indices.len();
    let mut subset_scores: Vec<Field> = subset_scores_raw
        .into_iter()
        .map(u64::from)
        .map(eval_field::field_from_u64)
        .collect();
    subset_scores.resize(inputs.max_subset, Field::from(0u64));

    Ok(FullWitness {
        test_id_field: field_column(&padded_leaves, |l| l.test_id_field),
        prompt_hash: field_column(&padded_leaves, |l| l.prompt_hash),
        ideal_hash: field_column(&padded_leaves, |l| l.ideal_hash),
        agent_hash: field_column(&padded_leaves, |l| l.agent_hash),
        score: field_column(&padded_leaves, |l| l.score),
        auth_siblings,
        auth_bits,
        execution_logs_hash: inputs.methodology.execution_logs_hash,
        library_code_hash: inputs.methodology.library_code_hash,
        scoring_method_hash: inputs.methodology.scoring_method_hash,
        subset_scores,
        subset_indices: inputs.subset_indices.to_vec(),
        num_subset_private,
        subset_merkle_root_private,
        subset_claimed_score_private,
        merkle_root,
        claimed_score,
        num_tests: n,
        subset_merkle_root: inputs.subset_merkle_root,
        subset_claimed_score: inputs.subset_claimed_score,
        num_subset: num_subset_private,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use eval_types::{ScoreValue, ScoringKind};

    fn record(id: &str, score: u32) -> TestRecord {
        TestRecord {
            id: id.to_string(),
            prompt: format!("prompt-{id}"),
            ideal_output: format!("ideal-{id}"),
            agent_output: format!("agent-{id}"),
            score: ScoreValue::Number(f64::from(score)),
            scoring_type: ScoringKind::Numeric,
            scoring_criteria: None,
        }
    }

    fn methodology() -> MethodologyFields {
        MethodologyFields {
            execution_logs_hash: eval_field::field_from_u64(1),
            library_code_hash: eval_field::field_from_u64(2),
            scoring_method_hash: eval_field::field_from_u64(3),
        }
    }

    #[test]
    fn subset_witness_claimed_score_is_exact_sum() {
        let records = vec![record("a", 10), record("b", 20), record("c", 30)];
        let witness = assemble_subset_witness(&records, &[0, 2], 4, methodology()).expect("subset witness should assemble");
        assert_eq!(witness.claimed_score, 40);
        assert_eq!(witness.num_tests, 2);
        assert_eq!(witness.num_tests_private, 2);
    }

    #[test]
    fn subset_witness_rejects_oversized_selection() {
        let records = vec![record("a", 10), record("b", 20)];
        assert!(assemble_subset_witness(&records, &[0, 1], 1, methodology()).is_err());
    }

    #[test]
    fn full_witness_binds_matching_subset_root() {
        let records = vec![record("a", 10), record("b", 20), record("c", 30), record("d", 40)];
        let subset = assemble_subset_witness(&records, &[1, 3], 4, methodology()).expect("subset witness should assemble");

        let full = assemble_full_witness(FullWitnessInputs {
            records: &records,
            max_tests: 4,
            full_depth: 2,
            max_subset: 4,
            subset_depth: 2,
            subset_indices: &[1, 3],
            subset_merkle_root: eval_merkle::build_root(
                &[
                    eval_record::leaf_hash(&records[1]).expect("leaf hash should compute"),
                    eval_record::leaf_hash(&records[3]).expect("leaf hash should compute"),
                ],
                2,
            )
            .expect("subset root should build"),
            subset_claimed_score: subset.claimed_score,
            methodology: methodology(),
        })
        .expect("full witness should assemble");

        assert_eq!(full.claimed_score, 100);
        assert_eq!(full.num_tests, 4);
        assert_eq!(full.num_subset, 2);
        assert_eq!(full.auth_siblings.len(), 4);
    }

    #[test]
    fn full_witness_rejects_mismatched_pinned_subset_root() {
        let records = vec![record("a", 10), record("b", 20)];
        let result = assemble_full_witness(FullWitnessInputs {
            records: &records,
            max_tests: 2,
            full_depth: 1,
            max_subset: 2,
            subset_depth: 1,
            subset_indices: &[0],
            subset_merkle_root: eval_field::field_from_u64(999),
            subset_claimed_score: 10,
            methodology: methodology(),
        });
        assert!(result.is_err());
    }
}
