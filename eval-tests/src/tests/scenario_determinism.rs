//! Scenario 3: running `run_and_prove` twice over identical inputs produces
//! byte-identical bundles in every commitment field.

use super::utils::{init_tracing, library_root, numeric_record, orchestrator, run_inputs};

#[tokio::test]
async fn rerunning_with_identical_inputs_is_bit_identical() {
    init_tracing();
    let root_dir = library_root("determinism");
    let records = vec![
        numeric_record("a", 10),
        numeric_record("b", 20),
        numeric_record("c", 30),
    ];
    let orchestrator = orchestrator();

    let first = orchestrator
        .run_and_prove(
            &records,
            run_inputs(&records, vec![], root_dir.clone()),
            super::utils::fresh_cancellation(),
        )
        .await
        .expect("first run should succeed");
    let second = orchestrator
        .run_and_prove(
            &records,
            run_inputs(&records, vec![], root_dir.clone()),
            super::utils::fresh_cancellation(),
        )
        .await
        .expect("second run should succeed");

    assert_eq!(first.commitments.full_root, second.commitments.full_root);
    assert_eq!(first.commitments.subset_root, second.commitments.subset_root);
    assert_eq!(first.commitments.logs_commitment, second.commitments.logs_commitment);
    assert_eq!(first.commitments.library_version, second.commitments.library_version);
    assert_eq!(first.commitments.scoring_method, second.commitments.scoring_method);
    assert_eq!(first.aggregates.full_sum, second.aggregates.full_sum);
    assert_eq!(first.public_indices, second.public_indices);

    std::fs::remove_dir_all(&root_dir).ok();
}
