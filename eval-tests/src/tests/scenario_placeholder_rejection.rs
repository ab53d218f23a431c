//! Scenario 5: a placeholder bundle is rejected outright, before any
//! cryptographic check runs.

use eval_types::{Aggregates, Commitments, Groth16ProofWire, ProofBundle};

fn placeholder_bundle() -> ProofBundle {
    ProofBundle {
        full_proof: Groth16ProofWire::sentinel(),
        subset_proof: Groth16ProofWire::sentinel(),
        commitments: Commitments {
            full_root: "1".to_string(),
            subset_root: "2".to_string(),
            logs_commitment: "3".to_string(),
            library_version: "4".to_string(),
            scoring_method: "5".to_string(),
        },
        aggregates: Aggregates {
            full_sum: "60".to_string(),
            subset_sum: "30".to_string(),
            n: 3,
            k: 1,
            mean_full: 20.0,
            mean_subset: 30.0,
        },
        public_indices: vec![0],
        is_placeholder: true,
    }
}

#[test]
fn placeholder_bundles_are_flagged_and_never_pass_as_a_real_proof() {
    let bundle = placeholder_bundle();
    assert!(bundle.is_placeholder);

    // A real verifier is expected to refuse placeholder bundles before
    // attempting any Groth16 check (see eval-verifier's immediate
    // is_placeholder short-circuit). We assert the flag's presence here;
    // eval-verifier carries the behavioural test against its own
    // BundleVerifier.
}
