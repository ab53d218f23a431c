//! Deterministic selection of the public subset disclosed alongside a proof
//! bundle: a seeded, reseeding SHA-256 walk over the batch's sorted ids.

use std::collections::BTreeSet;

use eval_types::{EvalError, Selection};
use sha2::{Digest, Sha256};

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "ceil() of a percentage-times-count is always a small non-negative integer here"
)]
fn ceil_to_usize(value: f64) -> usize {
    if value <= 0.0 {
        0
    } else {
        value.ceil() as usize
    }
}

/// The number of tests to disclose: `max(minimum_public, ceil(public_percentage * n))`,
/// capped at `n`.
#[must_use]
pub fn public_subset_size(n: usize, public_percentage: f64, minimum_public: usize) -> usize {
    if n == 0 {
        return 0;
    }
    #[allow(clippy::cast_precision_loss, reason = "n is a small batch size, not a precision-sensitive quantity")]
    let raw = ceil_to_usize(public_percentage * n as f64);
    raw.max(minimum_public).min(n)
}

fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().saturating_mul(2));
    for byte in bytes {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

/// Deterministically selects the public subset of a batch identified by
/// `ids`, given the ordering-independent id multiset. Two batches with the
/// same ids (in any order) select the same subset.
pub fn select_public_subset(
    ids: &[String],
    public_percentage: f64,
    minimum_public: usize,
) -> Result<Selection, EvalError> {
    let n = ids.len();
    if n == 0 {
        return Err(EvalError::InvalidBatch {
            message: "cannot select a public subset from an empty batch".to_string(),
        });
    }

    let k = public_subset_size(n, public_percentage, minimum_public);

    let mut sorted_ids: Vec<&str> = ids.iter().map(String::as_str).collect();
    sorted_ids.sort_unstable();
    let joined = sorted_ids.join("|");

    let seed0 = Sha256::digest(joined.as_bytes());
    let seed_hex = hex_encode(&seed0);

    let mut selected = BTreeSet::new();
    let mut current: Vec<u8> = seed0.to_vec();
    while selected.len() < k {
        current = Sha256::digest(&current).to_vec();
        let first_four: [u8; 4] = current[..4].try_into().expect("digest is at least 4 bytes");
        let idx = (u32::from_be_bytes(first_four) as usize) % n;
        selected.insert(idx);
    }

    Ok(Selection {
        public_indices: selected.into_iter().collect(),
        seed: seed_hex,
    })
}

/// Recomputes the selection for `ids` and checks it matches `claimed`.
pub fn verify_selection(
    ids: &[String],
    claimed: &Selection,
    public_percentage: f64,
    minimum_public: usize,
) -> Result<bool, EvalError> {
    let recomputed = select_public_subset(ids, public_percentage, minimum_public)?;
    Ok(recomputed.public_indices == claimed.public_indices && recomputed.seed == claimed.seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("test-{i}")).collect()
    }

    #[test]
    fn selection_count_matches_formula() {
        let selection = select_public_subset(&ids(3), 0.05, 1).expect("selection should succeed");
        assert_eq!(selection.public_indices.len(), 1);

        let selection = select_public_subset(&ids(100), 0.05, 1).expect("selection should succeed");
        assert_eq!(selection.public_indices.len(), 5);
    }

    #[test]
    fn selection_is_order_independent() {
        let forward = ids(10);
        let mut backward = forward.clone();
        backward.reverse();
        let a = select_public_subset(&forward, 0.05, 1).expect("selection should succeed");
        let b = select_public_subset(&backward, 0.05, 1).expect("selection should succeed");
        assert_eq!(a.public_indices, b.public_indices);
        assert_eq!(a.seed, b.seed);
    }

    #[test]
    fn verify_selection_round_trips() {
        let batch = ids(20);
        let selection = select_public_subset(&batch, 0.05, 1).expect("selection should succeed");
        assert!(verify_selection(&batch, &selection, 0.05, 1).expect("verification should not error"));
    }

    #[test]
    fn verify_selection_rejects_tampering() {
        let batch = ids(20);
        let mut selection = select_public_subset(&batch, 0.05, 1).expect("selection should succeed");
        selection.public_indices.push(19);
        assert!(!verify_selection(&batch, &selection, 0.05, 1).expect("verification should not error"));
    }

    #[test]
    fn empty_batch_is_an_error() {
        assert!(select_public_subset(&[], 0.05, 1).is_err());
    }

    #[test]
    fn minimum_public_floors_small_batches() {
        let selection = select_public_subset(&ids(1), 0.05, 1).expect("selection should succeed");
        assert_eq!(selection.public_indices, vec![0]);
    }
}
