//! A fixed-capacity, power-of-two Merkle tree over the Poseidon2 compression
//! function. Every tree this crate builds pads unused slots with
//! field-zero — the zero-pad rule is the authoritative padding behaviour for
//! both the full-dataset and the subset commitment.

use eval_field::{poseidon, Field};
use eval_types::EvalError;

/// The authentication path for a single leaf: one sibling and one direction
/// bit per level, ordered leaf-to-root. A bit of `1` means the leaf's own
/// node sits on the right at that level (its sibling is to the left).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthPath {
    /// Sibling hash at each level, leaf-to-root.
    pub siblings: Vec<Field>,
    /// Direction bit at each level, leaf-to-root.
    pub bits: Vec<u8>,
}

/// Poseidon2 compression of two children into their parent.
pub fn compress(left: Field, right: Field) -> Result<Field, EvalError> {
    poseidon(&[left, right])
}

fn capacity_for_depth(depth: u32) -> Result<usize, EvalError> {
    1usize.checked_shl(depth).ok_or_else(|| EvalError::CircuitInputOutOfRange {
        message: format!("merkle depth {depth} overflows this platform's capacity"),
    })
}

/// Builds every level of the tree, leaf level first, root level last.
/// `leaves` is padded with field-zero up to `2^depth`; it is an error for
/// `leaves` to already exceed that capacity.
pub fn build_levels(leaves: &[Field], depth: u32) -> Result<Vec<Vec<Field>>, EvalError> {
    let capacity = capacity_for_depth(depth)?;
    if leaves.len() > capacity {
        return Err(EvalError::InvalidBatch {
            message: format!("{} leaves exceed tree capacity {capacity}", leaves.len()),
        });
    }

    let mut level0 = leaves.to_vec();
    level0.resize(capacity, Field::from(0u64));

    let mut levels = Vec::with_capacity(usize::try_from(depth).unwrap_or(usize::MAX).saturating_add(1));
    levels.push(level0);

    for _ in 0..depth {
        let prev = levels.last().expect("at least the leaf level is present");
        let mut next = Vec::with_capacity(prev.len() / 2);
        for pair in prev.chunks_exact(2) {
            next.push(compress(pair[0], pair[1])?);
        }
        levels.push(next);
    }

    Ok(levels)
}

/// The root of an already-built level sequence.
#[must_use]
pub fn root_from_levels(levels: &[Vec<Field>]) -> Field {
    levels
        .last()
        .and_then(|top| top.first())
        .copied()
        .unwrap_or_else(|| Field::from(0u64))
}

/// Builds the tree and returns only its root, skipping path storage. Used to
/// independently cross-check a root reported by the prover.
pub fn build_root(leaves: &[Field], depth: u32) -> Result<Field, EvalError> {
    if leaves.is_empty() {
        return Ok(Field::from(0u64));
    }
    let levels = build_levels(leaves, depth)?;
    Ok(root_from_levels(&levels))
}

/// The authentication path for `index` within an already-built level
/// sequence.
#[must_use]
pub fn path_for_index(levels: &[Vec<Field>], index: usize) -> AuthPath {
    let depth = levels.len().saturating_sub(1);
    let mut siblings = Vec::with_capacity(depth);
    let mut bits = Vec::with_capacity(depth);
    let mut current = index;

    for level in levels.iter().take(depth) {
        let sibling_index = current ^ 1;
        siblings.push(level[sibling_index]);
        bits.push(if current % 2 == 1 { 1 } else { 0 });
        current /= 2;
    }

    AuthPath { siblings, bits }
}

/// Builds the tree and returns its root plus the authentication path for
/// every one of `leaves`' original (pre-padding) positions.
pub fn build_root_and_paths(
    leaves: &[Field],
    depth: u32,
) -> Result<(Field, Vec<AuthPath>), EvalError> {
    if leaves.is_empty() {
        return Ok((Field::from(0u64), Vec::new()));
    }
    let levels = build_levels(leaves, depth)?;
    let root = root_from_levels(&levels);
    let paths = (0..leaves.len()).map(|i| path_for_index(&levels, i)).collect();
    Ok((root, paths))
}

/// Recomputes a root from a leaf and its authentication path, for
/// independent verification outside the circuit.
pub fn root_from_path(leaf: Field, path: &AuthPath) -> Result<Field, EvalError> {
    let mut current = leaf;
    for (sibling, bit) in path.siblings.iter().zip(path.bits.iter()) {
        current = if *bit == 1 {
            compress(*sibling, current)?
        } else {
            compress(current, *sibling)?
        };
    }
    Ok(current)
}
