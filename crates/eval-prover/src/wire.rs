//! The public-signal shape each circuit's proof carries, independent of any
//! one backend.

use eval_field::Field;
use eval_types::Groth16ProofWire;

/// A subset proof plus the public signals the subset circuit exposes, in
/// the normative order `[claimedScore, numTests, merkleRoot (out),
/// logsCommitment (out), libraryVersion (out), scoringMethod (out)]`.
#[derive(Debug, Clone)]
pub struct SubsetProofResult {
    /// The Groth16 proof itself.
    pub proof: Groth16ProofWire,
    /// Public output: root of the padded subset tree.
    pub merkle_root: Field,
    /// Public input: the subset's claimed integer score sum.
    pub claimed_score: u64,
    /// Public input: the subset size, `k`.
    pub num_tests: usize,
    /// Public output: `Poseidon1(executionLogsHash)`.
    pub logs_commitment: Field,
    /// Public output: `Poseidon1(libraryCodeHash)`.
    pub library_version: Field,
    /// Public output: `Poseidon1(scoringMethodHash)`.
    pub scoring_method: Field,
}

/// A full-dataset proof plus the public signals the full circuit exposes,
/// in the normative order `[merkleRoot, claimedScore, numTests,
/// subsetMerkleRoot, subsetClaimedScore, numSubset, logsCommitment (out),
/// libraryVersion (out), scoringMethod (out)]`.
#[derive(Debug, Clone)]
pub struct FullProofResult {
    /// The Groth16 proof itself.
    pub proof: Groth16ProofWire,
    /// Public input: root of the full-dataset tree.
    pub merkle_root: Field,
    /// Public input: the batch's claimed integer score sum.
    pub claimed_score: u64,
    /// Public input: the batch size, `n`.
    pub num_tests: usize,
    /// Public input: the subset root, pinned from the subset proof.
    pub subset_merkle_root: Field,
    /// Public input: the subset claimed score, pinned from the subset proof.
    pub subset_claimed_score: u64,
    /// Public input: the subset size, `k`.
    pub num_subset: usize,
    /// Public output: `Poseidon1(executionLogsHash)`.
    pub logs_commitment: Field,
    /// Public output: `Poseidon1(libraryCodeHash)`.
    pub library_version: Field,
    /// Public output: `Poseidon1(scoringMethodHash)`.
    pub scoring_method: Field,
}
