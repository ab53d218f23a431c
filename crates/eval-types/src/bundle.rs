//! The terminal artefacts produced by a run: the deterministic subset
//! selection, the methodology commitments, and the final proof bundle.

use serde::{Deserialize, Serialize};

/// The deterministically chosen public subset of a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// Sorted, zero-based indices into the normalised batch.
    pub public_indices: Vec<usize>,
    /// The SHA-256 seed the selection was derived from, hex-encoded.
    pub seed: String,
}

/// The three hash commitments binding a proof to its methodology: how the
/// agent was run, how it was scored, and what code computed the proof.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodologyCommitments {
    /// `sha256_field` of the sanitised, canonicalised execution transcript.
    pub execution_logs_hash: String,
    /// `sha256_field` of the canonicalised per-test scoring descriptors.
    pub scoring_method_hash: String,
    /// `sha256_field` of the sorted `{path, hash}` library manifest.
    pub library_code_hash: String,
}

/// A Groth16 proof, BN254 curve points encoded as decimal-string field
/// elements (never hex) per the wire convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Groth16ProofWire {
    /// The `A` group element, `(x, y)`.
    pub a: [String; 2],
    /// The `B` group element, `((x_c0, x_c1), (y_c0, y_c1))`.
    pub b: [[String; 2]; 2],
    /// The `C` group element, `(x, y)`.
    pub c: [String; 2],
}

impl Groth16ProofWire {
    /// A syntactically well-formed but cryptographically meaningless proof,
    /// used by placeholder bundles. Every coordinate is the field-zero
    /// decimal string.
    #[must_use]
    pub fn sentinel() -> Self {
        let zero = || "0".to_string();
        Groth16ProofWire {
            a: [zero(), zero()],
            b: [[zero(), zero()], [zero(), zero()]],
            c: [zero(), zero()],
        }
    }
}

/// The public commitments carried by a finished run: the two Merkle roots
/// and the methodology outputs, every value a decimal-string field element.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commitments {
    /// Root of the full-dataset Merkle tree.
    pub full_root: String,
    /// Root of the subset Merkle tree.
    pub subset_root: String,
    /// `Poseidon1` of the execution-log hash, a public output of both proofs.
    pub logs_commitment: String,
    /// `Poseidon1` of the library-code hash, a public output of both proofs.
    pub library_version: String,
    /// `Poseidon1` of the scoring-method hash, a public output of both proofs.
    pub scoring_method: String,
}

/// Integer sums and derived, reporting-only means. Means are never fed back
/// into witness assembly; only the integer sums are circuit inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregates {
    /// Exact integer sum of every normalised score in the batch.
    pub full_sum: String,
    /// Exact integer sum of the normalised scores in the public subset.
    pub subset_sum: String,
    /// Size of the full batch.
    pub n: usize,
    /// Size of the public subset.
    pub k: usize,
    /// `full_sum / n`, for human consumption only.
    pub mean_full: f64,
    /// `subset_sum / k`, for human consumption only.
    pub mean_subset: f64,
}

/// The terminal artefact of a run: two Groth16 proofs bound to the same
/// methodology and cross-referencing Merkle roots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofBundle {
    /// Proof over the full dataset.
    pub full_proof: Groth16ProofWire,
    /// Proof over the public subset.
    pub subset_proof: Groth16ProofWire,
    /// The public commitments both proofs attest to.
    pub commitments: Commitments,
    /// Integer aggregates and reporting means.
    pub aggregates: Aggregates,
    /// The disclosed subset indices.
    pub public_indices: Vec<usize>,
    /// `true` if this bundle was produced without a real prover and
    /// therefore MUST fail verification.
    pub is_placeholder: bool,
}
