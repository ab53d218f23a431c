//! Run configuration, validated once at orchestrator construction.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::EvalError;

/// Filesystem locations of the two circuits' prover artefacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProverArtefactPaths {
    /// Witness-calculator WASM for the full-dataset circuit.
    pub full_wasm: PathBuf,
    /// Proving key for the full-dataset circuit.
    pub full_zkey: PathBuf,
    /// Verification key for the full-dataset circuit.
    pub full_vk: PathBuf,
    /// Witness-calculator WASM for the subset circuit.
    pub subset_wasm: PathBuf,
    /// Proving key for the subset circuit.
    pub subset_zkey: PathBuf,
    /// Verification key for the subset circuit.
    pub subset_vk: PathBuf,
}

/// The recognised run options for the commitment engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Fraction of the batch disclosed as the public subset, e.g. `0.05`.
    pub public_percentage: f64,
    /// Floor on the public subset size regardless of `public_percentage`.
    pub minimum_public: usize,
    /// Capacity of the full-dataset Merkle tree.
    pub max_tests: usize,
    /// Capacity of the subset Merkle tree.
    pub max_subset: usize,
    /// Depth of the full-dataset Merkle tree (`max_tests == 2^full_depth`).
    pub full_depth: u32,
    /// Depth of the subset Merkle tree (`max_subset == 2^subset_depth`).
    pub subset_depth: u32,
    /// Where generated artefacts are written; this crate performs no I/O
    /// itself, so this value is informative only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Paths to the two circuits' prover artefacts.
    pub prover_artefact_paths: ProverArtefactPaths,
    /// Whether `run_and_prove` may fall back to a placeholder bundle when
    /// prover artefacts are unavailable or the prover invocation fails.
    #[serde(default)]
    pub allow_placeholder: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            public_percentage: 0.05,
            minimum_public: 1,
            max_tests: 100,
            max_subset: 10,
            full_depth: 10,
            subset_depth: 4,
            output_dir: None,
            prover_artefact_paths: ProverArtefactPaths {
                full_wasm: PathBuf::new(),
                full_zkey: PathBuf::new(),
                full_vk: PathBuf::new(),
                subset_wasm: PathBuf::new(),
                subset_zkey: PathBuf::new(),
                subset_vk: PathBuf::new(),
            },
            allow_placeholder: false,
        }
    }
}

impl Config {
    /// Validates internal consistency. Does not touch the filesystem; artefact
    /// existence is checked lazily by the prover adapter.
    pub fn validate(&self) -> Result<(), EvalError> {
        if !(0.0..=1.0).contains(&self.public_percentage) || self.public_percentage <= 0.0 {
            return Err(EvalError::InvalidConfig {
                message: format!(
                    "public_percentage must be in (0, 1], got {}",
                    self.public_percentage
                ),
            });
        }
        if self.minimum_public == 0 {
            return Err(EvalError::InvalidConfig {
                message: "minimum_public must be at least 1".to_string(),
            });
        }
        if self.max_subset > self.max_tests {
            return Err(EvalError::InvalidConfig {
                message: format!(
                    "max_subset ({}) must not exceed max_tests ({})",
                    self.max_subset, self.max_tests
                ),
            });
        }
        if self.max_tests != 1usize.checked_shl(self.full_depth).unwrap_or(usize::MAX) {
            return Err(EvalError::InvalidConfig {
                message: format!(
                    "max_tests ({}) must equal 2^full_depth ({})",
                    self.max_tests, self.full_depth
                ),
            });
        }
        if self.max_subset != 1usize.checked_shl(self.subset_depth).unwrap_or(usize::MAX) {
            return Err(EvalError::InvalidConfig {
                message: format!(
                    "max_subset ({}) must equal 2^subset_depth ({})",
                    self.max_subset, self.subset_depth
                ),
            });
        }
        Ok(())
    }
}
