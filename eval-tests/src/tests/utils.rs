//! Shared fixtures for the scenario tests.

use std::path::PathBuf;
use std::sync::Arc;

use eval_orchestrator::{CancellationToken, Orchestrator, RunInputs};
use eval_prover::PlaceholderProver;
use eval_types::{
    Config, ProverArtefactPaths, ScoreValue, ScoringDescriptor, ScoringKind, TestRecord, ToolCallRecord,
};

/// A tree big enough for every scenario's batch (`maxTests = 4`,
/// `maxSubset = 2`) without padding headaches in assertions.
pub fn config() -> Config {
    Config {
        public_percentage: 0.34,
        minimum_public: 1,
        max_tests: 4,
        max_subset: 2,
        full_depth: 2,
        subset_depth: 1,
        output_dir: None,
        prover_artefact_paths: ProverArtefactPaths {
            full_wasm: PathBuf::new(),
            full_zkey: PathBuf::new(),
            full_vk: PathBuf::new(),
            subset_wasm: PathBuf::new(),
            subset_zkey: PathBuf::new(),
            subset_vk: PathBuf::new(),
        },
        allow_placeholder: true,
    }
}

pub fn binary_record(id: &str, prompt: &str, ideal: &str, agent: &str, passed: bool) -> TestRecord {
    TestRecord {
        id: id.to_string(),
        prompt: prompt.to_string(),
        ideal_output: ideal.to_string(),
        agent_output: agent.to_string(),
        score: ScoreValue::Bool(passed),
        scoring_type: ScoringKind::Binary,
        scoring_criteria: None,
    }
}

pub fn numeric_record(id: &str, score: u32) -> TestRecord {
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

pub fn scoring_descriptors(records: &[TestRecord]) -> Vec<ScoringDescriptor> {
    records
        .iter()
        .map(|r| ScoringDescriptor {
            test_id: r.id.clone(),
            kind: r.scoring_type,
            criteria: r.scoring_criteria.clone(),
        })
        .collect()
}

/// A temp directory standing in for the library checkout whose manifest
/// feeds `libraryVersion`. Scoped uniquely per caller so parallel tests
/// don't collide.
pub fn library_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("eval-tests-lib-{name}"));
    std::fs::create_dir_all(&root).expect("create scratch library root");
    std::fs::write(root.join("main.rs"), b"fn main() {}\n").expect("seed scratch library root");
    root
}

pub fn run_inputs(
    records: &[TestRecord],
    transcript: Vec<ToolCallRecord>,
    library_root: PathBuf,
) -> RunInputs {
    RunInputs {
        execution_transcript: transcript,
        scoring_descriptors: scoring_descriptors(records),
        library_root,
        claimed_total_override: None,
    }
}

pub fn orchestrator() -> Orchestrator {
    Orchestrator::new(config(), Arc::new(PlaceholderProver)).expect("valid fixture config")
}

/// A larger tree (`maxTests = 16`, `maxSubset = 4`) for scenarios with
/// batches too big for [`config`]'s capacity.
pub fn large_config() -> Config {
    Config {
        max_tests: 16,
        max_subset: 4,
        full_depth: 4,
        subset_depth: 2,
        ..config()
    }
}

pub fn large_orchestrator() -> Orchestrator {
    Orchestrator::new(large_config(), Arc::new(PlaceholderProver)).expect("valid fixture config")
}

pub fn fresh_cancellation() -> CancellationToken {
    let (_tx, token) = CancellationToken::new();
    token
}

static TRACING_INIT: std::sync::Once = std::sync::Once::new();

/// Installs a test-scoped `tracing` subscriber once per process, so the
/// orchestrator's spans are visible under `cargo test -- --nocapture`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
