//! The structured error type surfaced by every fallible operation in the
//! commitment engine.

/// The kind of failure, without the per-occurrence detail. Carried as a
/// structured `tracing` field so dashboards can group on it without parsing
/// the display message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Malformed construction arguments.
    InvalidConfig,
    /// The batch itself is malformed (duplicate ids, empty suite, ...).
    InvalidBatch,
    /// The agent provider failed to produce an output for a test.
    ExecutionFailure,
    /// The score provider failed to score a test.
    ScoringFailure,
    /// A required prover artefact (wasm/zkey/vk) was not found.
    ProverArtefactMissing,
    /// The prover ran but returned an error.
    ProverInvocationError,
    /// A value destined for a circuit input fell outside its valid range.
    CircuitInputOutOfRange,
    /// The verifier rejected a proof bundle.
    VerificationFailure,
}

/// The single error type returned by this crate's fallible public entry
/// points. Carries enough detail for logs, never raw prompt/output text.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// See [`EvalErrorKind::InvalidConfig`].
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Human-readable detail.
        message: String,
    },
    /// See [`EvalErrorKind::InvalidBatch`].
    #[error("invalid batch: {message}")]
    InvalidBatch {
        /// Human-readable detail.
        message: String,
    },
    /// See [`EvalErrorKind::ExecutionFailure`].
    #[error("execution failed for test {test_id}: {message}")]
    ExecutionFailure {
        /// The test whose execution failed.
        test_id: String,
        /// Human-readable detail.
        message: String,
    },
    /// See [`EvalErrorKind::ScoringFailure`].
    #[error("scoring failed for test {test_id}: {message}")]
    ScoringFailure {
        /// The test whose scoring failed.
        test_id: String,
        /// Human-readable detail.
        message: String,
    },
    /// See [`EvalErrorKind::ProverArtefactMissing`].
    #[error("prover artefact missing: {path}")]
    ProverArtefactMissing {
        /// The path that was expected to exist.
        path: String,
    },
    /// See [`EvalErrorKind::ProverInvocationError`].
    #[error("prover invocation failed: {message}")]
    ProverInvocationError {
        /// Human-readable detail.
        message: String,
    },
    /// See [`EvalErrorKind::CircuitInputOutOfRange`].
    #[error("circuit input out of range: {message}")]
    CircuitInputOutOfRange {
        /// Human-readable detail.
        message: String,
    },
    /// See [`EvalErrorKind::VerificationFailure`].
    #[error("verification failed: {}", .reasons.join("; "))]
    VerificationFailure {
        /// Every reason the verifier rejected the bundle.
        reasons: Vec<String>,
    },
}

impl EvalError {
    /// The coarse-grained kind of this error, for structured logging.
    #[must_use]
    pub fn kind(&self) -> EvalErrorKind {
        match self {
            EvalError::InvalidConfig { .. } => EvalErrorKind::InvalidConfig,
            EvalError::InvalidBatch { .. } => EvalErrorKind::InvalidBatch,
            EvalError::ExecutionFailure { .. } => EvalErrorKind::ExecutionFailure,
            EvalError::ScoringFailure { .. } => EvalErrorKind::ScoringFailure,
            EvalError::ProverArtefactMissing { .. } => EvalErrorKind::ProverArtefactMissing,
            EvalError::ProverInvocationError { .. } => EvalErrorKind::ProverInvocationError,
            EvalError::CircuitInputOutOfRange { .. } => EvalErrorKind::CircuitInputOutOfRange,
            EvalError::VerificationFailure { .. } => EvalErrorKind::VerificationFailure,
        }
    }
}
