//! The immutable per-test input record and its scoring vocabulary.

use serde::{Deserialize, Serialize};

/// Whether a test is scored as a pass/fail gate or a numeric rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoringKind {
    /// Pass/fail: `true` maps to 100, `false` to 0.
    Binary,
    /// A numeric score in `[0, 100]`.
    Numeric,
}

/// The raw score attached to a [`TestRecord`] before normalisation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoreValue {
    /// A boolean outcome (only valid with [`ScoringKind::Binary`]).
    Bool(bool),
    /// A numeric outcome, possibly fractional or out of range before clamping.
    Number(f64),
}

impl ScoreValue {
    /// Normalises to an integer in `[0, 100]`: booleans map to 100/0, numbers
    /// are clamped then rounded to the nearest integer.
    #[must_use]
    pub fn normalised(&self) -> u32 {
        match self {
            ScoreValue::Bool(true) => 100,
            ScoreValue::Bool(false) => 0,
            ScoreValue::Number(n) => {
                let clamped = n.clamp(0.0, 100.0);
                let rounded = clamped.round();
                if rounded.is_finite() {
                    // Clamped into [0, 100] above, so this cast never loses range.
                    rounded as u32
                } else {
                    0
                }
            }
        }
    }
}

/// A single evaluation input: a prompt, the reference and observed outputs,
/// and the score assigned to the observed output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRecord {
    /// Unique identifier within the batch.
    pub id: String,
    /// The prompt presented to the agent under evaluation.
    pub prompt: String,
    /// The reference ("ideal") output.
    pub ideal_output: String,
    /// The agent's observed output.
    pub agent_output: String,
    /// The raw score before normalisation.
    pub score: ScoreValue,
    /// Which scoring vocabulary `score` was produced under.
    pub scoring_type: ScoringKind,
    /// Free-form scoring rubric, present only for [`ScoringKind::Numeric`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring_criteria: Option<String>,
}

impl TestRecord {
    /// The score normalised to an integer in `[0, 100]`.
    #[must_use]
    pub fn normalised_score(&self) -> u32 {
        self.score.normalised()
    }
}
