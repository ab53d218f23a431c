//! Types describing how a test is scored, independent of any one record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::ScoringKind;

/// The scoring rule bound to a single test, detached from its result. Used
/// to build the scoring-method commitment (hashing every test's rule, not
/// its outcome).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringDescriptor {
    /// The test this rule applies to.
    pub test_id: String,
    /// The scoring vocabulary.
    pub kind: ScoringKind,
    /// Free-form rubric text, present only for [`ScoringKind::Numeric`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria: Option<String>,
}

/// Everything a [`crate::providers::ScoreProvider`] needs to score one
/// observed output.
#[derive(Debug, Clone)]
pub struct ScoreInput {
    /// The agent's observed output.
    pub agent_output: String,
    /// The reference output.
    pub ideal_output: String,
    /// The scoring vocabulary to apply.
    pub scoring_type: ScoringKind,
    /// Free-form rubric, when `scoring_type` is [`ScoringKind::Numeric`].
    pub criteria: Option<String>,
    /// Arbitrary side-channel metadata (e.g. latency, token counts).
    pub metadata: BTreeMap<String, Value>,
}

/// The result a [`crate::providers::ScoreProvider`] hands back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreOutcome {
    /// A pass/fail outcome.
    Binary(bool),
    /// A numeric outcome in `[0, 100]`.
    Numeric(f64),
}
