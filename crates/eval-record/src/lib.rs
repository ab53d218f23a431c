//! Maps a [`TestRecord`] to the five field elements that make up its Merkle
//! leaf, and hashes them into the leaf itself.

use eval_field::{field_from_str, field_from_u64, poseidon, sha256_field, Field};
use eval_types::{EvalError, TestRecord};

/// The five canonical fields that feed a leaf's Poseidon5 hash, kept
/// separate from the hash itself because the full witness needs every field
/// individually, not just the digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafFields {
    /// `SHA256Field(id)` for string ids, `Field(id)` for numeric ids.
    pub test_id_field: Field,
    /// `SHA256Field(prompt)`.
    pub prompt_hash: Field,
    /// `SHA256Field(ideal_output)`.
    pub ideal_hash: Field,
    /// `SHA256Field(agent_output)`.
    pub agent_hash: Field,
    /// The normalised integer score, `[0, 100]`.
    pub score: Field,
}

impl LeafFields {
    /// The all-zero tuple used to pad unused Merkle slots. Its leaf hash is
    /// invariant across batches, which is what makes zero-padding safe: two
    /// distinct logical batches never collide on a padded slot.
    #[must_use]
    pub fn zero() -> Self {
        let zero = Field::from(0u64);
        LeafFields {
            test_id_field: zero,
            prompt_hash: zero,
            ideal_hash: zero,
            agent_hash: zero,
            score: zero,
        }
    }

    /// The five fields in the fixed order the leaf hash and the witness
    /// struct both expect.
    #[must_use]
    pub fn as_array(&self) -> [Field; 5] {
        [
            self.test_id_field,
            self.prompt_hash,
            self.ideal_hash,
            self.agent_hash,
            self.score,
        ]
    }

    /// Hashes the tuple into a single Merkle leaf via Poseidon5.
    pub fn leaf_hash(&self) -> Result<Field, EvalError> {
        poseidon(&self.as_array())
    }
}

/// Derives the canonical leaf fields for `record`.
#[must_use]
pub fn leaf_fields(record: &TestRecord) -> LeafFields {
    LeafFields {
        test_id_field: field_from_str(&record.id),
        prompt_hash: sha256_field(record.prompt.as_bytes()),
        ideal_hash: sha256_field(record.ideal_output.as_bytes()),
        agent_hash: sha256_field(record.agent_output.as_bytes()),
        score: field_from_u64(u64::from(record.normalised_score())),
    }
}

/// Derives `record`'s Merkle leaf hash directly.
pub fn leaf_hash(record: &TestRecord) -> Result<Field, EvalError> {
    leaf_fields(record).leaf_hash()
}
