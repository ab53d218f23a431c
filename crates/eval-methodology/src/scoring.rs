//! Scoring-rule commitment.

use eval_canon::to_canonical_bytes;
use eval_field::{sha256_field, Field};
use eval_types::ScoringDescriptor;

/// Hashes the per-test scoring rules, sorted by `test_id` so the commitment
/// is independent of the order descriptors were collected in.
#[must_use]
pub fn scoring_method_hash(descriptors: &[ScoringDescriptor]) -> Field {
    let mut sorted: Vec<&ScoringDescriptor> = descriptors.iter().collect();
    sorted.sort_by(|a, b| a.test_id.cmp(&b.test_id));
    sha256_field(&to_canonical_bytes(&sorted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use eval_types::ScoringKind;

    fn descriptor(id: &str, criteria: Option<&str>) -> ScoringDescriptor {
        ScoringDescriptor {
            test_id: id.to_string(),
            kind: ScoringKind::Numeric,
            criteria: criteria.map(str::to_string),
        }
    }

    #[test]
    fn order_independent() {
        let a = vec![descriptor("a", None), descriptor("b", Some("x"))];
        let b = vec![descriptor("b", Some("x")), descriptor("a", None)];
        assert_eq!(scoring_method_hash(&a), scoring_method_hash(&b));
    }

    #[test]
    fn criteria_change_changes_hash() {
        let a = vec![descriptor("a", Some("x"))];
        let b = vec![descriptor("a", Some("y"))];
        assert_ne!(scoring_method_hash(&a), scoring_method_hash(&b));
    }
}
