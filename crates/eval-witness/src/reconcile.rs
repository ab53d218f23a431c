//! Score reconciliation: forcing a set of per-test scores to sum to a
//! claimed total via deterministic, left-to-right ±1 adjustments.

use eval_types::EvalError;

/// Adjusts `scores` so they sum to exactly `claimed_sum`, walking
/// left-to-right and nudging each entry by at most one per pass without ever
/// leaving `[0, 100]`. A no-op when the scores already sum correctly.
///
/// Returns an error if `claimed_sum` is unreachable (every score already at
/// the relevant bound).
pub fn reconcile_scores(scores: &[u32], claimed_sum: u64) -> Result<Vec<u32>, EvalError> {
    let current_sum: u64 = scores.iter().copied().map(u64::from).sum();
    let mut adjusted = scores.to_vec();

    if current_sum == claimed_sum {
        return Ok(adjusted);
    }

    if current_sum < claimed_sum {
        let mut deficit = claimed_sum - current_sum;
        while deficit > 0 {
            let mut progressed = false;
            for score in &mut adjusted {
                if deficit == 0 {
                    break;
                }
                if *score < 100 {
                    *score += 1;
                    deficit -= 1;
                    progressed = true;
                }
            }
            if !progressed {
                break;
            }
        }
        if deficit != 0 {
            return Err(EvalError::CircuitInputOutOfRange {
                message: "cannot reconcile scores upward to the claimed sum: no headroom left"
                    .to_string(),
            });
        }
    } else {
        let mut surplus = current_sum - claimed_sum;
        while surplus > 0 {
            let mut progressed = false;
            for score in &mut adjusted {
                if surplus == 0 {
                    break;
                }
                if *score > 0 {
                    *score -= 1;
                    surplus -= 1;
                    progressed = true;
                }
            }
            if !progressed {
                break;
            }
        }
        if surplus != 0 {
            return Err(EvalError::CircuitInputOutOfRange {
                message: "cannot reconcile scores downward to the claimed sum: no room left"
                    .to_string(),
            });
        }
    }

    Ok(adjusted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_matching_sum_is_unchanged() {
        let scores = vec![10, 20, 30];
        let out = reconcile_scores(&scores, 60).expect("already-matching sum should reconcile");
        assert_eq!(out, scores);
    }

    #[test]
    fn adjusts_upward_left_to_right() {
        let scores = vec![10, 10, 10];
        let out = reconcile_scores(&scores, 32).expect("reachable total should reconcile");
        assert_eq!(out.iter().map(|&s| u64::from(s)).sum::<u64>(), 32);
        assert_eq!(out, vec![11, 11, 10]);
    }

    #[test]
    fn adjusts_downward_left_to_right() {
        let scores = vec![10, 10, 10];
        let out = reconcile_scores(&scores, 28).expect("reachable total should reconcile");
        assert_eq!(out.iter().map(|&s| u64::from(s)).sum::<u64>(), 28);
        assert_eq!(out, vec![9, 9, 10]);
    }

    #[test]
    fn errors_when_unreachable() {
        let scores = vec![100, 100];
        assert!(reconcile_scores(&scores, 1000).is_err());
        let scores = vec![0, 0];
        assert!(reconcile_scores(&scores, u64::MAX).is_err() || reconcile_scores(&scores, 1).is_err());
    }
}
