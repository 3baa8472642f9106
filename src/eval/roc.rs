//! ROC AUC for binary toxicity scores.

use super::error::{EvalError, Result};
use super::rank::rankdata;
use crate::ensemble::Predictions;

/// Area under the ROC curve via the Mann-Whitney U statistic
///
/// Tied scores count as half-correct, matching sklearn's `roc_auc_score`.
///
/// # Errors
/// Fails on empty or mismatched input, non-finite scores, or when only one
/// class is present.
pub fn roc_auc(labels: &[bool], scores: &[f64]) -> Result<f64> {
    if labels.len() != scores.len() {
        return Err(EvalError::LengthMismatch {
            labels: labels.len(),
            scores: scores.len(),
        });
    }
    if labels.is_empty() {
        return Err(EvalError::Empty);
    }
    if let Some(pos) = scores.iter().position(|s| !s.is_finite()) {
        return Err(EvalError::NonFinite(pos));
    }

    let n_pos = labels.iter().filter(|&&l| l).count();
    let n_neg = labels.len() - n_pos;
    if n_pos == 0 || n_neg == 0 {
        return Err(EvalError::SingleClass);
    }

    let ranks = rankdata(scores);
    let pos_rank_sum: f64 = ranks
        .iter()
        .zip(labels)
        .filter(|(_, l)| **l)
        .map(|(r, _)| r)
        .sum();

    let n_pos = n_pos as f64;
    let u = pos_rank_sum - n_pos * (n_pos + 1.0) / 2.0;
    Ok(u / (n_pos * n_neg as f64))
}

/// ROC AUC of `predicted` against 0/1 `targets`, aligned by id
///
/// # Errors
/// Returns [`EvalError::IdMismatch`] if the id sets differ and
/// [`EvalError::NonBinaryTarget`] for targets other than 0 or 1.
pub fn score_roc_auc(targets: &Predictions, predicted: &Predictions) -> Result<f64> {
    if targets.ids() != predicted.ids() {
        return Err(EvalError::IdMismatch);
    }
    let labels = targets
        .iter()
        .map(|(id, value)| {
            if value == 1.0 {
                Ok(true)
            } else if value == 0.0 {
                Ok(false)
            } else {
                Err(EvalError::NonBinaryTarget {
                    id: id.to_string(),
                    value,
                })
            }
        })
        .collect::<Result<Vec<bool>>>()?;

    let auc = roc_auc(&labels, predicted.scores())?;
    tracing::debug!(n = labels.len(), auc, "scored predictions");
    Ok(auc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_perfect_and_inverted() {
        let labels = [false, false, true, true];
        assert_eq!(roc_auc(&labels, &[0.1, 0.2, 0.8, 0.9]).unwrap(), 1.0);
        assert_eq!(roc_auc(&labels, &[0.9, 0.8, 0.2, 0.1]).unwrap(), 0.0);
    }

    #[test]
    fn test_sklearn_example() {
        // sklearn docs: roc_auc_score([0, 0, 1, 1], [0.1, 0.4, 0.35, 0.8]) == 0.75
        let auc = roc_auc(&[false, false, true, true], &[0.1, 0.4, 0.35, 0.8]).unwrap();
        assert_abs_diff_eq!(auc, 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_ties_count_half() {
        let auc = roc_auc(&[false, true], &[0.5, 0.5]).unwrap();
        assert_abs_diff_eq!(auc, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_errors() {
        assert_eq!(roc_auc(&[], &[]), Err(EvalError::Empty));
        assert_eq!(
            roc_auc(&[true], &[0.1, 0.2]),
            Err(EvalError::LengthMismatch {
                labels: 1,
                scores: 2
            })
        );
        assert_eq!(roc_auc(&[true, true], &[0.1, 0.2]), Err(EvalError::SingleClass));
        assert_eq!(
            roc_auc(&[true, false], &[0.1, f64::NAN]),
            Err(EvalError::NonFinite(1))
        );
    }

    #[test]
    fn test_score_aligned_by_id() {
        let targets = Predictions::new(vec!["b", "a", "c"], vec![1.0, 0.0, 1.0]).unwrap();
        let predicted = Predictions::new(vec!["c", "b", "a"], vec![0.7, 0.9, 0.2]).unwrap();
        assert_eq!(score_roc_auc(&targets, &predicted).unwrap(), 1.0);
    }

    #[test]
    fn test_score_rejects_mismatch_and_soft_targets() {
        let targets = Predictions::new(vec!["a", "b"], vec![1.0, 0.0]).unwrap();
        let other = Predictions::new(vec!["a", "z"], vec![0.1, 0.2]).unwrap();
        assert_eq!(score_roc_auc(&targets, &other), Err(EvalError::IdMismatch));

        let soft = Predictions::new(vec!["a", "b"], vec![0.6, 0.0]).unwrap();
        let predicted = Predictions::new(vec!["a", "b"], vec![0.9, 0.1]).unwrap();
        assert!(matches!(
            score_roc_auc(&soft, &predicted),
            Err(EvalError::NonBinaryTarget { .. })
        ));
    }
}
