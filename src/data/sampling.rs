//! Index-level resampling of labeled training rows.

use rand::seq::index;
use rand::Rng;

use super::error::{DataError, Result};

/// Class-balanced bootstrap over binary labels
///
/// Draws `n / 2` indices with replacement from the positive rows followed by
/// `n / 2` from the negative rows, so an odd `n` yields `n - 1` indices.
///
/// # Errors
/// Returns [`DataError::EmptyClass`] if either class has no rows.
pub fn balanced_sample<R: Rng + ?Sized>(labels: &[bool], n: usize, rng: &mut R) -> Result<Vec<usize>> {
    let (positives, negatives): (Vec<usize>, Vec<usize>) =
        (0..labels.len()).partition(|&i| labels[i]);

    if positives.is_empty() {
        return Err(DataError::EmptyClass("positive"));
    }
    if negatives.is_empty() {
        return Err(DataError::EmptyClass("negative"));
    }

    let half = n / 2;
    let mut sample = Vec::with_capacity(2 * half);
    for pool in [&positives, &negatives] {
        sample.extend((0..half).map(|_| pool[rng.random_range(0..pool.len())]));
    }
    Ok(sample)
}

/// Random subset holding `frac * n` distinct indices in draw order, rounded
/// half to even
///
/// A fraction of 1 or more keeps every index in order.
///
/// # Errors
/// Returns [`DataError::InvalidFraction`] if `frac` is not finite or not
/// positive.
pub fn sample_fraction<R: Rng + ?Sized>(n: usize, frac: f64, rng: &mut R) -> Result<Vec<usize>> {
    if !frac.is_finite() || frac <= 0.0 {
        return Err(DataError::InvalidFraction(frac));
    }
    if frac >= 1.0 {
        return Ok((0..n).collect());
    }
    let amount = ((n as f64) * frac).round_ties_even() as usize;
    Ok(index::sample(rng, n, amount.min(n)).into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_balanced_sample_halves() {
        let labels = [true, false, false, false, false, false, false, true];
        let mut rng = StdRng::seed_from_u64(1337);

        let sample = balanced_sample(&labels, 100, &mut rng).unwrap();
        assert_eq!(sample.len(), 100);
        assert!(sample[..50].iter().all(|&i| labels[i]));
        assert!(sample[50..].iter().all(|&i| !labels[i]));
    }

    #[test]
    fn test_balanced_sample_odd_size() {
        let labels = [true, false];
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(balanced_sample(&labels, 7, &mut rng).unwrap().len(), 6);
    }

    #[test]
    fn test_balanced_sample_missing_class() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            balanced_sample(&[false, false], 4, &mut rng),
            Err(DataError::EmptyClass("positive"))
        );
        assert_eq!(
            balanced_sample(&[true], 4, &mut rng),
            Err(DataError::EmptyClass("negative"))
        );
    }

    #[test]
    fn test_sample_fraction_distinct() {
        let mut rng = StdRng::seed_from_u64(5);
        let sample = sample_fraction(1000, 0.25, &mut rng).unwrap();
        assert_eq!(sample.len(), 250);
        let unique: HashSet<usize> = sample.iter().copied().collect();
        assert_eq!(unique.len(), 250);
        assert!(sample.iter().all(|&i| i < 1000));
    }

    #[test]
    fn test_sample_fraction_rounds_half_to_even() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(sample_fraction(5, 0.5, &mut rng).unwrap().len(), 2);
        assert_eq!(sample_fraction(3, 0.5, &mut rng).unwrap().len(), 2);
        assert_eq!(sample_fraction(10, 0.25, &mut rng).unwrap().len(), 2);
        assert_eq!(sample_fraction(10, 0.26, &mut rng).unwrap().len(), 3);
    }

    #[test]
    fn test_sample_fraction_full() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(sample_fraction(4, 1.0, &mut rng).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(sample_fraction(4, 3.0, &mut rng).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_sample_fraction_invalid() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(sample_fraction(4, 0.0, &mut rng).is_err());
        assert!(sample_fraction(4, -0.5, &mut rng).is_err());
        assert!(sample_fraction(4, f64::NAN, &mut rng).is_err());
    }

    #[test]
    fn test_sample_fraction_reproducible() {
        let a = sample_fraction(500, 0.1, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = sample_fraction(500, 0.1, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }
}
