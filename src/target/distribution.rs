//! Discretized truncated-normal soft targets.

use serde::{Deserialize, Serialize};

use super::error::{Result, TargetError};
use super::truncnorm::TruncatedNormal;

/// Bin centers and their probabilities, in bin order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetDistribution {
    /// Midpoint of each equal-width bin partitioning `[low, high]`
    pub centers: Vec<f64>,
    /// Truncated-normal mass assigned to each bin
    pub probabilities: Vec<f64>,
}

impl TargetDistribution {
    /// Number of bins
    pub fn num_bins(&self) -> usize {
        self.centers.len()
    }

    /// Sum of bin probabilities
    pub fn total_mass(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    /// Expected label value under the distribution
    pub fn expected_value(&self) -> f64 {
        self.centers
            .iter()
            .zip(&self.probabilities)
            .map(|(c, p)| c * p)
            .sum()
    }

    /// Iterate `(center, probability)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.centers
            .iter()
            .copied()
            .zip(self.probabilities.iter().copied())
    }
}

fn validate(mean: f64, num_bins: usize, low: f64, high: f64) -> Result<()> {
    if num_bins == 0 {
        return Err(TargetError::InvalidArgument(
            "num_bins must be positive".to_string(),
        ));
    }
    if !(mean.is_finite() && low.is_finite() && high.is_finite()) {
        return Err(TargetError::InvalidArgument(format!(
            "mean, low and high must be finite, got mean={mean} low={low} high={high}"
        )));
    }
    if low >= high {
        return Err(TargetError::InvalidArgument(format!(
            "low must be less than high, got [{low}, {high}]"
        )));
    }
    Ok(())
}

/// Discretize a truncated normal centered at `mean` into `num_bins` bins.
///
/// The scale is the bin half-width `radius = 0.5 * (high - low) / num_bins`,
/// and bin `i` is centered at `low + radius + 2 * radius * i`. Each bin gets
/// the truncated-CDF difference across its edges. The outermost edges are
/// pinned to `low` and `high` exactly, so the bins partition the support.
///
/// A `mean` outside `[low, high]` is valid and pushes the mass onto the
/// nearest bins.
///
/// # Errors
/// Returns [`TargetError::InvalidArgument`] if `num_bins == 0`, `low >= high`
/// or any float argument is not finite.
pub fn target_distribution(
    mean: f64,
    num_bins: usize,
    low: f64,
    high: f64,
) -> Result<TargetDistribution> {
    validate(mean, num_bins, low, high)?;

    // Halve before subtracting so finite bounds never overflow the span
    let radius = (0.5 * high - 0.5 * low) / num_bins as f64;
    let dist = TruncatedNormal::new(mean, radius, low, high)?;

    // `low + 2 * offset`, adding the offset twice to stay finite
    let shifted = |offset: f64| low + offset + offset;

    let centers: Vec<f64> = (0..num_bins)
        .map(|i| shifted((i as f64 + 0.5) * radius))
        .collect();

    let edge = |i: usize| match i {
        0 => low,
        i if i == num_bins => high,
        i => shifted(i as f64 * radius),
    };
    let probabilities = (0..num_bins)
        .map(|i| dist.interval_mass(edge(i), edge(i + 1)))
        .collect();

    Ok(TargetDistribution {
        centers,
        probabilities,
    })
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_mass_is_a_distribution(
            mean in -2.0f64..3.0,
            num_bins in 1usize..64,
            low in -5.0f64..5.0,
            width in 0.01f64..10.0,
        ) {
            let dist = target_distribution(mean, num_bins, low, low + width).unwrap();
            prop_assert_eq!(dist.num_bins(), num_bins);
            prop_assert!(dist.probabilities.iter().all(|p| (0.0..=1.0).contains(p)));
            let total = dist.total_mass();
            prop_assert!(total > 1.0 - 1e-9 && total < 1.0 + 1e-9, "total {}", total);
        }

        #[test]
        fn prop_centers_evenly_spaced(num_bins in 1usize..64, low in -5.0f64..5.0, width in 0.01f64..10.0) {
            let high = low + width;
            let dist = target_distribution(0.0, num_bins, low, high).unwrap();
            let step = width / num_bins as f64;
            prop_assert!((dist.centers[0] - (low + step / 2.0)).abs() < 1e-9);
            for pair in dist.centers.windows(2) {
                prop_assert!((pair[1] - pair[0] - step).abs() < 1e-9);
            }
            prop_assert!(*dist.centers.last().unwrap() < high);
        }

        #[test]
        fn prop_mode_bin_contains_mean(mean in 0.01f64..0.99, num_bins in 2usize..32) {
            let dist = target_distribution(mean, num_bins, 0.0, 1.0).unwrap();
            let (mode, _) = dist
                .probabilities
                .iter()
                .enumerate()
                .fold((0, f64::MIN), |best, (i, &p)| if p > best.1 { (i, p) } else { best });
            let width = 1.0 / num_bins as f64;
            // The mode is the bin holding the mean or its neighbour at a tie
            let holding = ((mean / width) as usize).min(num_bins - 1);
            prop_assert!(mode.abs_diff(holding) <= 1);
        }
    }
}
