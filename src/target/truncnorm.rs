//! Truncated normal distribution evaluated in log space.

use std::f64::consts::{LN_2, SQRT_2};

use super::error::{Result, TargetError};

/// `ln(2π) / 2`
const HALF_LN_2PI: f64 = 0.918_938_533_204_672_8;

/// Below this z the erfc-based expression loses all precision
const ASYMPTOTIC_BELOW: f64 = -20.0;

/// Natural log of the standard normal CDF, `ln Φ(z)`
pub fn log_ndtr(z: f64) -> f64 {
    if z >= 0.0 {
        (-0.5 * libm::erfc(z / SQRT_2)).ln_1p()
    } else if z > ASYMPTOTIC_BELOW {
        (0.5 * libm::erfc(-z / SQRT_2)).ln()
    } else {
        // Mills ratio expansion; relative error below 1e-10 for z <= -20
        let z2 = z * z;
        let inv = 1.0 / z2;
        let series = 1.0 - inv + 3.0 * inv * inv - 15.0 * inv.powi(3) + 105.0 * inv.powi(4);
        -0.5 * z2 - (-z).ln() - HALF_LN_2PI + series.ln()
    }
}

/// `ln(1 - e^x)` for `x <= 0`
fn log1m_exp(x: f64) -> f64 {
    if x > -LN_2 {
        (-x.exp_m1()).ln()
    } else {
        (-x.exp()).ln_1p()
    }
}

/// `ln(Φ(hi) - Φ(lo))` for standardized `lo <= hi`
pub fn log_ndtr_diff(lo: f64, hi: f64) -> f64 {
    if lo >= hi {
        return f64::NEG_INFINITY;
    }
    if lo > 0.0 {
        // Upper tail: Φ(hi) - Φ(lo) = Φ(-lo) - Φ(-hi)
        return log_ndtr_diff(-hi, -lo);
    }
    let log_hi = log_ndtr(hi);
    log_hi + log1m_exp(log_ndtr(lo) - log_hi)
}

/// Normal distribution restricted to `[low, high]` and renormalized
///
/// Support bounds are held as standardized z-scores relative to `loc`, so a
/// location outside `[low, high]` is valid: the mass piles up against the
/// nearer bound. When the bounds are too far away to separate in floating
/// point, the distribution degenerates to a point mass on that bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruncatedNormal {
    loc: f64,
    scale: f64,
    low: f64,
    high: f64,
    a: f64,
    b: f64,
    log_norm: f64,
}

impl TruncatedNormal {
    /// Create a truncated normal with location `loc` and scale `scale`
    ///
    /// # Errors
    /// Returns [`TargetError::InvalidArgument`] unless `scale > 0`, `loc` and
    /// `scale` are finite and `low < high`.
    pub fn new(loc: f64, scale: f64, low: f64, high: f64) -> Result<Self> {
        if !loc.is_finite() {
            return Err(TargetError::InvalidArgument(format!(
                "loc must be finite, got {loc}"
            )));
        }
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(TargetError::InvalidArgument(format!(
                "scale must be positive and finite, got {scale}"
            )));
        }
        if !(low < high) {
            return Err(TargetError::InvalidArgument(format!(
                "low must be less than high, got [{low}, {high}]"
            )));
        }
        let a = (low - loc) / scale;
        let b = (high - loc) / scale;
        Ok(Self {
            loc,
            scale,
            low,
            high,
            a,
            b,
            log_norm: log_ndtr_diff(a, b),
        })
    }

    /// Location of the untruncated normal
    pub fn loc(&self) -> f64 {
        self.loc
    }

    /// Scale of the untruncated normal
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Standardized support bounds `(a, b)`
    pub fn standardized_bounds(&self) -> (f64, f64) {
        (self.a, self.b)
    }

    fn standardize(&self, x: f64) -> f64 {
        ((x - self.loc) / self.scale).clamp(self.a, self.b)
    }

    /// Support bounds `(low, high)`
    pub fn support(&self) -> (f64, f64) {
        (self.low, self.high)
    }

    /// Probability mass on `[x1, x2]`
    pub fn interval_mass(&self, x1: f64, x2: f64) -> f64 {
        if !self.log_norm.is_finite() {
            // Point mass on the bound nearest the location
            return if self.a > 0.0 {
                f64::from(x1 <= self.low && x2 > self.low)
            } else {
                f64::from(x1 < self.high && x2 >= self.high)
            };
        }
        let z1 = self.standardize(x1);
        let z2 = self.standardize(x2);
        if !(z1 < z2) {
            return 0.0;
        }
        (log_ndtr_diff(z1, z2) - self.log_norm).exp().min(1.0)
    }

    /// Cumulative distribution function
    pub fn cdf(&self, x: f64) -> f64 {
        if x <= self.low {
            0.0
        } else if x >= self.high {
            1.0
        } else {
            self.interval_mass(self.low, x)
        }
    }
}
