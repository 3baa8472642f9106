//! Prediction ensembling
//!
//! Combines toxicity scores from several models over the same comment ids:
//! - Simple averaging
//! - Power averaging
//! - Rank averaging

mod error;
mod predictions;
mod strategy;


pub use error::{EnsembleError, Result};
pub use predictions::Predictions;
pub use strategy::EnsembleStrategy;

use crate::eval::rankdata;

/// Combine prediction sets with `strategy`
///
/// All sets must cover the same ids; the output keeps those ids.
///
/// # Errors
/// Returns [`EnsembleError::Empty`] for no input,
/// [`EnsembleError::IdMismatch`] if any set has different ids and
/// [`EnsembleError::InvalidConfig`] for a non-positive or non-finite power,
/// or a fractional power over negative scores, and
/// [`EnsembleError::NonFinite`] if a combined score overflows.
pub fn ensemble(predictions: &[Predictions], strategy: &EnsembleStrategy) -> Result<Predictions> {
    let (first, rest) = predictions.split_first().ok_or(EnsembleError::Empty)?;
    if let Some(index) = rest.iter().position(|p| p.ids() != first.ids()) {
        return Err(EnsembleError::IdMismatch { index: index + 1 });
    }

    let transform: Box<dyn Fn(&Predictions) -> Vec<f64>> = match *strategy {
        EnsembleStrategy::Mean => Box::new(|p| p.scores().to_vec()),
        EnsembleStrategy::Power { power } => {
            if !(power.is_finite() && power > 0.0) {
                return Err(EnsembleError::InvalidConfig(format!(
                    "power must be positive and finite, got {power}"
                )));
            }
            if power.fract() != 0.0 {
                for (index, p) in predictions.iter().enumerate() {
                    if let Some((id, score)) = p.iter().find(|&(_, s)| s < 0.0) {
                        return Err(EnsembleError::InvalidConfig(format!(
                            "non-integer power {power} needs non-negative scores, \
                             set {index} has {score} for id '{id}'"
                        )));
                    }
                }
            }
            Box::new(move |p| p.scores().iter().map(|s| s.powf(power)).collect())
        }
        EnsembleStrategy::Rank => Box::new(|p| {
            let n = p.len() as f64;
            rankdata(p.scores()).into_iter().map(|r| r / n).collect()
        }),
    };

    let mut combined = vec![0.0; first.len()];
    for p in predictions {
        for (acc, v) in combined.iter_mut().zip(transform(p)) {
            *acc += v;
        }
    }
    let m = predictions.len() as f64;
    combined.iter_mut().for_each(|v| *v /= m);
    if let Some(i) = combined.iter().position(|v| !v.is_finite()) {
        return Err(EnsembleError::NonFinite(first.ids()[i].clone()));
    }

    tracing::debug!(
        strategy = strategy.name(),
        models = predictions.len(),
        rows = first.len(),
        "ensembled predictions"
    );
    Ok(first.with_scores(combined))
}
