//! Model Evaluation
//!
//! Ranking metrics for binary toxicity predictions:
//! - `rankdata`: average ranks with ties
//! - `roc_auc`: ROC AUC over labels and scores
//! - `score_roc_auc`: ROC AUC over id-aligned [`Predictions`]
//!
//! [`Predictions`]: crate::ensemble::Predictions

mod error;
mod rank;
mod roc;

pub use error::{EvalError, Result};
pub use rank::rankdata;
pub use roc::{roc_auc, score_roc_auc};
