//! Id-keyed model predictions.

use super::error::{EnsembleError, Result};

/// Toxicity scores keyed by comment id, sorted by id
#[derive(Debug, Clone, PartialEq)]
pub struct Predictions {
    ids: Vec<String>,
    scores: Vec<f64>,
}

impl Predictions {
    /// Pair ids with scores and sort by id
    ///
    /// # Errors
    /// Fails on length mismatch, duplicate ids or non-finite scores.
    pub fn new<S: Into<String>>(ids: Vec<S>, scores: Vec<f64>) -> Result<Self> {
        if ids.len() != scores.len() {
            return Err(EnsembleError::LengthMismatch {
                ids: ids.len(),
                scores: scores.len(),
            });
        }

        let mut pairs: Vec<(String, f64)> = ids.into_iter().map(Into::into).zip(scores).collect();
        if let Some((id, _)) = pairs.iter().find(|(_, s)| !s.is_finite()) {
            return Err(EnsembleError::NonFinite(id.clone()));
        }
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        if let Some(pair) = pairs.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(EnsembleError::DuplicateId(pair[0].0.clone()));
        }

        let (ids, scores) = pairs.into_iter().unzip();
        Ok(Self { ids, scores })
    }

    /// Replace scores, keeping ids; `scores` must be in id order
    pub(crate) fn with_scores(&self, scores: Vec<f64>) -> Self {
        Self {
            ids: self.ids.clone(),
            scores,
        }
    }

    /// Ids in sorted order
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Scores in id order
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Score for one id
    pub fn get(&self, id: &str) -> Option<f64> {
        self.ids
            .binary_search_by(|probe| probe.as_str().cmp(id))
            .ok()
            .map(|i| self.scores[i])
    }

    /// Iterate `(id, score)` in id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.ids
            .iter()
            .map(String::as_str)
            .zip(self.scores.iter().copied())
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether there are no rows
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
