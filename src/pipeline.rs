//! End-to-end recommendation pipeline.
//!
//! Sequences the stages strictly: build similarities, select top-K
//! neighbors, predict, and fall back to popularity ranking when
//! personalization yields nothing. Single-threaded, no retries, fully
//! deterministic for a given store and parameters.

use crate::error::{Result, SugerirError};
use crate::neighbors::{top_k, Neighbor};
use crate::popularity::popular;
use crate::predict::{predict, Recommendation};
use crate::similarity::similarities;
use crate::store::RatingStore;
use serde::{Deserialize, Serialize};

/// Default neighborhood size.
pub const DEFAULT_K: usize = 3;
/// Default number of recommendations returned.
pub const DEFAULT_TOP_N: usize = 5;

/// Outcome of one pipeline run for a target user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// The user recommendations were produced for.
    pub target_user: String,
    /// Selected neighbors, descending by similarity.
    pub neighbors: Vec<Neighbor>,
    /// Ranked recommendations, descending by score.
    pub recommendations: Vec<Recommendation>,
    /// True if scores came from neighbor prediction, false if from the
    /// popularity fallback.
    pub personalized: bool,
}

/// User-based collaborative filtering recommender.
///
/// # Examples
///
/// ```
/// use sugerir::pipeline::UserCf;
/// use sugerir::store::RatingStore;
///
/// let rows = ["U1,I1,5", "U1,I2,4", "U2,I1,5", "U2,I3,4"]
///     .iter()
///     .enumerate()
///     .map(|(i, l)| (i + 1, (*l).to_string()));
/// let (store, _) = RatingStore::build(rows);
///
/// let report = UserCf::new().with_k(3).with_top_n(5)
///     .recommend(&store, "U1")
///     .unwrap();
/// assert!(report.personalized);
/// assert_eq!(report.recommendations[0].item_id, "I3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserCf {
    /// Neighborhood size.
    k: usize,
    /// Maximum recommendations returned.
    top_n: usize,
}

impl Default for UserCf {
    fn default() -> Self {
        Self::new()
    }
}

impl UserCf {
    /// Recommender with the default parameters (K=3, top-N=5).
    #[must_use]
    pub fn new() -> Self {
        Self {
            k: DEFAULT_K,
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Set the neighborhood size.
    #[must_use]
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the maximum number of recommendations.
    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Produce recommendations for `target`.
    ///
    /// Runs similarities → top-K → prediction; when prediction yields no
    /// items, the popularity fallback supplies the list instead
    /// (`personalized = false` in the report).
    ///
    /// # Errors
    ///
    /// Returns [`SugerirError::UnknownUser`] if `target` has no ratings in
    /// the store (which includes the empty-store case). No similarity work
    /// happens in that case.
    pub fn recommend(&self, store: &RatingStore, target: &str) -> Result<Report> {
        if !store.contains_user(target) {
            return Err(SugerirError::unknown_user(target));
        }

        let sims = similarities(store, target);
        let neighbors = top_k(&sims, self.k);
        let mut recommendations = predict(store, target, &neighbors, self.top_n);
        let personalized = !recommendations.is_empty();
        if !personalized {
            recommendations = popular(store, target, self.top_n);
        }

        Ok(Report {
            target_user: target.to_string(),
            neighbors,
            recommendations,
            personalized,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(lines: &[&str]) -> RatingStore {
        let rows = lines
            .iter()
            .enumerate()
            .map(|(i, l)| (i + 1, (*l).to_string()));
        RatingStore::build(rows).0
    }

    #[test]
    fn test_unknown_target_user() {
        let s = store(&["U1,I1,5"]);
        let err = UserCf::new().recommend(&s, "U9").unwrap_err();
        assert!(matches!(err, SugerirError::UnknownUser { .. }));
    }

    #[test]
    fn test_empty_store_is_unknown_user() {
        let s = store(&[]);
        let err = UserCf::new().recommend(&s, "U1").unwrap_err();
        assert!(matches!(err, SugerirError::UnknownUser { .. }));
    }

    #[test]
    fn test_personalized_path() {
        let s = store(&["U1,I1,5", "U1,I2,4", "U2,I1,5", "U2,I3,4"]);
        let report = UserCf::new().recommend(&s, "U1").unwrap();
        assert!(report.personalized);
        assert_eq!(report.neighbors.len(), 1);
        assert_eq!(report.recommendations.len(), 1);
        assert_eq!(report.recommendations[0].item_id, "I3");
    }

    #[test]
    fn test_fallback_when_no_overlap() {
        // U2 shares nothing with U1; similarity 0 keeps the neighbor out of
        // prediction, so the popularity path fills in.
        let s = store(&["U1,I1,5", "U2,I2,4", "U3,I2,2", "U3,I3,5"]);
        let report = UserCf::new().recommend(&s, "U1").unwrap();
        assert!(!report.personalized);
        assert!(!report.recommendations.is_empty());
        assert_eq!(report.recommendations[0].item_id, "I3");
    }

    #[test]
    fn test_k_zero_falls_back() {
        let s = store(&["U1,I1,5", "U2,I1,4", "U2,I2,3"]);
        let report = UserCf::new().with_k(0).recommend(&s, "U1").unwrap();
        assert!(report.neighbors.is_empty());
        assert!(!report.personalized);
        assert_eq!(report.recommendations[0].item_id, "I2");
    }

    #[test]
    fn test_top_n_zero_yields_empty_fallback_list() {
        // No prediction candidates can survive a zero cap, and the
        // fallback is capped the same way.
        let s = store(&["U1,I1,5", "U2,I1,4", "U2,I2,3"]);
        let report = UserCf::new().with_top_n(0).recommend(&s, "U1").unwrap();
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_default_parameters() {
        assert_eq!(UserCf::default(), UserCf::new());
        assert_eq!(UserCf::new(), UserCf::new().with_k(3).with_top_n(5));
    }
}

#[cfg(test)]
#[path = "pipeline_tests_contract.rs"]
mod tests_contract;
