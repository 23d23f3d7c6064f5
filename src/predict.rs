//! Weighted-average rating prediction over a neighbor set.

use crate::neighbors::Neighbor;
use crate::store::RatingStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A recommended item with its predicted (or fallback) score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Item identifier.
    pub item_id: String,
    /// Predicted rating (personalized) or mean rating (fallback).
    pub score: f64,
}

/// Predict scores for items the neighbors rated but `target` has not.
///
/// Per candidate item the score is the similarity-weighted average of the
/// neighbors' ratings, counting only neighbors whose similarity is
/// strictly positive. A zero or negative neighbor never contributes even
/// though selection may have kept it. Items whose weight sum is zero (no
/// qualifying neighbor rated them) are dropped, not scored 0.
///
/// Returns at most `top_n` recommendations, descending by score, ties
/// ascending by item id. An empty result means the caller should fall
/// back to popularity ranking.
///
/// # Examples
///
/// ```
/// use sugerir::neighbors::Neighbor;
/// use sugerir::predict::predict;
/// use sugerir::store::RatingStore;
///
/// let rows = ["U1,I1,5", "U2,I1,5", "U2,I2,4"]
///     .iter()
///     .enumerate()
///     .map(|(i, l)| (i + 1, (*l).to_string()));
/// let (store, _) = RatingStore::build(rows);
/// let neighbors = vec![Neighbor { user_id: "U2".to_string(), similarity: 0.3 }];
///
/// let recs = predict(&store, "U1", &neighbors, 5);
/// // Single positive contributor: the weighted average collapses to the
/// // neighbor's own rating.
/// assert_eq!(recs.len(), 1);
/// assert_eq!(recs[0].item_id, "I2");
/// assert!((recs[0].score - 4.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn predict(
    store: &RatingStore,
    target: &str,
    neighbors: &[Neighbor],
    top_n: usize,
) -> Vec<Recommendation> {
    let seen = store.ratings_of(target);

    let mut candidates: BTreeSet<&str> = BTreeSet::new();
    for neighbor in neighbors {
        for item in store.ratings_of(&neighbor.user_id).keys() {
            if !seen.contains_key(item) {
                candidates.insert(item);
            }
        }
    }
    if candidates.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();
    for item in candidates {
        let mut num = 0.0;
        let mut den = 0.0;
        for neighbor in neighbors {
            if neighbor.similarity <= 0.0 {
                continue;
            }
            if let Some(r) = store.ratings_of(&neighbor.user_id).get(item) {
                num += neighbor.similarity * r;
                den += neighbor.similarity.abs();
            }
        }
        if den > 0.0 {
            results.push(Recommendation {
                item_id: item.to_string(),
                score: num / den,
            });
        }
    }

    sort_and_truncate(results, top_n)
}

/// Sort descending by score (ties ascending by item id) and keep `top_n`.
pub(crate) fn sort_and_truncate(
    mut results: Vec<Recommendation>,
    top_n: usize,
) -> Vec<Recommendation> {
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.item_id.cmp(&b.item_id))
    });
    results.truncate(top_n);
    results
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

    fn neighbor(user: &str, sim: f64) -> Neighbor {
        Neighbor {
            user_id: user.to_string(),
            similarity: sim,
        }
    }

    #[test]
    fn test_seen_items_excluded_from_candidates() {
        let s = store(&["U1,I1,5", "U2,I1,4", "U2,I2,3"]);
        let recs = predict(&s, "U1", &[neighbor("U2", 0.5)], 5);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].item_id, "I2");
    }

    #[test]
    fn test_empty_candidates_returns_empty() {
        // Neighbor rated nothing the target hasn't.
        let s = store(&["U1,I1,5", "U1,I2,4", "U2,I1,4"]);
        let recs = predict(&s, "U1", &[neighbor("U2", 0.5)], 5);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_no_neighbors_returns_empty() {
        let s = store(&["U1,I1,5", "U2,I2,4"]);
        let recs = predict(&s, "U1", &[], 5);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_weighted_average() {
        let s = store(&["U1,I1,5", "U2,I2,4", "U3,I2,2"]);
        let recs = predict(&s, "U1", &[neighbor("U2", 0.6), neighbor("U3", 0.2)], 5);
        assert_eq!(recs.len(), 1);
        let expected = (0.6 * 4.0 + 0.2 * 2.0) / (0.6 + 0.2);
        assert!((recs[0].score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_single_positive_contributor_collapses_to_rating() {
        let s = store(&["U1,I1,5", "U2,I2,4"]);
        let recs = predict(&s, "U1", &[neighbor("U2", 0.123)], 5);
        assert!((recs[0].score - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_positive_similarity_never_contributes() {
        // The only rater of I2 has negative similarity: the item must be
        // absent from the output, not scored 0.
        let s = store(&["U1,I1,5", "U2,I2,4", "U3,I3,3"]);
        let recs = predict(&s, "U1", &[neighbor("U2", -0.4), neighbor("U3", 0.5)], 5);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].item_id, "I3");
    }

    #[test]
    fn test_zero_similarity_never_contributes() {
        let s = store(&["U1,I1,5", "U2,I2,4"]);
        let recs = predict(&s, "U1", &[neighbor("U2", 0.0)], 5);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_negative_neighbor_does_not_skew_positive_raters() {
        // I2 rated by both a positive and a negative neighbor: only the
        // positive one counts.
        let s = store(&["U1,I1,5", "U2,I2,4", "U3,I2,1"]);
        let recs = predict(&s, "U1", &[neighbor("U2", 0.5), neighbor("U3", -0.9)], 5);
        assert_eq!(recs.len(), 1);
        assert!((recs[0].score - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_truncates_to_top_n() {
        let s = store(&["U1,I0,5", "U2,I1,5", "U2,I2,4", "U2,I3,3", "U2,I4,2"]);
        let recs = predict(&s, "U1", &[neighbor("U2", 0.5)], 2);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].item_id, "I1");
        assert_eq!(recs[1].item_id, "I2");
    }

    #[test]
    fn test_score_ties_break_by_item_id() {
        let s = store(&["U1,I0,5", "U2,I9,4", "U2,I2,4", "U2,I5,4"]);
        let recs = predict(&s, "U1", &[neighbor("U2", 0.5)], 5);
        let ids: Vec<&str> = recs.iter().map(|r| r.item_id.as_str()).collect();
        assert_eq!(ids, vec!["I2", "I5", "I9"]);
    }
}
