//! Top-K neighbor selection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A user selected as similar to the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    /// Neighbor user id.
    pub user_id: String,
    /// Similarity to the target user.
    pub similarity: f64,
}

/// Select the `k` highest-scoring users.
///
/// Sorted descending by similarity; ties break ascending by user id so
/// repeated runs on the same input produce identical output. Non-positive
/// scores are **not** filtered here: a zero or negative neighbor can be
/// selected when `k` exceeds the number of better candidates (prediction
/// applies its own positivity filter later).
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use sugerir::neighbors::top_k;
///
/// let scores: BTreeMap<String, f64> = [("U2", 0.4), ("U3", 0.9), ("U4", -0.1)]
///     .into_iter()
///     .map(|(u, s)| (u.to_string(), s))
///     .collect();
///
/// let top = top_k(&scores, 2);
/// assert_eq!(top.len(), 2);
/// assert_eq!(top[0].user_id, "U3");
/// assert_eq!(top[1].user_id, "U2");
/// ```
#[must_use]
pub fn top_k(scores: &BTreeMap<String, f64>, k: usize) -> Vec<Neighbor> {
    let mut neighbors: Vec<Neighbor> = scores
        .iter()
        .map(|(user_id, &similarity)| Neighbor {
            user_id: user_id.clone(),
            similarity,
        })
        .collect();

    // Scores are finite by construction; Equal is an unreachable fallback.
    neighbors.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });
    neighbors.truncate(k);
    neighbors
}
