//! Popularity fallback: rank unseen items by their global mean rating.
//!
//! Used when personalized prediction produces no candidates. The mean is
//! taken across **all** users, not just the target's neighbors.

use crate::predict::{sort_and_truncate, Recommendation};
use crate::store::RatingStore;

/// Rank the items `target` has not rated by mean rating, highest first.
///
/// Ties break ascending by item id. An empty store yields an empty
/// result; there is no other failure mode.
///
/// # Examples
///
/// ```
/// use sugerir::popularity::popular;
/// use sugerir::store::RatingStore;
///
/// let rows = ["U1,I1,5", "U2,I2,5", "U3,I2,4", "U2,I3,2"]
///     .iter()
///     .enumerate()
///     .map(|(i, l)| (i + 1, (*l).to_string()));
/// let (store, _) = RatingStore::build(rows);
///
/// let recs = popular(&store, "U1", 5);
/// assert_eq!(recs[0].item_id, "I2"); // mean 4.5
/// assert_eq!(recs[1].item_id, "I3"); // mean 2.0
/// ```
#[must_use]
pub fn popular(store: &RatingStore, target: &str, top_n: usize) -> Vec<Recommendation> {
    let seen = store.ratings_of(target);

    let results: Vec<Recommendation> = store
        .items()
        .filter(|(item, _)| !seen.contains_key(*item))
        .map(|(item, raters)| {
            let sum: f64 = raters.values().sum();
            Recommendation {
                item_id: item.to_string(),
                score: sum / raters.len() as f64,
            }
        })
        .collect();

    sort_and_truncate(results, top_n)
}
