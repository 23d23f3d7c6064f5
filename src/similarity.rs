//! User-user cosine similarity with overlap shrinkage.
//!
//! The cosine is computed over co-rated items only, but each user's norm
//! covers their **full** rating profile, not just the overlap. That is
//! intentional: the norm reflects how a user rates overall, so two users
//! who agree on a small slice of a large profile score lower than two
//! users whose whole profiles overlap. Do not symmetrize the norms.
//!
//! A shrinkage factor `|common| / (|common| + 5)` then discounts scores
//! built from few co-rated items, following the damping scheme of
//! Bell & Koren (2007), "Scalable Collaborative Filtering with Jointly
//! Derived Neighborhood Interpolation Weights".

use crate::store::RatingStore;
use std::collections::BTreeMap;

/// Fixed damping constant for overlap shrinkage.
///
/// One co-rated item keeps ~17% of the raw cosine; twenty keep 80%. This
/// discounts statistically weak overlaps without a hard minimum-overlap
/// cutoff.
pub const SHRINKAGE_DAMPING: f64 = 5.0;

/// Shrinkage factor for an overlap of `common` co-rated items.
///
/// Strictly increasing in `common`, approaching (never reaching) 1.
///
/// # Examples
///
/// ```
/// use sugerir::similarity::shrinkage;
///
/// assert!((shrinkage(1) - 1.0 / 6.0).abs() < 1e-12);
/// assert!((shrinkage(20) - 0.8).abs() < 1e-12);
/// assert!(shrinkage(1000) < 1.0);
/// ```
#[must_use]
pub fn shrinkage(common: usize) -> f64 {
    common as f64 / (common as f64 + SHRINKAGE_DAMPING)
}

/// Compute the similarity between `target` and every other user in the
/// store.
///
/// Every non-target user receives a defined score, possibly 0.0 (no
/// overlap, or a zero norm). The target itself never appears in the
/// result. Scores are recomputed fresh on every call; nothing is cached.
///
/// # Examples
///
/// ```
/// use sugerir::similarity::similarities;
/// use sugerir::store::RatingStore;
///
/// let rows = ["U1,I1,5", "U1,I2,4", "U2,I1,5", "U3,I9,1"]
///     .iter()
///     .enumerate()
///     .map(|(i, l)| (i + 1, (*l).to_string()));
/// let (store, _) = RatingStore::build(rows);
///
/// let sims = similarities(&store, "U1");
/// assert!(!sims.contains_key("U1"));
/// assert!(sims["U2"] > 0.0);
/// assert_eq!(sims["U3"], 0.0); // no co-rated items
/// ```
#[must_use]
pub fn similarities(store: &RatingStore, target: &str) -> BTreeMap<String, f64> {
    let target_ratings = store.ratings_of(target);
    let mut sims = BTreeMap::new();

    for other in store.users() {
        if other == target {
            continue;
        }
        let other_ratings = store.ratings_of(other);

        let mut dot = 0.0;
        let mut common = 0usize;
        for (item, a) in target_ratings {
            if let Some(b) = other_ratings.get(item) {
                dot += a * b;
                common += 1;
            }
        }
        if common == 0 {
            sims.insert(other.to_string(), 0.0);
            continue;
        }

        // Norms over each user's full profile, not just the overlap.
        let norm_t: f64 = target_ratings.values().map(|a| a * a).sum();
        let norm_o: f64 = other_ratings.values().map(|b| b * b).sum();
        let denom = norm_t.sqrt() * norm_o.sqrt();
        let cosine = if denom == 0.0 { 0.0 } else { dot / denom };

        sims.insert(other.to_string(), cosine * shrinkage(common));
    }

    sims
}
