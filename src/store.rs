//! Rating storage: user-item and item-user indexes over a rating set.
//!
//! [`RatingStore`] is built once from raw input rows and is read-only for
//! the rest of the run. Both indexes are `BTreeMap`s so every iteration
//! over users or items is lexicographic, which makes the whole pipeline
//! deterministic without any extra sorting discipline downstream.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single (user, item, rating) observation.
///
/// The rating value must be finite; no range is enforced (the bundled
/// sample dataset uses 1–5, but nothing depends on that).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// User identifier.
    pub user_id: String,
    /// Item identifier.
    pub item_id: String,
    /// Rating value.
    pub value: f64,
}

/// Why an input row was dropped during [`RatingStore::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Row did not split into exactly three fields.
    FieldCount,
    /// Rating field failed to parse as a finite number.
    BadRating,
}

/// Diagnostic for an input row dropped during [`RatingStore::build`].
///
/// Skipped rows are reported, never fatal: the build continues with the
/// remaining rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// 1-based line number in the input.
    pub line: usize,
    /// Raw row text (trimmed).
    pub text: String,
    /// Why the row was dropped.
    pub reason: SkipReason,
}

/// Immutable-after-construction store of all known ratings, indexed both
/// by user and by item.
///
/// # Examples
///
/// ```
/// use sugerir::store::RatingStore;
///
/// let rows = ["U1,I1,5", "U1,I2,4", "U2,I1,3"]
///     .iter()
///     .enumerate()
///     .map(|(i, line)| (i + 1, (*line).to_string()));
/// let (store, skipped) = RatingStore::build(rows);
///
/// assert!(skipped.is_empty());
/// assert_eq!(store.n_ratings(), 3);
/// assert_eq!(store.ratings_of("U1").len(), 2);
/// assert_eq!(store.raters_of("I1").len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingStore {
    /// user -> (item -> rating)
    by_user: BTreeMap<String, BTreeMap<String, f64>>,
    /// item -> (user -> rating)
    by_item: BTreeMap<String, BTreeMap<String, f64>>,
}

impl RatingStore {
    /// Build a store from raw `(line_number, text)` rows.
    ///
    /// Per row: trims whitespace; silently skips empty lines, `#` comments
    /// and the `userId,...` header; records a [`SkippedRow`] diagnostic for
    /// rows with the wrong field count or an unparseable rating. A repeated
    /// (user, item) pair overwrites the earlier rating (last write wins).
    #[must_use]
    pub fn build<I>(rows: I) -> (Self, Vec<SkippedRow>)
    where
        I: IntoIterator<Item = (usize, String)>,
    {
        let mut store = Self::default();
        let mut skipped = Vec::new();

        for (line, raw) in rows {
            let text = raw.trim();
            if text.is_empty() || text.starts_with('#') || text.starts_with("userId") {
                continue;
            }
            let parts: Vec<&str> = text.split(',').collect();
            if parts.len() != 3 {
                skipped.push(SkippedRow {
                    line,
                    text: text.to_string(),
                    reason: SkipReason::FieldCount,
                });
                continue;
            }
            let value = parts[2].trim().parse::<f64>();
            match value {
                Ok(v) if v.is_finite() => {
                    store.insert(parts[0].trim(), parts[1].trim(), v);
                }
                _ => {
                    skipped.push(SkippedRow {
                        line,
                        text: text.to_string(),
                        reason: SkipReason::BadRating,
                    });
                }
            }
        }

        (store, skipped)
    }

    fn insert(&mut self, user: &str, item: &str, value: f64) {
        self.by_user
            .entry(user.to_string())
            .or_default()
            .insert(item.to_string(), value);
        self.by_item
            .entry(item.to_string())
            .or_default()
            .insert(user.to_string(), value);
    }

    /// All ratings given by `user`, keyed by item. Empty for unknown users.
    #[must_use]
    pub fn ratings_of(&self, user: &str) -> &BTreeMap<String, f64> {
        self.by_user.get(user).unwrap_or(Self::empty())
    }

    /// All ratings received by `item`, keyed by user. Empty for unknown items.
    #[must_use]
    pub fn raters_of(&self, item: &str) -> &BTreeMap<String, f64> {
        self.by_item.get(item).unwrap_or(Self::empty())
    }

    /// Whether `user` has at least one rating.
    #[must_use]
    pub fn contains_user(&self, user: &str) -> bool {
        self.by_user.contains_key(user)
    }

    /// All known user ids, in lexicographic order.
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.by_user.keys().map(String::as_str)
    }

    /// All stored ratings as [`Rating`] triples, ordered by user then item.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugerir::store::RatingStore;
    ///
    /// let rows = ["U2,I1,3", "U1,I2,4", "U1,I1,5"]
    ///     .iter()
    ///     .enumerate()
    ///     .map(|(i, l)| (i + 1, (*l).to_string()));
    /// let (store, _) = RatingStore::build(rows);
    ///
    /// let triples: Vec<(String, String, f64)> = store
    ///     .ratings()
    ///     .map(|r| (r.user_id, r.item_id, r.value))
    ///     .collect();
    /// assert_eq!(triples[0], ("U1".to_string(), "I1".to_string(), 5.0));
    /// assert_eq!(triples.len(), 3);
    /// ```
    pub fn ratings(&self) -> impl Iterator<Item = Rating> + '_ {
        self.by_user.iter().flat_map(|(user, items)| {
            items.iter().map(move |(item, &value)| Rating {
                user_id: user.clone(),
                item_id: item.clone(),
                value,
            })
        })
    }

    /// All known item ids with their rater maps, in lexicographic order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, f64>)> {
        self.by_item.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of distinct users.
    #[must_use]
    pub fn n_users(&self) -> usize {
        self.by_user.len()
    }

    /// Number of distinct items.
    #[must_use]
    pub fn n_items(&self) -> usize {
        self.by_item.len()
    }

    /// Total number of stored ratings.
    #[must_use]
    pub fn n_ratings(&self) -> usize {
        self.by_user.values().map(BTreeMap::len).sum()
    }

    /// Whether the store holds no ratings at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_user.is_empty()
    }

    fn empty() -> &'static BTreeMap<String, f64> {
        static EMPTY: BTreeMap<String, f64> = BTreeMap::new();
        &EMPTY
    }
}
