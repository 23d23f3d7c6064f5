//! Sugerir: user-based collaborative filtering in pure Rust.
//!
//! Sugerir recommends items to a target user from a sparse user-item
//! rating matrix: cosine similarity over co-rated items (with overlap
//! shrinkage), top-K neighbor selection, similarity-weighted score
//! prediction, and a popularity fallback when personalization is
//! impossible. The whole pipeline is single-pass and deterministic for a
//! given input.
//!
//! # Quick Start
//!
//! ```
//! use sugerir::prelude::*;
//!
//! let rows = ["U1,I1,5", "U1,I2,4", "U2,I1,5", "U2,I3,4"]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, line)| (i + 1, (*line).to_string()));
//! let (store, skipped) = RatingStore::build(rows);
//! assert!(skipped.is_empty());
//!
//! let report = UserCf::new()
//!     .with_k(3)
//!     .with_top_n(5)
//!     .recommend(&store, "U1")
//!     .unwrap();
//!
//! assert!(report.personalized);
//! assert_eq!(report.recommendations[0].item_id, "I3");
//! ```
//!
//! # Modules
//!
//! - [`store`]: the rating set, indexed by user and by item
//! - [`similarity`]: shrunk cosine similarity between users
//! - [`neighbors`]: top-K neighbor selection
//! - [`predict`]: weighted-average score prediction
//! - [`popularity`]: global mean-rating fallback
//! - [`pipeline`]: the end-to-end recommender
//! - [`dataset`]: rating-file loading and the bundled sample dataset

pub mod dataset;
pub mod error;
pub mod neighbors;
pub mod pipeline;
pub mod popularity;
pub mod predict;
pub mod prelude;
pub mod similarity;
pub mod store;

pub use error::{Result, SugerirError};
pub use pipeline::{Report, UserCf};
pub use store::RatingStore;
