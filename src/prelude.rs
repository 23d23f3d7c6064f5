//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use sugerir::prelude::*;
//! ```

pub use crate::error::{Result, SugerirError};
pub use crate::neighbors::Neighbor;
pub use crate::pipeline::{Report, UserCf, DEFAULT_K, DEFAULT_TOP_N};
pub use crate::predict::Recommendation;
pub use crate::store::{Rating, RatingStore, SkipReason, SkippedRow};
