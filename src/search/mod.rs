//! Search, ranking, and recommendation over catalog items
//!
//! Three independent pure components:
//! - [`fuzzy`]: ordered-subsequence matching for incremental tag lookup
//! - [`rank`]: free-text substring filtering plus the stable display order
//! - [`related`]: thematic similarity scoring for a focused item

pub mod fuzzy;
pub mod rank;
pub mod related;

pub use fuzzy::matches;
pub use rank::search_and_sort;
pub use related::{DEFAULT_RELATED_LIMIT, related_to};
