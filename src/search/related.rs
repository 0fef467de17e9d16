//! Content-based recommendations for a focused item
//!
//! Similarity is tag overlap weighted over type match: each shared tag is
//! worth three points, a matching type one. Items scoring zero are dropped
//! entirely rather than ranked last.

use crate::catalog::Item;
use std::collections::HashSet;

/// Default number of recommendations returned by [`related_to`]
pub const DEFAULT_RELATED_LIMIT: usize = 5;

/// Thematic similarity between a focal item and a candidate
///
/// Candidate tags are counted as they appear, so a duplicated tag that is
/// present in the focal set counts twice. The type point requires both
/// items to carry a type.
#[must_use]
pub fn thematic_score(focal: &Item, candidate: &Item) -> u32 {
    let focal_tags: HashSet<&str> = focal.tags.iter().map(String::as_str).collect();
    let overlap = candidate
        .tags
        .iter()
        .filter(|tag| focal_tags.contains(tag.as_str()))
        .count() as u32;
    let same_type = u32::from(candidate.kind.is_some() && candidate.kind == focal.kind);
    overlap * 3 + same_type
}

/// Rank the rest of the catalog by similarity to `focal`
///
/// Scoring ties keep catalog order; there is deliberately no secondary
/// sort key. Returns an empty sequence when nothing scores above zero or
/// the catalog holds fewer than two entries.
#[must_use]
pub fn related_to<'a>(focal: &Item, all_items: &'a [Item], limit: usize) -> Vec<&'a Item> {
    if all_items.len() < 2 {
        return Vec::new();
    }

    let mut scored: Vec<(&Item, u32)> = all_items
        .iter()
        .filter(|candidate| candidate.id != focal.id)
        .map(|candidate| (candidate, thematic_score(focal, candidate)))
        .filter(|(_, score)| *score > 0)
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(limit);
    scored.into_iter().map(|(candidate, _)| candidate).collect()
}
