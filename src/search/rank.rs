//! Free-text filtering and display ordering
//!
//! The text filter is a plain substring test over an item's searchable
//! fields: title, description, type name, and the space-joined tag list.
//! This is deliberately distinct from the subsequence matcher in
//! [`super::fuzzy`], which serves tag lookup only.

use crate::catalog::Item;
use crate::facets::SortMode;
use std::cmp::Ordering;

/// Case-insensitive ordering used for every display comparison
///
/// Compares the lowercase expansions of both strings; callers pass the
/// empty string for missing keys, which therefore sort first.
#[must_use]
pub fn caseless_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Comparator producing the final grid order
#[must_use]
pub fn display_order(a: &Item, b: &Item, mode: SortMode) -> Ordering {
    if mode == SortMode::ByTypeThenTitle {
        let by_type = caseless_cmp(a.type_name(), b.type_name());
        if by_type != Ordering::Equal {
            return by_type;
        }
    }
    caseless_cmp(&a.title, &b.title)
}

fn matches_lowercased_query(item: &Item, query: &str) -> bool {
    item.title.to_lowercase().contains(query)
        || item.description.to_lowercase().contains(query)
        || item.type_name().contains(query)
        || item.tags.join(" ").to_lowercase().contains(query)
}

/// Text-filter `items`, then sort them into display order
///
/// A trimmed-empty query passes every item. The sort is stable, so items
/// with equal keys keep their relative order and re-sorting an already
/// sorted sequence is the identity.
#[must_use]
pub fn search_and_sort<'a>(
    items: Vec<&'a Item>,
    text_query: &str,
    mode: SortMode,
) -> Vec<&'a Item> {
    let query = text_query.trim().to_lowercase();
    let mut shown = if query.is_empty() {
        items
    } else {
        items
            .into_iter()
            .filter(|item| matches_lowercased_query(item, &query))
            .collect()
    };
    shown.sort_by(|a, b| display_order(a, b, mode));
    shown
}
