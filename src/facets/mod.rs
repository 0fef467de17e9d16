//! Faceted filtering over the catalog
//!
//! Values selected within one facet combine with OR; the two facets combine
//! with AND. Empty facet sets mean "no constraint", never "exclude all".
//! Items that pass keep their catalog order, so the result is a stable
//! subset of the input.

mod state;

pub use state::{FilterState, SortMode};

use crate::catalog::{Item, ItemType};
use crate::search;
use std::collections::BTreeSet;

/// Reduce `items` to those satisfying the selected type and tag facets
///
/// An item with no type fails any non-empty type selection, and an item
/// with no tags fails any non-empty tag selection.
pub fn by_facets<'a>(
    items: impl IntoIterator<Item = &'a Item>,
    selected_types: &BTreeSet<ItemType>,
    selected_tags: &BTreeSet<String>,
) -> Vec<&'a Item> {
    items
        .into_iter()
        .filter(|item| {
            let type_ok = selected_types.is_empty()
                || item.kind.is_some_and(|kind| selected_types.contains(&kind));
            let tag_ok = selected_tags.is_empty()
                || item.tags.iter().any(|tag| selected_tags.contains(tag));
            type_ok && tag_ok
        })
        .collect()
}

/// The full display pipeline: facet filter, then text search and ranking
#[must_use]
pub fn apply<'a>(items: &'a [Item], state: &FilterState) -> Vec<&'a Item> {
    let faceted = by_facets(items, &state.selected_types, &state.selected_tags);
    search::rank::search_and_sort(faceted, &state.text_query, state.sort_mode)
}
