//! Session filter state and its transition operations
//!
//! `FilterState` is an explicit value passed into and returned from engine
//! functions; there is no ambient mutable state. Every mutation goes
//! through a consuming transition method, and toggles are involutive:
//! toggling the same value twice restores the prior membership.

use crate::catalog::ItemType;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Display ordering for the result grid
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Order by title alone
    #[default]
    ByTitle,
    /// Order by type name, then by title within each type
    ByTypeThenTitle,
}

/// Facet and query selections for one browsing session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Selected type facets; empty means no type constraint
    pub selected_types: BTreeSet<ItemType>,
    /// Selected tag facets; empty means no tag constraint
    pub selected_tags: BTreeSet<String>,
    /// Free-text query over the searchable item fields
    pub text_query: String,
    pub sort_mode: SortMode,
}

impl FilterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of a type facet
    #[must_use]
    pub fn toggle_type(mut self, kind: ItemType) -> Self {
        if !self.selected_types.remove(&kind) {
            self.selected_types.insert(kind);
        }
        self
    }

    /// Flip membership of a tag facet
    #[must_use]
    pub fn toggle_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.selected_tags.remove(&tag) {
            self.selected_tags.insert(tag);
        }
        self
    }

    #[must_use]
    pub fn set_text_query(mut self, query: impl Into<String>) -> Self {
        self.text_query = query.into();
        self
    }

    #[must_use]
    pub const fn set_sort_mode(mut self, mode: SortMode) -> Self {
        self.sort_mode = mode;
        self
    }

    /// Return to the initial state: no facets, no query, default ordering
    #[must_use]
    pub fn clear_all(self) -> Self {
        Self::default()
    }

    /// Number of selected facet values across both facets
    #[must_use]
    pub fn active_facet_count(&self) -> usize {
        self.selected_types.len() + self.selected_tags.len()
    }

    #[must_use]
    pub fn has_active_facets(&self) -> bool {
        self.active_facet_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_type_is_involutive() {
        let initial = FilterState::new();
        let toggled = initial.clone().toggle_type(ItemType::Report);
        assert!(toggled.selected_types.contains(&ItemType::Report));

        let restored = toggled.toggle_type(ItemType::Report);
        assert_eq!(restored, initial);
    }

    #[test]
    fn test_toggle_tag_is_involutive() {
        let initial = FilterState::new().toggle_tag("elections");
        let toggled = initial.clone().toggle_tag("civic-tech");
        assert_eq!(toggled.selected_tags.len(), 2);

        let restored = toggled.toggle_tag("civic-tech");
        assert_eq!(restored, initial);
    }

    #[test]
    fn test_clear_all_restores_default() {
        let state = FilterState::new()
            .toggle_type(ItemType::Data)
            .toggle_tag("open-data")
            .set_text_query("turnout")
            .set_sort_mode(SortMode::ByTypeThenTitle);

        assert_eq!(state.clear_all(), FilterState::default());
    }

    #[test]
    fn test_active_facet_count_ignores_query() {
        let state = FilterState::new()
            .toggle_type(ItemType::Events)
            .toggle_tag("events")
            .set_text_query("summit");

        assert_eq!(state.active_facet_count(), 2);
        assert!(state.has_active_facets());
        assert!(!FilterState::new().has_active_facets());
    }

    #[test]
    fn test_default_sort_mode_is_by_title() {
        assert_eq!(FilterState::default().sort_mode, SortMode::ByTitle);
    }
}
