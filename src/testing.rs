//! Testing utilities for vitrine
//!
//! Sample catalog builders shared by unit tests across modules.
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Item, ItemId, ItemType};

/// Build a minimal item with the fields most tests care about
#[must_use]
pub fn item(id: u64, title: &str, kind: Option<ItemType>, tags: &[&str]) -> Item {
    Item {
        id: ItemId::Number(id),
        title: title.to_string(),
        kind,
        description: String::new(),
        tags: tags.iter().map(ToString::to_string).collect(),
        resource: String::new(),
        image: None,
        has_rich_content: false,
    }
}

/// A small fixed catalog resembling a civic-data showcase
#[must_use]
pub fn sample_items() -> Vec<Item> {
    vec![
        item(
            1,
            "Voter Turnout Atlas",
            Some(ItemType::Data),
            &["elections", "data-visualization"],
        ),
        item(
            2,
            "Ballot Basics Explainer",
            Some(ItemType::Report),
            &["civic-education", "elections"],
        ),
        item(
            3,
            "District Boundary Quiz",
            Some(ItemType::Interactive),
            &["civic-education", "civic-tech"],
        ),
        item(
            4,
            "Open Data Summit Recap",
            Some(ItemType::Events),
            &["events", "open-data"],
        ),
        item(
            5,
            "Turnout Trends Report",
            Some(ItemType::Report),
            &["elections", "data-analysis"],
        ),
    ]
}
