//! Integration tests for the vitrine discovery engine
//!
//! These tests run the complete pipeline over a fixture catalog: parsing,
//! faceted filtering, free-text search and ranking, recommendations, and
//! embed classification.

use std::collections::BTreeSet;
use vitrine::catalog::{Catalog, ItemType};
use vitrine::embed::{self, EmbedMode};
use vitrine::facets::{self, FilterState, SortMode};
use vitrine::search;

const FIXTURE: &str = include_str!("fixtures/catalog.json");

fn fixture_catalog() -> Catalog {
    Catalog::from_json(FIXTURE).unwrap()
}

fn titles(items: &[&vitrine::catalog::Item]) -> Vec<String> {
    items.iter().map(|i| i.title.clone()).collect()
}

#[test]
fn test_fixture_catalog_loads() {
    let catalog = fixture_catalog();
    assert_eq!(catalog.len(), 7);

    // mixed id forms both resolve
    assert!(catalog.find("1").is_some());
    assert!(catalog.find("quiz-01").is_some());

    // partial records fall back to defaults
    let partial = catalog.find("7").unwrap();
    assert!(partial.kind.is_none());
    assert!(partial.description.is_empty());
}

#[test]
fn test_tag_universe_is_sorted() {
    let catalog = fixture_catalog();
    let tags = catalog.tag_universe();

    let mut expected = tags.clone();
    expected.sort();
    expected.dedup();
    assert_eq!(tags, expected);
    assert!(tags.contains(&"civic-tech".to_string()));
}

#[test]
fn test_default_state_shows_everything_sorted_by_title() {
    let catalog = fixture_catalog();
    let shown = facets::apply(catalog.items(), &FilterState::default());

    assert_eq!(shown.len(), catalog.len());
    let shown_titles = titles(&shown);
    let mut expected = shown_titles.clone();
    expected.sort_by_key(|t| t.to_lowercase());
    assert_eq!(shown_titles, expected);
}

#[test]
fn test_facets_and_query_narrow_the_grid() {
    let catalog = fixture_catalog();
    let state = FilterState::new()
        .toggle_type(ItemType::Interactive)
        .toggle_tag("civic-tech")
        .set_text_query("finance");

    let shown = facets::apply(catalog.items(), &state);
    assert_eq!(titles(&shown), vec!["Candidate Finance Browser"]);
}

#[test]
fn test_tag_facets_are_or_within_the_facet() {
    let catalog = fixture_catalog();
    let tags: BTreeSet<String> = ["events", "open-data"]
        .iter()
        .map(ToString::to_string)
        .collect();

    let shown = facets::by_facets(catalog.items(), &BTreeSet::new(), &tags);
    // the summit matches both values, the survey feed matches one
    assert_eq!(shown.len(), 2);
}

#[test]
fn test_type_then_title_ordering() {
    let catalog = fixture_catalog();
    let state = FilterState::new().set_sort_mode(SortMode::ByTypeThenTitle);

    let shown = facets::apply(catalog.items(), &state);
    // the untyped item sorts first, then type names alphabetically
    assert_eq!(shown[0].title, "annotated survey feed");
    let type_names: Vec<&str> = shown.iter().map(|i| i.type_name()).collect();
    let mut expected = type_names.clone();
    expected.sort_unstable();
    assert_eq!(type_names, expected);
}

#[test]
fn test_pipeline_is_idempotent() {
    let catalog = fixture_catalog();
    let state = FilterState::new().set_sort_mode(SortMode::ByTypeThenTitle);

    let once = facets::apply(catalog.items(), &state);
    let twice = search::search_and_sort(once.clone(), "", SortMode::ByTypeThenTitle);
    assert_eq!(titles(&once), titles(&twice));
}

#[test]
fn test_related_items_for_the_turnout_atlas() {
    let catalog = fixture_catalog();
    let focal = catalog.find("1").unwrap();

    let related = search::related_to(focal, catalog.items(), search::DEFAULT_RELATED_LIMIT);
    let related_titles = titles(&related);

    // every "elections"-tagged peer qualifies; the summit and quiz share nothing
    assert!(related_titles.contains(&"Turnout Trends Report".to_string()));
    assert!(related_titles.contains(&"Candidate Finance Browser".to_string()));
    assert!(!related_titles.contains(&"Open Data Summit Recap".to_string()));
    assert!(!related_titles.contains(&"District Boundary Quiz".to_string()));

    // all three tie on one shared tag, so catalog order decides
    assert_eq!(
        titles(&related),
        vec![
            "Ballot Basics Explainer",
            "Turnout Trends Report",
            "Candidate Finance Browser"
        ]
    );
}

#[test]
fn test_fixture_resources_classify_per_table() {
    let catalog = fixture_catalog();
    let expected = [
        ("1", EmbedMode::DataPreview),
        ("2", EmbedMode::Iframe),
        ("quiz-01", EmbedMode::Iframe),
        ("4", EmbedMode::Link),
        ("5", EmbedMode::None),
        ("6", EmbedMode::Iframe),
        ("7", EmbedMode::DataPreview),
    ];

    for (id, mode) in expected {
        let item = catalog.find(id).unwrap();
        assert_eq!(embed::classify(&item.resource), mode, "item {id}");
    }
}

#[test]
fn test_toggling_back_restores_the_full_grid() {
    let catalog = fixture_catalog();
    let state = FilterState::new()
        .toggle_tag("elections")
        .toggle_type(ItemType::Report);
    let narrowed = facets::apply(catalog.items(), &state).len();
    assert!(narrowed < catalog.len());

    let state = state
        .toggle_tag("elections")
        .toggle_type(ItemType::Report);
    assert_eq!(facets::apply(catalog.items(), &state).len(), catalog.len());
}

#[test]
fn test_catalog_loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, FIXTURE).unwrap();

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 7);
}

#[test]
fn test_empty_catalog_never_errors() {
    let catalog = Catalog::from_json("[]").unwrap();
    assert!(catalog.is_empty());

    let shown = facets::apply(catalog.items(), &FilterState::default());
    assert!(shown.is_empty());
    assert!(catalog.tag_universe().is_empty());
}
