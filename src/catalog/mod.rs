//! Item catalog: the immutable content collection supplied at startup
//!
//! The catalog is an ordered sequence of [`Item`] records loaded once from
//! a JSON array. The engine never mutates it. Malformed optional fields
//! (missing title, type, tags) are absorbed by serde defaults rather than
//! rejected; only an unreadable or unparseable catalog file is fatal.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Catalog file is not a valid JSON item array
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Stable item identifier
///
/// Real catalogs mix numeric and string ids, so both forms are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Content type facet
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Report,
    Data,
    Interactive,
    Events,
}

impl ItemType {
    /// Facet name as it appears in catalog data and search text
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Report => "report",
            Self::Data => "data",
            Self::Interactive => "interactive",
            Self::Events => "events",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(default)]
    pub title: String,
    /// Content type; absent in some feeds and then treated as unclassified
    #[serde(default, rename = "type")]
    pub kind: Option<ItemType>,
    #[serde(default)]
    pub description: String,
    /// Thematic tags; duplicates are tolerated
    #[serde(default)]
    pub tags: Vec<String>,
    /// Absolute URL, root-relative path, or empty when there is nothing to open
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Whether a custom in-app content block exists for this item
    ///
    /// The block itself is owned by the presentation layer; the engine only
    /// branches on its presence.
    #[serde(default)]
    pub has_rich_content: bool,
}

impl Item {
    /// Type facet name, or the empty string when the type is missing
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.kind.map_or("", ItemType::as_str)
    }
}

/// The immutable ordered item collection
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    #[must_use]
    pub const fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse a catalog from a JSON item array
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if the input is not a valid item array.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let items: Vec<Item> = serde_json::from_str(raw)?;
        Ok(Self::new(items))
    }

    /// Items in catalog order
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Look up an item by the display form of its id
    ///
    /// Accepts both numeric and string ids as typed on the command line.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id.to_string() == key)
    }

    /// All distinct tags across the catalog, sorted alphabetically
    #[must_use]
    pub fn tag_universe(&self) -> Vec<String> {
        let tags: BTreeSet<&str> = self
            .items
            .iter()
            .flat_map(|item| item.tags.iter().map(String::as_str))
            .collect();
        tags.into_iter().map(ToString::to_string).collect()
    }
}
