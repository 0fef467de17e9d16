//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for vitrine using the
//! `clap` crate: the subcommands, the shared facet/query flags, and the
//! mapping from parsed flags to the engine's [`FilterState`].
//!
//! # Commands
//!
//! - **list**: catalog items or the tag universe
//! - **search**: faceted filtering plus ranked free-text search (the grid)
//! - **tags**: incremental tag lookup with subsequence matching
//! - **related**: recommendations for a focused item
//! - **show**: one item's metadata and embed mode
//! - **preview**: classify a resource and fetch a text preview

use crate::catalog::ItemType;
use crate::facets::{FilterState, SortMode};
use crate::search::DEFAULT_RELATED_LIMIT;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// List variant for the list command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListVariant {
    /// List all catalog items
    #[default]
    Items,
    /// List all tags in the catalog
    Tags,
}

/// Facet, query, and ordering flags shared by search
#[derive(Args, Debug, Clone, Default)]
pub struct FacetArgs {
    /// Content types to keep (repeatable; none means all)
    #[arg(short = 't', long = "type", value_enum, value_name = "TYPE")]
    pub types: Vec<ItemType>,

    /// Tags to keep (repeatable; an item needs at least one of them)
    #[arg(short = 'g', long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Free-text query over title, description, type, and tags
    #[arg(short = 'q', long, value_name = "TEXT")]
    pub query: Option<String>,

    /// Grid ordering
    #[arg(long, value_enum, default_value_t)]
    pub sort: SortMode,
}

impl FacetArgs {
    /// Build the engine filter state these flags describe
    ///
    /// Repeated flag values are deduplicated before toggling, so passing
    /// the same facet twice selects it rather than toggling it back off.
    #[must_use]
    pub fn to_state(&self) -> FilterState {
        let mut state = FilterState::new().set_sort_mode(self.sort);
        for kind in self.types.iter().collect::<BTreeSet<_>>() {
            state = state.toggle_type(*kind);
        }
        for tag in self.tags.iter().collect::<BTreeSet<_>>() {
            state = state.toggle_tag(tag.clone());
        }
        if let Some(query) = &self.query {
            state = state.set_text_query(query.clone());
        }
        state
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "vitrine",
    version,
    about = "Faceted discovery over a content catalog"
)]
pub struct Cli {
    /// Suppress informational output (machine-friendly)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Catalog file to browse (overrides the configured default)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog items or the tag universe
    #[command(alias = "ls")]
    List {
        #[arg(value_enum, default_value_t)]
        what: ListVariant,
    },

    /// Filter, search, and rank the catalog
    #[command(alias = "s")]
    Search {
        #[command(flatten)]
        facets: FacetArgs,
    },

    /// Look up tags with incremental subsequence matching
    Tags {
        /// Pattern whose characters must appear in order
        pattern: Option<String>,
    },

    /// Recommend items similar to the given one
    #[command(alias = "r")]
    Related {
        /// Item id
        id: String,

        /// Maximum number of recommendations
        #[arg(long, default_value_t = DEFAULT_RELATED_LIMIT)]
        limit: usize,
    },

    /// Show one item's metadata and embed mode
    Show {
        /// Item id
        id: String,
    },

    /// Classify an item's resource and fetch a text preview when possible
    #[command(alias = "p")]
    Preview {
        /// Item id (omit when using --url)
        #[arg(required_unless_present = "url")]
        id: Option<String>,

        /// Preview an arbitrary resource instead of a catalog item
        #[arg(long, conflicts_with = "id", value_name = "URL")]
        url: Option<String>,

        /// Open the resource externally after classification
        #[arg(long)]
        open: bool,

        /// Copy the fetched preview text to the clipboard
        #[arg(long)]
        copy: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facet_args_map_onto_filter_state() {
        let args = FacetArgs {
            types: vec![ItemType::Report, ItemType::Data],
            tags: vec!["elections".to_string()],
            query: Some("turnout".to_string()),
            sort: SortMode::ByTypeThenTitle,
        };

        let state = args.to_state();
        assert_eq!(state.selected_types.len(), 2);
        assert!(state.selected_tags.contains("elections"));
        assert_eq!(state.text_query, "turnout");
        assert_eq!(state.sort_mode, SortMode::ByTypeThenTitle);
    }

    #[test]
    fn test_repeated_flag_values_select_once() {
        let args = FacetArgs {
            types: vec![ItemType::Report, ItemType::Report],
            tags: vec!["x".to_string(), "x".to_string()],
            ..Default::default()
        };

        let state = args.to_state();
        assert!(state.selected_types.contains(&ItemType::Report));
        assert!(state.selected_tags.contains("x"));
    }

    #[test]
    fn test_empty_args_give_default_state() {
        assert_eq!(FacetArgs::default().to_state(), FilterState::default());
    }

    #[test]
    fn test_cli_parses_search_flags() {
        let cli = Cli::try_parse_from([
            "vitrine", "search", "-t", "report", "-g", "elections", "-q", "atlas",
        ])
        .unwrap();

        match cli.command {
            Commands::Search { facets } => {
                assert_eq!(facets.types, vec![ItemType::Report]);
                assert_eq!(facets.tags, vec!["elections"]);
                assert_eq!(facets.query.as_deref(), Some("atlas"));
            }
            other => panic!("expected search command, got {other:?}"),
        }
    }

    #[test]
    fn test_preview_requires_id_or_url() {
        assert!(Cli::try_parse_from(["vitrine", "preview"]).is_err());
        assert!(Cli::try_parse_from(["vitrine", "preview", "3"]).is_ok());
        assert!(
            Cli::try_parse_from(["vitrine", "preview", "--url", "https://x/data.csv"]).is_ok()
        );
        assert!(
            Cli::try_parse_from(["vitrine", "preview", "3", "--url", "https://x/d.csv"]).is_err()
        );
    }
}
