//! Vitrine - faceted discovery over a fixed catalog of content items
//!
//! This library provides the decision logic behind a content showcase:
//! faceted filtering, free-text search with a stable ranking, incremental
//! tag lookup, related-item recommendations, embed-mode classification, and
//! a cancellable, size-bounded fetch of remote text previews.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod embed;
pub mod facets;
pub mod output;
pub mod preview;
pub mod search;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum VitrineError {
    /// Catalog error
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
