//! Vitrine CLI application entry point
//!
//! This is the main executable for the vitrine catalog browser. It loads a
//! JSON content catalog and provides faceted filtering, free-text search,
//! tag lookup, recommendations, and remote text previews over it.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog
//! vitrine list
//! vitrine list tags
//!
//! # Faceted search with ranked output
//! vitrine search -t report -g elections -q turnout
//! vitrine search --sort by-type-then-title
//!
//! # Incremental tag lookup
//! vitrine tags eco
//!
//! # Recommendations and item details
//! vitrine related 3
//! vitrine show 3
//!
//! # Text preview of a remote resource
//! vitrine preview 3
//! vitrine preview --url https://data.example.org/turnout.csv
//!
//! # Quiet mode (only output results)
//! vitrine -q search -g elections
//! ```
//!
//! # Configuration
//!
//! The default catalog path lives in the user's config directory
//! (`~/.config/vitrine/config.toml` on Linux) and is created on first run.
//! `--catalog` overrides it per invocation.

use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;
use vitrine::{
    VitrineError,
    catalog::Catalog,
    cli::{Cli, Commands},
    commands,
    config::VitrineConfig,
};

type Result<T> = std::result::Result<T, VitrineError>;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    init_tracing();

    let cli = Cli::parse_args();
    let config = VitrineConfig::load()?;
    let quiet = cli.quiet || config.quiet;

    // A raw-URL preview needs no catalog
    if let Commands::Preview {
        id: None,
        url: Some(url),
        open,
        copy,
    } = &cli.command
    {
        return commands::preview_resource(url, *open, *copy, config.preview_char_cap(), quiet);
    }

    let catalog_path = resolve_catalog_path(&cli, &config)?;
    let catalog = Catalog::load(&catalog_path)?;
    tracing::debug!(path = %catalog_path.display(), items = catalog.len(), "catalog loaded");

    match &cli.command {
        Commands::List { what } => commands::list(&catalog, *what, quiet),
        Commands::Search { facets } => commands::search(&catalog, facets, quiet),
        Commands::Tags { pattern } => commands::tags(&catalog, pattern.as_deref(), quiet),
        Commands::Related { id, limit } => commands::related(&catalog, id, *limit, quiet)?,
        Commands::Show { id } => commands::show(&catalog, id, quiet)?,
        Commands::Preview { id, open, copy, .. } => {
            let id = id.as_deref().ok_or_else(|| {
                VitrineError::InvalidInput("Provide an item id or --url".into())
            })?;
            commands::preview(&catalog, id, *open, *copy, config.preview_char_cap(), quiet)?;
        }
    }

    Ok(())
}

/// Tracing goes to stderr, filtered by `RUST_LOG`; silent by default
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_catalog_path(cli: &Cli, config: &VitrineConfig) -> Result<PathBuf> {
    if let Some(path) = &cli.catalog {
        return Ok(path.clone());
    }
    if let Some(path) = &config.catalog {
        return Ok(path.clone());
    }
    let fallback = PathBuf::from("catalog.json");
    if fallback.exists() {
        return Ok(fallback);
    }
    Err(VitrineError::InvalidInput(
        "No catalog configured. Pass --catalog <PATH> or set `catalog` in the config file.".into(),
    ))
}
