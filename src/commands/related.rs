//! Related command - recommendations for a focused item

use crate::VitrineError;
use crate::catalog::Catalog;
use crate::output;
use crate::search;

type Result<T> = std::result::Result<T, VitrineError>;

/// Execute the related command
///
/// # Errors
///
/// Returns `VitrineError::InvalidInput` if no item carries the given id.
pub fn execute(catalog: &Catalog, id: &str, limit: usize, quiet: bool) -> Result<()> {
    let focal = catalog.find(id).ok_or_else(|| {
        VitrineError::InvalidInput(format!("No item with id '{id}' in the catalog"))
    })?;

    let related = search::related_to(focal, catalog.items(), limit);
    if related.is_empty() {
        if !quiet {
            println!("No related items for '{}'.", focal.title);
        }
        return Ok(());
    }

    if !quiet {
        println!("Related to '{}':", focal.title);
    }
    for item in related {
        println!("{}", output::item_line(item, quiet));
    }
    Ok(())
}
