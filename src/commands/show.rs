//! Show command - one item's metadata and embed mode

use crate::VitrineError;
use crate::catalog::Catalog;
use crate::embed;
use crate::output;

type Result<T> = std::result::Result<T, VitrineError>;

/// Execute the show command
///
/// # Errors
///
/// Returns `VitrineError::InvalidInput` if no item carries the given id.
pub fn execute(catalog: &Catalog, id: &str, quiet: bool) -> Result<()> {
    let item = catalog.find(id).ok_or_else(|| {
        VitrineError::InvalidInput(format!("No item with id '{id}' in the catalog"))
    })?;

    let mode = embed::classify(&item.resource);
    if quiet {
        println!("{}\t{mode}", item.id);
    } else {
        print!("{}", output::item_details(item, mode));
    }
    Ok(())
}
