//! List command - catalog items or the tag universe

use crate::catalog::Catalog;
use crate::cli::ListVariant;
use crate::output;

/// Execute the list command
pub fn execute(catalog: &Catalog, what: ListVariant, quiet: bool) {
    match what {
        ListVariant::Items => {
            if !quiet {
                println!("{} item(s) in catalog:", catalog.len());
            }
            for item in catalog.items() {
                println!("{}", output::item_line(item, quiet));
            }
        }
        ListVariant::Tags => {
            let tags = catalog.tag_universe();
            if !quiet {
                println!("{} tag(s) in catalog:", tags.len());
            }
            for tag in &tags {
                println!("{}", output::tag_line(tag, quiet));
            }
        }
    }
}
