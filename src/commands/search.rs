//! Search command - faceted filtering plus ranked free-text search

use crate::catalog::Catalog;
use crate::cli::FacetArgs;
use crate::facets;
use crate::output;

/// Execute the search command
///
/// Runs the full display pipeline: facet filter, then text search, then
/// the stable sort that produces the grid order.
pub fn execute(catalog: &Catalog, facet_args: &FacetArgs, quiet: bool) {
    let state = facet_args.to_state();
    let shown = facets::apply(catalog.items(), &state);

    if shown.is_empty() {
        if !quiet {
            println!("No items match the current filters.");
        }
        return;
    }

    if !quiet {
        if state.has_active_facets() {
            println!(
                "Showing {} item(s) ({} facet(s) active):",
                shown.len(),
                state.active_facet_count()
            );
        } else {
            println!("Showing {} item(s):", shown.len());
        }
    }
    for item in shown {
        println!("{}", output::item_line(item, quiet));
    }
}
