//! Tags command - tag universe with incremental lookup

use crate::catalog::Catalog;
use crate::output;
use crate::search::fuzzy;

/// Execute the tags command
pub fn execute(catalog: &Catalog, pattern: Option<&str>, quiet: bool) {
    let universe = catalog.tag_universe();
    let shown: Vec<&str> = match pattern {
        Some(pattern) => fuzzy::filter_candidates(pattern, &universe),
        None => universe.iter().map(String::as_str).collect(),
    };

    if shown.is_empty() {
        if !quiet {
            println!("No matching tags.");
        }
        return;
    }

    if !quiet {
        println!("{} tag(s):", shown.len());
    }
    for tag in shown {
        println!("{}", output::tag_line(tag, quiet));
    }
}
