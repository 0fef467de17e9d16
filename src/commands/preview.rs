//! Preview command - classify a resource and fetch text previews
//!
//! Only `data-preview` resources are fetched. For the other modes the
//! command reports what the resource renders as and, with `--open`, hands
//! it to the system opener instead.

use crate::VitrineError;
use crate::catalog::Catalog;
use crate::embed::{self, EmbedMode};
use crate::output;
use crate::preview::{PreviewLoader, PreviewState};

type Result<T> = std::result::Result<T, VitrineError>;

/// Execute the preview command for a catalog item
///
/// # Errors
///
/// Returns `VitrineError::InvalidInput` if the item is unknown or has no
/// resource, and `VitrineError::Io` if the async runtime or the external
/// opener cannot be started. Fetch failures are not errors: they are
/// reported as preview states with a recovery hint.
pub fn execute(
    catalog: &Catalog,
    id: &str,
    open_external: bool,
    copy: bool,
    char_cap: usize,
    quiet: bool,
) -> Result<()> {
    let item = catalog.find(id).ok_or_else(|| {
        VitrineError::InvalidInput(format!("No item with id '{id}' in the catalog"))
    })?;
    if item.resource.is_empty() {
        return Err(VitrineError::InvalidInput(format!(
            "Item '{id}' has no resource to preview"
        )));
    }

    resource(&item.resource, open_external, copy, char_cap, quiet)
}

/// Execute the preview command for an arbitrary resource reference
///
/// # Errors
///
/// Returns `VitrineError::Io` if the async runtime or the external opener
/// cannot be started.
pub fn resource(
    resource: &str,
    open_external: bool,
    copy: bool,
    char_cap: usize,
    quiet: bool,
) -> Result<()> {
    match embed::classify(resource) {
        EmbedMode::DataPreview => {
            let text = run_fetch(resource, char_cap, quiet)?;
            if copy && let Some(text) = text {
                copy_to_clipboard(&text, quiet);
            }
        }
        EmbedMode::None => {
            if !quiet {
                println!("Nothing to preview.");
            }
        }
        mode @ (EmbedMode::Iframe | EmbedMode::Link) => {
            if !quiet {
                println!("Resource renders as {mode}; no text preview. Use --open to view it.");
            }
        }
    }

    if open_external {
        open::that(resource)?;
    }
    Ok(())
}

/// Run the loader to completion, printing transitions as they arrive
///
/// Returns the fetched text so callers can act on it after display.
fn run_fetch(url: &str, char_cap: usize, quiet: bool) -> Result<Option<String>> {
    let runtime = tokio::runtime::Runtime::new()?;
    let fetched = runtime.block_on(async {
        let loader = PreviewLoader::with_char_cap(char_cap);
        let mut handle = loader.load(url);
        while let Some(state) = handle.next().await {
            match state {
                PreviewState::Idle => {}
                PreviewState::Loading => {
                    if !quiet {
                        eprintln!("Loading preview...");
                    }
                }
                PreviewState::Ready {
                    text,
                    truncated,
                    note,
                } => {
                    if !quiet {
                        println!("{}", output::preview_title(url));
                        if truncated && let Some(note) = note {
                            println!("{note}");
                        }
                    }
                    println!("{text}");
                    return Some(text);
                }
                PreviewState::Error { message, .. } => {
                    eprintln!("{message}");
                    return None;
                }
            }
        }
        None
    });
    Ok(fetched)
}

/// Best-effort clipboard copy; a missing clipboard is a warning, not a failure
fn copy_to_clipboard(text: &str, quiet: bool) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text) {
            Ok(()) => {
                if !quiet {
                    eprintln!("Preview copied to clipboard.");
                }
            }
            Err(e) => eprintln!("Clipboard error: {e}"),
        },
        Err(e) => eprintln!("Clipboard unavailable: {e}"),
    }
}
