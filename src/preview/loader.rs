//! Cancellable bounded fetch of remote text previews
//!
//! One loader instance serves one consumer slot, and at most one fetch is
//! logically current per instance. Each `load` supersedes the previous one
//! by bumping a generation counter; a fetch that finishes after being
//! superseded compares generations and discards its result, so a stale
//! handle never observes a terminal state. Cancellation is cooperative at
//! the network boundary: an in-flight request may run to completion, but
//! nothing it produces is delivered.

use super::error::PreviewError;
use super::types::{PREVIEW_CHAR_CAP, PreviewState, group_digits};
use reqwest::Client;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;

/// Single-flight preview fetcher
pub struct PreviewLoader {
    client: Client,
    generation: Arc<AtomicU64>,
    char_cap: usize,
}

impl PreviewLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::with_char_cap(PREVIEW_CHAR_CAP)
    }

    #[must_use]
    pub fn with_char_cap(char_cap: usize) -> Self {
        Self {
            client: Client::new(),
            generation: Arc::new(AtomicU64::new(0)),
            char_cap,
        }
    }

    /// Start fetching `url`, superseding any fetch still in flight
    ///
    /// `Loading` is emitted on the returned handle immediately; the
    /// terminal `Ready` or `Error` follows unless a newer `load` or
    /// [`cancel`](Self::cancel) wins first, in which case the handle's
    /// stream simply ends.
    pub fn load(&self, url: &str) -> PreviewHandle {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let (tx, rx) = mpsc::unbounded_channel();
        let _ = tx.send(PreviewState::Loading);

        tracing::debug!(%url, generation, "starting preview fetch");

        let client = self.client.clone();
        let current = Arc::clone(&self.generation);
        let char_cap = self.char_cap;
        let url = url.to_owned();
        tokio::spawn(async move {
            let state = match fetch_text(&client, &url, char_cap).await {
                Ok((text, truncated, note)) => PreviewState::Ready {
                    text,
                    truncated,
                    note,
                },
                Err(e) => PreviewState::Error {
                    kind: e.kind(),
                    message: e.user_message(),
                },
            };
            if current.load(Ordering::SeqCst) == generation {
                let _ = tx.send(state);
            } else {
                tracing::debug!(%url, generation, "discarding superseded preview result");
            }
        });

        PreviewHandle { rx }
    }

    /// Abandon the in-flight fetch, if any
    ///
    /// The request itself may run to completion; its result is discarded.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("preview fetch cancelled");
    }
}

impl Default for PreviewLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving side of one fetch attempt
pub struct PreviewHandle {
    rx: mpsc::UnboundedReceiver<PreviewState>,
}

impl PreviewHandle {
    /// Next state transition; `None` once the fetch has ended or been superseded
    pub async fn next(&mut self) -> Option<PreviewState> {
        self.rx.recv().await
    }

    /// Drain transitions until a terminal state
    ///
    /// Returns `None` when the fetch was superseded before finishing.
    pub async fn finish(mut self) -> Option<PreviewState> {
        let mut last = None;
        while let Some(state) = self.rx.recv().await {
            let terminal = state.is_terminal();
            last = Some(state);
            if terminal {
                break;
            }
        }
        last.filter(PreviewState::is_terminal)
    }
}

async fn fetch_text(
    client: &Client,
    url: &str,
    char_cap: usize,
) -> Result<(String, bool, Option<String>), PreviewError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(PreviewError::Status(status.as_u16()));
    }
    let body = response.text().await?;
    Ok(clip(body, char_cap))
}

/// Truncate to the character cap, noting the cut when it happens
fn clip(text: String, char_cap: usize) -> (String, bool, Option<String>) {
    match text.char_indices().nth(char_cap) {
        Some((cut, _)) => {
            let mut clipped = text;
            clipped.truncate(cut);
            let note = format!("Preview truncated ({} chars).", group_digits(char_cap));
            (clipped, true, Some(note))
        }
        None => (text, false, None),
    }
}
