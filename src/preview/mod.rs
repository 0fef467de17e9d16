//! Remote text preview: bounded fetch with cooperative cancellation
//!
//! The loader is the only asynchronous component of the engine. It issues
//! one GET per load, reads the body as text, truncates it to a character
//! cap, and reports progress as a stream of [`PreviewState`] transitions.
//! Failures are recovered into the state stream, never propagated.

mod error;
mod loader;
mod types;

pub use error::PreviewError;
pub use loader::{PreviewHandle, PreviewLoader};
pub use types::{PREVIEW_CHAR_CAP, PreviewErrorKind, PreviewState, group_digits};
