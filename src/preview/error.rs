//! Preview fetch failures and their user-facing classification

use super::types::PreviewErrorKind;
use thiserror::Error;

/// Failure raised while fetching a remote preview
///
/// These never escape the loader: each is folded into a
/// [`super::PreviewState::Error`] transition with a recovery hint, so a
/// failed preview is never fatal to the process.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// The server answered with a non-success status code
    #[error("HTTP {0}")]
    Status(u16),
    /// The request never produced a usable response
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl PreviewError {
    #[must_use]
    pub const fn kind(&self) -> PreviewErrorKind {
        match self {
            Self::Status(_) => PreviewErrorKind::HttpStatus,
            Self::Transport(_) => PreviewErrorKind::Network,
        }
    }

    /// Message shown to the user, including the fallback suggestion
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status(code) => {
                format!("The server answered HTTP {code}. Open the resource externally to view it.")
            }
            Self::Transport(_) => {
                "Couldn't load the preview (network or cross-origin restriction). \
                 Open the resource externally instead."
                    .to_string()
            }
        }
    }
}
