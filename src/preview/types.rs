//! Preview state machine types

/// Character cap applied to fetched preview text
pub const PREVIEW_CHAR_CAP: usize = 120_000;

/// Failure classification surfaced to the consumer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewErrorKind {
    /// Transport-level failure, including cross-origin style rejections
    Network,
    /// The server answered with a non-success status
    HttpStatus,
}

/// One state of a preview fetch
///
/// Lifecycle per fetch attempt: `Loading`, then exactly one of `Ready` or
/// `Error`. A superseded fetch ends without a terminal state. Preview text
/// exists only on `Ready`, which keeps "text empty unless ready" true by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewState {
    /// No fetch has been started for this slot
    Idle,
    Loading,
    Ready {
        text: String,
        /// Whether the body was cut at the character cap
        truncated: bool,
        /// Human-readable truncation note, present iff `truncated`
        note: Option<String>,
    },
    Error {
        kind: PreviewErrorKind,
        message: String,
    },
}

impl PreviewState {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Ready { .. } | Self::Error { .. })
    }

    #[must_use]
    pub const fn error_kind(&self) -> Option<PreviewErrorKind> {
        match self {
            Self::Error { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Group digits for human-readable counts, e.g. `120,000`
#[must_use]
pub fn group_digits(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
