//! Resource-reference classification
//!
//! Maps an item's resource reference to a rendering mode through an
//! ordered decision table. Classification is deterministic and
//! side-effect-free; it never validates that the resource is reachable,
//! and it always resolves to a mode.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use url::Url;

static EXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.([A-Za-z0-9]+)$").expect("extension pattern is valid"));

/// Rendering strategy for a resource reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedMode {
    /// Nothing to render
    None,
    /// External link only
    Link,
    /// Embedded frame
    Iframe,
    /// Fetched text preview
    DataPreview,
}

impl EmbedMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Link => "link",
            Self::Iframe => "iframe",
            Self::DataPreview => "data-preview",
        }
    }
}

impl fmt::Display for EmbedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// File extension of a reference, lowercased
///
/// The query string and fragment are stripped before looking for a
/// trailing `.ext` token; no token yields the empty string.
#[must_use]
pub fn extension_of(resource: &str) -> String {
    let clean = resource.split(['?', '#']).next().unwrap_or(resource);
    EXT_RE
        .captures(clean)
        .and_then(|caps| caps.get(1))
        .map(|ext| ext.as_str().to_lowercase())
        .unwrap_or_default()
}

fn is_http_url(resource: &str) -> bool {
    Url::parse(resource).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

/// Resolve the rendering mode for a resource reference
#[must_use]
pub fn classify(resource: &str) -> EmbedMode {
    if resource.is_empty() {
        return EmbedMode::None;
    }
    if !is_http_url(resource) {
        // site-internal pages embed; anything else is a plain link
        return if resource.starts_with('/') {
            EmbedMode::Iframe
        } else {
            EmbedMode::Link
        };
    }
    match extension_of(resource).as_str() {
        "pdf" | "html" | "htm" => EmbedMode::Iframe,
        "csv" | "json" | "txt" => EmbedMode::DataPreview,
        // hosted app or site
        _ => EmbedMode::Iframe,
    }
}
