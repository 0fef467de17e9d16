//! Output formatting for CLI display
//!
//! This module provides utilities for formatting output in the CLI,
//! including item rows, detail views, and preview headings.

use crate::catalog::{Item, ItemType};
use crate::embed::{self, EmbedMode};
use colored::Colorize;

/// Format one item as a grid row
#[must_use]
pub fn item_line(item: &Item, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}", item.id, item.title);
    }

    let kind = format!("[{}]", item.kind.map_or("-", ItemType::as_str));
    let mut line = format!("  {} {}", kind.magenta(), item.title.bold());
    if !item.tags.is_empty() {
        let tags = format!("({})", item.tags.join(", "));
        line.push(' ');
        line.push_str(&tags.dimmed().to_string());
    }
    line
}

/// Format a tag row for the tag listing
#[must_use]
pub fn tag_line(tag: &str, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {tag}")
    }
}

/// Multi-line metadata view for a single item
#[must_use]
pub fn item_details(item: &Item, mode: EmbedMode) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", item.title.bold()));
    if !item.description.is_empty() {
        out.push_str(&format!("{}\n", item.description));
    }
    out.push('\n');
    out.push_str(&format!("Id: {}\n", item.id));
    out.push_str(&format!("Type: {}\n", item.kind.map_or("-", ItemType::as_str)));
    let tags = if item.tags.is_empty() {
        "-".to_string()
    } else {
        item.tags.join(", ")
    };
    out.push_str(&format!("Tags: {tags}\n"));
    if !item.resource.is_empty() {
        out.push_str(&format!("Resource: {}\n", item.resource));
    }
    out.push_str(&format!("Embed mode: {mode}\n"));
    if item.has_rich_content {
        out.push_str("Rich content: available in-app\n");
    }
    out
}

/// Heading for a fetched preview, named by the resource's extension
#[must_use]
pub fn preview_title(resource: &str) -> String {
    match embed::extension_of(resource).as_str() {
        "" => "Text preview".to_string(),
        ext => format!("{} preview", ext.to_uppercase()),
    }
}
