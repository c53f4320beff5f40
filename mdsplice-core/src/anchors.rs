//! Bracketed anchor markers: `[]{#name}` and `[label]{#name}`.
//!
//! The HTML renderer gets real anchor elements; every other renderer gets
//! the markers stripped down to their visible text.

use regex::{Captures, Regex};
use std::sync::OnceLock;

static ANCHOR_REGEX: OnceLock<Regex> = OnceLock::new();

// label excludes `]`, name excludes `}`
fn anchor_regex() -> &'static Regex {
    ANCHOR_REGEX.get_or_init(|| Regex::new(r"\[([^\]]*)\]\{#([^}]+)\}").unwrap())
}

/// Fixed for the whole run by the renderer context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorMode {
    /// Emit named anchors / self-referencing links.
    Html,
    /// Delete markers, keeping only the visible label.
    Strip,
}

pub fn rewrite_anchors(content: &str, mode: AnchorMode) -> String {
    anchor_regex()
        .replace_all(content, |caps: &Captures| {
            let label = &caps[1];
            let name = &caps[2];
            match mode {
                AnchorMode::Html if label.is_empty() => format!("<a name=\"{name}\"></a>"),
                AnchorMode::Html => format!("<a href=\"#{name}\" id=\"{name}\">{label}</a>"),
                AnchorMode::Strip => label.to_string(),
            }
        })
        .into_owned()
}
