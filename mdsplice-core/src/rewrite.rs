//! `@docroot@` and `@_at_` reference rewriting.
//!
//! Two substitution passes, always run in this order once include
//! expansion has finished for a chapter:
//!
//! 1. docroot resolution, which depends on the renderer context;
//! 2. at-escape resolution (`@_at_` → `@`), so an escaped docroot token
//!    written as `@_at_docroot@` is never itself rewritten.

use regex::Regex;
use std::path::Path;

pub const DOCROOT_TOKEN: &str = "@docroot@";
pub const AT_ESCAPE: &str = "@_at_";

/// Where the web-hosted manual lives; manpage links point here since
/// manpages are viewed standalone and cannot use relative paths.
pub const DEFAULT_DOCS_BASE_URL: &str = "https://docs.example.org/manual/latest";

/// Which rewriting behavior applies for the whole invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererContext {
    Html,
    /// Manpage / plain text.
    Other,
}

impl RendererContext {
    pub fn from_renderer(name: &str) -> Self {
        if name == "html" {
            Self::Html
        } else {
            Self::Other
        }
    }
}

/// Relative ascent from a chapter's directory back to the book root:
/// `..` per directory level, `.` at the root. The trailing separator is
/// stripped so `@docroot@/x.md` joins cleanly (`../../x.md`, `./x.md`).
pub fn docroot_for(chapter_path: &Path) -> String {
    let depth = chapter_path
        .parent()
        .map_or(0, |dir| dir.components().count());
    if depth == 0 {
        ".".to_string()
    } else {
        vec![".."; depth].join("/")
    }
}

/// HTML context: depth-based relative path back to the book root.
pub fn resolve_docroot_html(content: &str, chapter_path: &Path) -> String {
    content.replace(DOCROOT_TOKEN, &docroot_for(chapter_path))
}

/// Manpage context: absolute base URL, with `.md` cross-references under
/// that URL rewritten to `.html` so they stay valid against the web copy.
pub fn resolve_docroot_manpage(content: &str, base_url: &str) -> String {
    let content = content.replace(DOCROOT_TOKEN, base_url);

    // A `.md` reference only counts when followed by a fragment, a closing
    // paren, whitespace, or the end of input. The follower is captured and
    // re-emitted rather than asserted (no lookahead in this regex dialect).
    let pattern = format!(r"({}[^)\s]*?)\.md([#)\s]|$)", regex::escape(base_url));
    let re = Regex::new(&pattern).expect("escaped base url forms a valid pattern");
    re.replace_all(&content, "${1}.html${2}").into_owned()
}

/// `@_at_` is how sources spell a literal `@`.
pub fn resolve_at_escapes(content: &str) -> String {
    content.replace(AT_ESCAPE, "@")
}
