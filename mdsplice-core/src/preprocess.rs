//! The preprocessing passes and the standalone entry point.
//!
//! Two independent walks exist over the same tree: the substitute pass
//! (include expansion plus reference rewriting) and the anchor pass. The
//! anchor pass must never see unexpanded directives, so callers run it
//! after, or entirely without, the substitute pass.

use crate::anchors::{self, AnchorMode};
use crate::book::Book;
use crate::error::{Error, Result};
use crate::include::{expand_includes, Roots};
use crate::rewrite::{self, RendererContext};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Expand includes and rewrite references in every chapter.
pub fn substitute_pass(
    book: &mut Book,
    roots: &Roots,
    context: RendererContext,
    base_url: &str,
) -> Result<()> {
    let canonical_root = match roots.source.canonicalize() {
        Ok(path) => path,
        Err(source) => return Err(Error::io(&roots.source, source)),
    };

    book.for_each_chapter_mut(&mut |chapter| {
        let Some(rel_path) = chapter.path.clone() else {
            tracing::debug!("skipping draft chapter without a path");
            return Ok(());
        };

        let file = match roots.source.join(&rel_path).canonicalize() {
            Ok(path) => path,
            Err(source) => return Err(Error::io(roots.source.join(&rel_path), source)),
        };
        if !file.starts_with(&canonical_root) {
            return Err(Error::PathOutsideRoot {
                path: rel_path,
                root: roots.source.clone(),
            });
        }

        let expanded = expand_includes(&chapter.content, &file, roots, &HashSet::new())?;
        let resolved = match context {
            RendererContext::Html => rewrite::resolve_docroot_html(&expanded, &rel_path),
            RendererContext::Other => rewrite::resolve_docroot_manpage(&expanded, base_url),
        };
        chapter.content = rewrite::resolve_at_escapes(&resolved);
        Ok(())
    })
}

/// Rewrite anchor markers in every chapter.
pub fn anchor_pass(book: &mut Book, mode: AnchorMode) -> Result<()> {
    book.for_each_chapter_mut(&mut |chapter| {
        chapter.content = anchors::rewrite_anchors(&chapter.content, mode);
        Ok(())
    })
}

/// Standalone manpage mode: fully expand and rewrite a single file.
pub fn process_file(
    input: &Path,
    roots: &Roots,
    base_url: &str,
    strip_anchors: bool,
) -> Result<String> {
    let file = match input.canonicalize() {
        Ok(path) => path,
        Err(source) => return Err(Error::io(input, source)),
    };
    let content = match fs::read_to_string(&file) {
        Ok(content) => content,
        Err(source) => return Err(Error::io(file, source)),
    };

    let expanded = expand_includes(&content, &file, roots, &HashSet::new())?;
    let resolved = rewrite::resolve_at_escapes(&rewrite::resolve_docroot_manpage(
        &expanded, base_url,
    ));
    Ok(if strip_anchors {
        anchors::rewrite_anchors(&resolved, AnchorMode::Strip)
    } else {
        resolved
    })
}
