//! Recursive `{{#include path}}` directive expansion.
//!
//! Expansion is textual, not semantic: a directive is recognized whenever a
//! whole line, surrounding whitespace aside, is exactly
//! `{{#include <path>}}` — even inside fenced code blocks (documented
//! limitation). Non-directive lines pass through with their original line
//! endings.

use crate::error::{Error, Result};
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Include paths with this prefix resolve against the generated root
/// instead of the including file's directory.
pub const GENERATED_PREFIX: &str = "@generated@/";

/// Nesting bound: cycles are caught by the visited set, so anything this
/// deep is pathological input rather than a legitimate manual.
const MAX_INCLUDE_DEPTH: usize = 128;

static INCLUDE_REGEX: OnceLock<Regex> = OnceLock::new();

fn include_regex() -> &'static Regex {
    INCLUDE_REGEX.get_or_init(|| Regex::new(r"^\s*\{\{#include\s+(.+?)\}\}\s*$").unwrap())
}

/// The two base directories include paths can resolve against.
#[derive(Debug, Clone)]
pub struct Roots {
    pub source: PathBuf,
    pub generated: Option<PathBuf>,
}

impl Roots {
    /// Both roots must exist as directories; the generated root is optional
    /// (standalone manpage builds may have no generated content at all).
    pub fn new(source: impl Into<PathBuf>, generated: Option<PathBuf>) -> Result<Self> {
        let source = source.into();
        if !source.is_dir() {
            return Err(Error::InvalidRoot { path: source });
        }
        if let Some(generated) = &generated {
            if !generated.is_dir() {
                return Err(Error::InvalidRoot {
                    path: generated.clone(),
                });
            }
        }
        Ok(Self { source, generated })
    }
}

/// Recursively expand every include directive in `content`.
///
/// `visited` holds the canonical paths of the files on the current
/// inclusion chain. Each recursive call receives its own copy, so sibling
/// includes never see each other's ancestors: the same file may be spliced
/// twice as long as it is not its own ancestor.
pub fn expand_includes(
    content: &str,
    current_file: &Path,
    roots: &Roots,
    visited: &HashSet<PathBuf>,
) -> Result<String> {
    if visited.len() >= MAX_INCLUDE_DEPTH {
        return Err(Error::RecursionLimit {
            path: current_file.to_path_buf(),
            limit: MAX_INCLUDE_DEPTH,
        });
    }

    let mut visited = visited.clone();
    visited.insert(canonical_or_self(current_file));

    let mut out = String::with_capacity(content.len());
    for line in content.split_inclusive('\n') {
        let Some(captures) = include_regex().captures(line) else {
            out.push_str(line);
            continue;
        };
        let requested = captures[1].trim();
        let resolved = resolve_include(requested, current_file, roots)?;

        if !resolved.exists() {
            return Err(Error::IncludeNotFound {
                directive: line.trim().to_string(),
                resolved,
                from: current_file.to_path_buf(),
            });
        }
        let resolved = match resolved.canonicalize() {
            Ok(path) => path,
            Err(source) => return Err(Error::io(resolved, source)),
        };

        if visited.contains(&resolved) {
            return Err(Error::IncludeCycle { path: resolved });
        }

        tracing::debug!("including {:?} from {:?}", resolved, current_file);
        let text = match fs::read_to_string(&resolved) {
            Ok(text) => text,
            Err(source) => return Err(Error::io(resolved, source)),
        };
        let expanded = expand_includes(&text, &resolved, roots, &visited)?;
        out.push_str(&expanded);
        // Keep the next source line from being glued onto the splice.
        if !expanded.ends_with('\n') {
            out.push('\n');
        }
    }

    Ok(out)
}

fn resolve_include(requested: &str, current_file: &Path, roots: &Roots) -> Result<PathBuf> {
    if let Some(rest) = requested.strip_prefix(GENERATED_PREFIX) {
        let root = roots
            .generated
            .as_deref()
            .ok_or_else(|| Error::GeneratedRootUnavailable {
                directive: requested.to_string(),
            })?;
        Ok(root.join(rest))
    } else {
        let dir = current_file.parent().unwrap_or_else(|| Path::new("."));
        Ok(dir.join(requested))
    }
}

fn canonical_or_self(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
