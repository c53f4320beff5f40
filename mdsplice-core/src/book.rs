//! Serde model of the host generator's document tree.
//!
//! The host hands us `[context, book]` on stdin. The book is a nested
//! structure of sections and chapters; only chapter `content` is ever
//! rewritten, and every field we do not model explicitly is preserved
//! through flattened maps so the value round-trips.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// The book value: an ordered list of top-level items plus whatever else
/// the host put beside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub sections: Vec<BookItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One node of the tree. Externally tagged, matching the host's wire
/// shape; anything else fails to decode and is treated as a malformed
/// payload at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BookItem {
    Chapter(Chapter),
    Separator,
    PartTitle(String),
}

/// The only node kind carrying rewritable text. `path` is relative to the
/// source root; draft chapters have none and are passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub content: String,
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub sub_items: Vec<BookItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Book {
    /// Visit every chapter depth-first, preserving order. The closure may
    /// fail; the walk stops at the first error.
    pub fn for_each_chapter_mut<F>(&mut self, f: &mut F) -> Result<()>
    where
        F: FnMut(&mut Chapter) -> Result<()>,
    {
        walk_items(&mut self.sections, f)
    }
}

fn walk_items<F>(items: &mut [BookItem], f: &mut F) -> Result<()>
where
    F: FnMut(&mut Chapter) -> Result<()>,
{
    for item in items {
        if let BookItem::Chapter(chapter) = item {
            f(chapter)?;
            walk_items(&mut chapter.sub_items, f)?;
        }
    }
    Ok(())
}

/// The context half of the host payload. Decode-only: the host never reads
/// it back.
#[derive(Debug, Clone, Deserialize)]
pub struct HostContext {
    pub renderer: String,
    pub root: PathBuf,
    pub config: HostConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HostConfig {
    pub book: BookConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookConfig {
    pub src: PathBuf,
}

impl HostContext {
    /// The source root is the book's src directory under the host's root.
    pub fn source_root(&self) -> PathBuf {
        self.root.join(&self.config.book.src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_book() -> Book {
        serde_json::from_value(json!({
            "sections": [
                {"Chapter": {
                    "name": "Intro",
                    "content": "intro text",
                    "path": "intro.md",
                    "number": null,
                    "sub_items": [
                        {"Chapter": {
                            "name": "Details",
                            "content": "detail text",
                            "path": "intro/details.md",
                            "sub_items": []
                        }}
                    ]
                }},
                "Separator",
                {"PartTitle": "Reference"},
                {"Chapter": {
                    "name": "Draft",
                    "content": "draft text",
                    "path": null,
                    "sub_items": []
                }}
            ],
            "__non_exhaustive": null
        }))
        .unwrap()
    }

    #[test]
    fn test_decode_host_payload() {
        let payload = json!([
            {"renderer": "html", "root": "/work/book", "config": {"book": {"src": "source"}}},
            {"sections": []}
        ]);
        let (ctx, book): (HostContext, Book) = serde_json::from_value(payload).unwrap();
        assert_eq!(ctx.renderer, "html");
        assert_eq!(ctx.source_root(), PathBuf::from("/work/book/source"));
        assert!(book.sections.is_empty());
    }

    #[test]
    fn test_walker_is_depth_first_in_order() {
        let mut book = sample_book();
        let mut seen = Vec::new();
        book.for_each_chapter_mut(&mut |chapter| {
            seen.push(chapter.content.clone());
            Ok(())
        })
        .unwrap();
        assert_eq!(seen, vec!["intro text", "detail text", "draft text"]);
    }

    #[test]
    fn test_unmodeled_fields_round_trip() {
        let book = sample_book();
        let value = serde_json::to_value(&book).unwrap();
        assert!(value.get("__non_exhaustive").is_some());
        let first = &value["sections"][0]["Chapter"];
        assert_eq!(first["name"], "Intro");
        assert!(first.get("number").is_some());
    }

    #[test]
    fn test_separator_and_part_title_shapes() {
        let book = sample_book();
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["sections"][1], json!("Separator"));
        assert_eq!(value["sections"][2], json!({"PartTitle": "Reference"}));
    }

    #[test]
    fn test_unrecognized_node_shape_fails() {
        let result: std::result::Result<Book, _> = serde_json::from_value(json!({
            "sections": [{"Mystery": {"content": "x"}}]
        }));
        assert!(result.is_err());
    }
}
