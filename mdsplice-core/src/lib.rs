//! # mdsplice-core
//!
//! Core library for the mdsplice documentation preprocessor.
//!
//! This crate provides the building blocks for assembling manual pages and
//! book chapters from modular markdown sources: recursive `{{#include}}`
//! expansion, `@docroot@`/`@_at_` reference rewriting, bracketed-anchor
//! transformation, and the host generator's book-tree model.

pub mod anchors;
pub mod book;
pub mod error;
pub mod include;
pub mod preprocess;
pub mod rewrite;

pub use anchors::AnchorMode;
pub use book::{Book, BookItem, Chapter, HostContext};
pub use error::{Error, Result};
pub use include::{expand_includes, Roots};
pub use preprocess::{anchor_pass, process_file, substitute_pass};
pub use rewrite::{RendererContext, DEFAULT_DOCS_BASE_URL};
