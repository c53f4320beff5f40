//! CLI command implementations.

pub mod expand;
pub mod preprocess;

pub use expand::expand_file;
pub use preprocess::{preprocess, supports};
