//! Standalone single-file expansion (manpage generation).

use anyhow::{Context, Result};
use mdsplice_core::{process_file, Roots};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub fn expand_file(
    input: &Path,
    source_root: &Path,
    generated_root: Option<PathBuf>,
    output: Option<&Path>,
    base_url: &str,
    strip_anchors: bool,
) -> Result<()> {
    anyhow::ensure!(input.exists(), "input file not found: {}", input.display());

    let roots = Roots::new(source_root, generated_root)?;

    tracing::debug!("expanding {:?} against {:?}", input, roots.source);
    let rendered = process_file(input, &roots, base_url, strip_anchors)
        .with_context(|| format!("failed to process {}", input.display()))?;

    match output {
        Some(path) => {
            fs::write(path, &rendered).with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            io::stdout()
                .write_all(rendered.as_bytes())
                .context("failed to write to stdout")?;
        }
    }
    Ok(())
}
