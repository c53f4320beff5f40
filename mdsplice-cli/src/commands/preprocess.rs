//! Host-driven preprocessor mode and the capability probe.
//!
//! The host pipes one JSON array `[context, book]` to stdin and expects
//! the rewritten book back as the sole line on stdout. Decode or encode
//! failures are adapter bugs, not resolution errors: they are reported as
//! internal errors and re-raised so the host sees a non-zero exit rather
//! than partial JSON.

use anyhow::{Context, Result};
use mdsplice_core::{
    anchor_pass, substitute_pass, AnchorMode, Book, Error, HostContext, RendererContext, Roots,
    DEFAULT_DOCS_BASE_URL,
};
use std::env;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Environment variable naming the generated root in host mode; the host
/// payload has no slot for it.
pub const GENERATED_ROOT_ENV: &str = "MDSPLICE_GENERATED_ROOT";

/// Capability probe: every renderer is supported. Stdin is never read.
pub fn supports(renderer: &str) -> Result<()> {
    tracing::debug!("capability probe for renderer {renderer:?}");
    Ok(())
}

pub fn preprocess(substitute_only: bool, anchors_only: bool) -> Result<()> {
    let mut payload = String::new();
    io::stdin()
        .read_to_string(&mut payload)
        .context("failed to read host payload from stdin")?;

    let (host, mut book): (HostContext, Book) = serde_json::from_str(&payload)
        .map_err(|e| Error::MalformedPayload(e.to_string()))
        .context("internal error: could not decode host payload")?;

    let context = RendererContext::from_renderer(&host.renderer);
    tracing::debug!("preprocessing book for renderer {:?}", host.renderer);

    if !anchors_only {
        let generated = env::var_os(GENERATED_ROOT_ENV).map(PathBuf::from);
        let roots = Roots::new(host.source_root(), generated)?;
        substitute_pass(&mut book, &roots, context, DEFAULT_DOCS_BASE_URL)?;
    }
    if !substitute_only {
        let mode = match context {
            RendererContext::Html => AnchorMode::Html,
            RendererContext::Other => AnchorMode::Strip,
        };
        anchor_pass(&mut book, mode)?;
    }

    let encoded = serde_json::to_string(&book)
        .map_err(|e| Error::MalformedPayload(e.to_string()))
        .context("internal error: could not re-encode book")?;
    let mut stdout = io::stdout();
    stdout
        .write_all(encoded.as_bytes())
        .and_then(|()| stdout.write_all(b"\n"))
        .context("failed to write book to stdout")?;
    Ok(())
}
