//! # mdsplice CLI
//!
//! Command-line interface for the mdsplice documentation preprocessor.
//!
//! Three entry points: the host's capability probe (`supports`), the
//! host-driven preprocessor mode (no subcommand, JSON on stdin/stdout),
//! and standalone single-file expansion (`expand`) for manpage builds.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdsplice")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Host mode: run only the include/reference substitution pass
    #[arg(long, conflicts_with = "anchors_only")]
    substitute_only: bool,

    /// Host mode: run only the anchor rewriting pass
    #[arg(long)]
    anchors_only: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer the host's capability probe (every renderer is supported)
    Supports {
        /// Renderer name the host is asking about
        renderer: String,
    },

    /// Expand a single markdown file without a host (manpage generation)
    Expand {
        /// Input markdown file to process
        input: PathBuf,

        /// Root directory of markdown sources
        #[arg(short = 's', long)]
        source_root: PathBuf,

        /// Root directory of generated files (for @generated@/ includes)
        #[arg(short = 'g', long)]
        generated_root: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Base URL substituted for @docroot@ references
        #[arg(long, default_value = mdsplice_core::DEFAULT_DOCS_BASE_URL)]
        base_url: String,

        /// Strip []{#anchor} markers instead of passing them through
        #[arg(long)]
        strip_anchors: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr: in host mode stdout carries the protocol.
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Some(Commands::Supports { renderer }) => commands::supports(&renderer),
        Some(Commands::Expand {
            input,
            source_root,
            generated_root,
            output,
            base_url,
            strip_anchors,
        }) => commands::expand_file(
            &input,
            &source_root,
            generated_root,
            output.as_deref(),
            &base_url,
            strip_anchors,
        ),
        None => commands::preprocess(cli.substitute_only, cli.anchors_only),
    }
}
