use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pfe_cli::{ManifestOptions, generate};
use tracing_subscriber::EnvFilter;

/// Generate the PFE document manifest (`files.json`).
#[derive(Parser, Debug)]
#[command(name = "pfe-manifest", version, about)]
struct Cli {
    /// Directory holding the documents.
    #[arg(long, default_value = "public/PFE")]
    source: PathBuf,

    /// Manifest file to write. Defaults to `<source>/files.json`.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Public path the documents are served under.
    #[arg(long, default_value = "/PFE/")]
    base_path: String,

    /// Document extension, without the dot.
    #[arg(long, default_value = "pdf")]
    extension: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let output = cli
        .output
        .unwrap_or_else(|| cli.source.join("files.json"));
    let options = ManifestOptions {
        base_path: cli.base_path,
        extension: cli.extension.trim_start_matches('.').to_string(),
    };

    let count = generate(&cli.source, &output, &options)
        .with_context(|| format!("cannot generate manifest from {}", cli.source.display()))?;

    println!("Wrote {} file(s) to {}", count, output.display());
    Ok(())
}
