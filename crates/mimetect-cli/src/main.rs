//! mimetect - identify MIME types of files from their names and leading
//! bytes.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use mimetect_core::{DEFAULT, MimeRegistry, MimeType, builtin_registry, registry_for};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "mimetect",
    version,
    about = "Detect MIME types from file names and magic bytes"
)]
struct Cli {
    /// Files to identify.
    #[arg(required_unless_present = "list")]
    paths: Vec<PathBuf>,

    /// Load type definitions from a TOML dataset instead of the built-in
    /// one.
    #[arg(long, value_name = "FILE")]
    database: Option<PathBuf>,

    /// List every registered type and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let owned;
    let registry: &MimeRegistry = match &cli.database {
        Some(path) => {
            owned = registry_for(path)
                .with_context(|| format!("loading dataset {}", path.display()))?;
            &owned
        }
        None => builtin_registry(),
    };
    debug!(types = registry.len(), min_length = registry.min_length(), "registry ready");

    if cli.list {
        list_types(registry);
        return Ok(ExitCode::SUCCESS);
    }

    let mut failed = false;
    for path in &cli.paths {
        match mimetect_core::detect_file(registry, path) {
            Ok(Some(mime_type)) => {
                println!("{}: {}", path.display(), label(mime_type).green());
            }
            Ok(None) => println!("{}: {}", path.display(), DEFAULT.yellow()),
            Err(err) => {
                eprintln!("{}: {} {err}", path.display(), "error:".red());
                failed = true;
            }
        }
    }
    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn list_types(registry: &MimeRegistry) {
    for mime_type in registry.types() {
        match mime_type.description() {
            Some(description) => {
                println!("{}  {}", mime_type.name().bold(), description.dimmed())
            }
            None => println!("{}", mime_type.name().bold()),
        }
    }
}

fn label(mime_type: &MimeType) -> String {
    match mime_type.description() {
        Some(description) => format!("{} ({description})", mime_type.name()),
        None => mime_type.name().to_string(),
    }
}
