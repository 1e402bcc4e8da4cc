//! gddoc — generate reference pages from GDScript reflection dumps.
//!
//! Reads the JSON written by Godot's GDScript reference collector and writes
//! one Markdown page per class:
//!
//! - **markdown** (default): plain pages, `-i` adds an `index.md` table of contents
//! - **jekyll**: pages with front matter for a nested navigation tree, `-i`
//!   adds the section pages the tree hangs from
//!
//! `gddoc -p docs/reference -f jekyll -i reference.json`

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use gddoc::config::{Config, RootClass};
use gddoc::reflection::{self, merge};
use gddoc::render::OutputFormat;
use gddoc::warning::LogSink;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gddoc",
    version,
    about = "Convert JSON dumped by Godot's GDScript language server into a code reference"
)]
struct Cli {
    /// Reflection JSON files (glob patterns and directories supported)
    #[arg(required = true)]
    files: Vec<String>,

    /// Output directory
    #[arg(short = 'p', long, default_value = "export")]
    path: PathBuf,

    /// Output format: markdown (default) or jekyll
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Create an index page (markdown) or navigation section pages (jekyll)
    #[arg(short = 'i', long)]
    make_index: bool,

    /// Class names to leave out of the index. Repeatable or comma-separated.
    #[arg(short = 's', long, value_delimiter = ',')]
    skip: Vec<String>,

    /// Path prefix removed from script paths before deriving jekyll permalinks,
    /// e.g. "addons/rakugo"
    #[arg(long)]
    nav_root: Option<String>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,

    /// Compose every page but write nothing; implies maximum verbosity
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(if cli.dry_run { u8::MAX } else { cli.verbose });
    run(&cli)
}

/// Log level for a `-v` count.
fn log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `-v` wins over RUST_LOG; without either only warnings are shown.
fn init_tracing(verbosity: u8) {
    let filter = if verbosity > 0 {
        EnvFilter::new(log_level(verbosity))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(0)))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse()?;
    let config = Config {
        format,
        make_index: cli.make_index,
        skip: cli.skip.iter().cloned().collect(),
        root: RootClass::default(),
    };

    let input_files = expand_globs(&cli.files)?;
    if input_files.is_empty() {
        anyhow::bail!("no input files found");
    }

    let mut dumps = Vec::with_capacity(input_files.len());
    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let dump = reflection::parse(&content, cli.nav_root.as_deref())
            .with_context(|| format!("failed to parse {}", path.display()))?;
        tracing::info!("loaded {} classes from {}", dump.classes.len(), path.display());
        dumps.push(dump);
    }
    let merged = merge::merge(dumps);

    let mut sink = LogSink::new();
    let documents = gddoc::generate(merged.classes, &merged.project, &config, &mut sink)?;
    if sink.count() > 0 {
        tracing::warn!("{} reference(s) could not be resolved", sink.count());
    }

    if cli.dry_run {
        for doc in &documents {
            tracing::info!("would write {}", cli.path.join(doc.file_name()).display());
        }
        return Ok(());
    }

    fs::create_dir_all(&cli.path)
        .with_context(|| format!("failed to create output directory: {}", cli.path.display()))?;

    for doc in &documents {
        let out_path = cli.path.join(doc.file_name());
        fs::write(&out_path, doc.text())
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        tracing::info!("wrote {}", out_path.display());
    }

    Ok(())
}

/// File extensions recognized as reflection dumps.
const SUPPORTED_EXTENSIONS: &[&str] = &["json"];

/// Expand glob patterns into a list of real file paths.
/// Bare directories are scanned (non-recursively) for JSON files.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let mut found: Vec<PathBuf> = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?
                .flatten()
                .map(|entry| entry.path())
                .filter(|p| p.is_file() && has_supported_extension(p))
                .collect();
            found.sort();
            files.extend(found);
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            tracing::warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Dumps are merged in argument order, so only drop exact repeats
    let mut seen = std::collections::HashSet::new();
    files.retain(|p| seen.insert(p.clone()));
    Ok(files)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}
