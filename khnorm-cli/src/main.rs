//! Command-line front end for Khmer text canonicalization.
//!
//! Reads a UTF-8 text file, canonicalizes every line, and writes the
//! result to stdout, one output line per input line.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use khnorm_core::Normalizer;
use rayon::prelude::*;

/// Canonicalize Khmer text for search and indexing
///
/// Rewrites every Khmer orthographic syllable into a single canonical
/// spelling so that visually identical strings compare equal. Text outside
/// the Khmer script passes through unchanged.
#[derive(Debug, Parser)]
#[command(name = "khnorm", version)]
struct Cli {
    /// UTF-8 text file to canonicalize
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let content = fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read file: {}", cli.file.display()))?;

    let lines: Vec<&str> = content.lines().collect();
    log::debug!(
        "Canonicalizing {} lines from {}",
        lines.len(),
        cli.file.display()
    );

    let normalizer = Normalizer::new();
    let normalized: Vec<String> = lines
        .par_iter()
        .map(|line| normalizer.normalize(line))
        .collect();

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    for line in &normalized {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;

    Ok(())
}
