//! Merge command - combine two replicate EXON files.
//!
//! Loci called in both replicates with the same positional class are kept
//! with their scores averaged; all other loci are dropped.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::{load_group, OutputFormat};
use crate::core::exon::{Exon, LocusMap};
use crate::parsing::exon::write_exon_tsv;

/// Arguments for the merge command
#[derive(Args)]
pub struct MergeArgs {
    /// First replicate EXON file
    #[arg(required = true)]
    pub rep1: PathBuf,

    /// Second replicate EXON file
    #[arg(required = true)]
    pub rep2: PathBuf,

    /// Write the merged exons here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the merge command
///
/// # Errors
///
/// Returns an error if either replicate cannot be read or the output cannot
/// be written.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: MergeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let merged = load_group(&[args.rep1.clone(), args.rep2.clone()])?;

    if verbose {
        eprintln!("Merged replicates: {} exons retained", merged.len());
    }

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_merged(&mut writer, &merged, format)?;
            writer.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_merged(&mut writer, &merged, format)?;
        }
    }

    Ok(())
}

fn write_merged<W: Write>(
    writer: &mut W,
    merged: &LocusMap,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text | OutputFormat::Tsv => write_exon_tsv(writer, merged)?,
        OutputFormat::Json => {
            let exons: Vec<&Exon> = merged.values().collect();
            serde_json::to_writer_pretty(&mut *writer, &exons)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
