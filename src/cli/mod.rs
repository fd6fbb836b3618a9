//! Command-line interface for hit-compare.
//!
//! Available commands:
//!
//! - **merge**: Merge two replicate EXON files into one consensus EXON file
//! - **compare**: Compare two groups and print index pairs and the class matrix
//!
//! ## Usage
//!
//! ```text
//! # Merge replicates
//! hit-compare merge ctl_rep1.exon ctl_rep2.exon -o ctl_merged.exon
//!
//! # Compare two groups, each given as a pair of replicates
//! hit-compare compare --group-a ctl_rep1.exon ctl_rep2.exon \
//!                     --group-b trt_rep1.exon trt_rep2.exon
//!
//! # JSON output for downstream plotting
//! hit-compare --format json compare --group-a ctl.exon --group-b trt.exon
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::compare::merge::rep_merge;
use crate::core::exon::LocusMap;
use crate::parsing::exon::read_exon;

pub mod compare;
pub mod merge;

#[derive(Parser)]
#[command(name = "hit-compare")]
#[command(version)]
#[command(about = "Compare HITindex exon usage across replicates and sample groups")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge two replicate EXON files
    Merge(merge::MergeArgs),

    /// Compare two groups of EXON files
    Compare(compare::CompareArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load a group given as one EXON file or two replicate EXON files
pub(crate) fn load_group(paths: &[PathBuf]) -> anyhow::Result<LocusMap> {
    match paths {
        [single] => read_exon(single).with_context(|| describe("read", &[single.as_path()])),
        [rep1, rep2] => rep_merge(rep1, rep2)
            .with_context(|| describe("merge", &[rep1.as_path(), rep2.as_path()])),
        _ => anyhow::bail!("Expected one or two EXON files, got {}", paths.len()),
    }
}

fn describe(action: &str, paths: &[&Path]) -> String {
    let names: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    format!("Failed to {action} {}", names.join(" and "))
}
