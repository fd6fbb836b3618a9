use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_group, OutputFormat};
use crate::compare::matrix::{get_matrices, ComparisonMatrices};
use crate::core::types::HitId;

#[derive(Args)]
pub struct CompareArgs {
    /// First group: one EXON file, or two replicate EXON files to merge
    #[arg(long, required = true, num_args = 1..=2)]
    pub group_a: Vec<PathBuf>,

    /// Second group: one EXON file, or two replicate EXON files to merge
    #[arg(long, required = true, num_args = 1..=2)]
    pub group_b: Vec<PathBuf>,
}

#[allow(clippy::needless_pass_by_value)]
pub fn run(args: CompareArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let group_a = load_group(&args.group_a)?;
    if verbose {
        eprintln!("Group A: {} exons", group_a.len());
    }

    let group_b = load_group(&args.group_b)?;
    if verbose {
        eprintln!("Group B: {} exons", group_b.len());
    }

    let result = get_matrices(&group_a, &group_b);

    match format {
        OutputFormat::Text => print_text_comparison(&args, &result),
        OutputFormat::Json => {
            print_json_comparison(&args, group_a.len(), group_b.len(), &result)?;
        }
        OutputFormat::Tsv => print_tsv_comparison(&result),
    }

    Ok(())
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_text_comparison(args: &CompareArgs, result: &ComparisonMatrices) {
    println!("Comparison Results");
    println!("{}", "=".repeat(60));

    println!("\nGroup A: {}", join_paths(&args.group_a));
    println!("Group B: {}", join_paths(&args.group_b));

    println!("\nShared exons: {}", result.common_loci());
    println!(
        "Unchanged positional class: {}",
        result.id_matrix.diagonal_total()
    );

    println!("\nPositional class matrix (rows: A, columns: B):");
    print!("{:>16}", "");
    for id in HitId::ALL {
        print!("{:>16}", id.as_str());
    }
    println!();
    for (id, row) in HitId::ALL.iter().zip(result.id_matrix.rows()) {
        print!("{:>16}", id.as_str());
        for count in row {
            print!("{count:>16}");
        }
        println!();
    }

    println!("\nHITindex pairs (A, B):");
    for [a, b] in &result.index_pairs {
        println!("  {a:.4}\t{b:.4}");
    }
}

fn print_json_comparison(
    args: &CompareArgs,
    exons_a: usize,
    exons_b: usize,
    result: &ComparisonMatrices,
) -> anyhow::Result<()> {
    let labels: Vec<&str> = HitId::ALL.iter().map(|id| id.as_str()).collect();
    let paths_a: Vec<String> = args.group_a.iter().map(|p| p.display().to_string()).collect();
    let paths_b: Vec<String> = args.group_b.iter().map(|p| p.display().to_string()).collect();

    let output = serde_json::json!({
        "group_a": {
            "paths": paths_a,
            "exon_count": exons_a,
        },
        "group_b": {
            "paths": paths_b,
            "exon_count": exons_b,
        },
        "common_loci": result.common_loci(),
        "index_pairs": result.index_pairs,
        "id_matrix": {
            "labels": labels,
            "counts": result.id_matrix.rows(),
        }
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_comparison(result: &ComparisonMatrices) {
    println!("index_a\tindex_b");
    for [a, b] in &result.index_pairs {
        println!("{a}\t{b}");
    }

    println!();
    let labels: Vec<&str> = HitId::ALL.iter().map(|id| id.as_str()).collect();
    println!("id\t{}", labels.join("\t"));
    for (id, row) in HitId::ALL.iter().zip(result.id_matrix.rows()) {
        let counts: Vec<String> = row.iter().map(ToString::to_string).collect();
        println!("{id}\t{}", counts.join("\t"));
    }
}
