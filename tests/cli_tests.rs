//! End-to-end tests for the hit-compare binary.
//!
//! Each test writes small EXON files to a temporary directory and checks the
//! command output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const HEADER: &str = "exon\tgene\tID\tHITindex\n";

fn write_exon(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut content = HEADER.to_string();
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    std::fs::write(&path, content).expect("Failed to write EXON file");
    path
}

fn hit_compare() -> Command {
    Command::cargo_bin("hit-compare").expect("binary should build")
}

#[test]
fn test_merge_writes_consensus_exons() {
    let dir = TempDir::new().unwrap();
    let rep1 = write_exon(
        dir.path(),
        "rep1.exon",
        &["L1\tG1\tInternal_high\t2.0", "L2\tG1\tFirst_high\t-1.0", "L3\tG2\tlast\t0.9"],
    );
    let rep2 = write_exon(
        dir.path(),
        "rep2.exon",
        &["L1\tG1\tinternal\t4.0", "L2\tG1\tLast_low\t1.0"],
    );

    hit_compare()
        .arg("merge")
        .arg(&rep1)
        .arg(&rep2)
        .assert()
        .success()
        .stdout("exon\tID\tHITindex\nL1\tinternal\t3\n");
}

#[test]
fn test_merge_to_output_file() {
    let dir = TempDir::new().unwrap();
    let rep1 = write_exon(dir.path(), "rep1.exon", &["L1\tG1\tFirstInternal_x\t0.2"]);
    let rep2 = write_exon(dir.path(), "rep2.exon", &["L1\tG1\tFirstInternal_y\t0.4"]);
    let out = dir.path().join("merged.exon");

    hit_compare()
        .args(["merge", "-o"])
        .arg(&out)
        .arg(&rep1)
        .arg(&rep2)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let merged = hit_compare::read_exon(&out).unwrap();
    assert_eq!(merged.len(), 1);
    assert_eq!(merged["L1"].hit_id, hit_compare::HitId::FirstInternal);
    assert!((merged["L1"].hit_index - 0.3).abs() < 1e-9);
}

#[test]
fn test_merge_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let rep1 = write_exon(dir.path(), "rep1.exon", &["L1\tG1\tinternal\t0.2"]);

    hit_compare()
        .arg("merge")
        .arg(&rep1)
        .arg(dir.path().join("missing.exon"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to merge"));
}

#[test]
fn test_compare_json() {
    let dir = TempDir::new().unwrap();
    let a = write_exon(
        dir.path(),
        "a.exon",
        &["A\tG1\tFirst_x\t1", "B\tG1\tInternal_x\t2"],
    );
    let b = write_exon(
        dir.path(),
        "b.exon",
        &["A\tG1\tFirst_x\t5", "C\tG2\tLast_x\t9"],
    );

    let output = hit_compare()
        .args(["--format", "json", "compare", "--group-a"])
        .arg(&a)
        .arg("--group-b")
        .arg(&b)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["common_loci"], 1);
    assert_eq!(json["index_pairs"], serde_json::json!([[1.0, 5.0]]));
    assert_eq!(json["id_matrix"]["labels"][1], "first_internal");
    assert_eq!(json["id_matrix"]["counts"][0][0], 1.0);
    assert_eq!(json["id_matrix"]["counts"][2][0], 0.0);
}

#[test]
fn test_compare_merged_groups_tsv() {
    let dir = TempDir::new().unwrap();
    let a1 = write_exon(dir.path(), "a1.exon", &["L1\tG\tinternal\t0.1", "L2\tG\tfirst\t-0.8"]);
    let a2 = write_exon(dir.path(), "a2.exon", &["L1\tG\tinternal\t0.3", "L2\tG\tfirst\t-0.6"]);
    let b1 = write_exon(dir.path(), "b1.exon", &["L1\tG\tlast\t0.9", "L2\tG\tfirst\t-0.5"]);
    let b2 = write_exon(dir.path(), "b2.exon", &["L1\tG\tlast\t0.7", "L2\tG\tfirst\t-0.7"]);

    hit_compare()
        .args(["--format", "tsv", "compare", "--group-a"])
        .arg(&a1)
        .arg(&a2)
        .arg("--group-b")
        .arg(&b1)
        .arg(&b2)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("index_a\tindex_b\n-0.7\t-0.6\n0.2\t0.8\n"))
        .stdout(predicate::str::contains("first\t1\t0\t0\t0\t0\n"))
        .stdout(predicate::str::contains("internal\t0\t0\t0\t0\t1\n"));
}

#[test]
fn test_compare_text_reports_shared_exons() {
    let dir = TempDir::new().unwrap();
    let a = write_exon(dir.path(), "a.exon", &["A\tG\tfirst\t0.1"]);
    let b = write_exon(dir.path(), "b.exon", &["B\tG\tfirst\t0.1"]);

    hit_compare()
        .args(["compare", "--group-a"])
        .arg(&a)
        .arg("--group-b")
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("Shared exons: 0"));
}

#[test]
fn test_compare_bad_hit_index_fails() {
    let dir = TempDir::new().unwrap();
    let a = write_exon(dir.path(), "a.exon", &["A\tG\tfirst\tnot_a_number"]);
    let b = write_exon(dir.path(), "b.exon", &["A\tG\tfirst\t0.1"]);

    hit_compare()
        .args(["compare", "--group-a"])
        .arg(&a)
        .arg("--group-b")
        .arg(&b)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid HITindex on line 2"));
}
