//! End-to-end tests for the primaschema command-line interface.
//!
//! Each test stages a small scheme directory in a tempdir and drives the
//! binary the way a user would. Digest expectations are fixed strings so a
//! canonicalization regression shows up as a changed checksum, not just a
//! changed relationship between two computed values.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const INFO_JSON: &str = r#"{
  "schema_version": "3.0.0",
  "name": "artic",
  "amplicon_size": 400,
  "version": "v4.1",
  "organism": "sars-cov-2",
  "status": "VALIDATED",
  "contributors": [{"name": "A. Person"}]
}
"#;

const SIX_COL_BED: &str = "ref1\t100\t120\tamp1_LEFT\tpool1\t.\nref1\t180\t200\tamp1_RIGHT\tpool1\t.\n";

const PRIMER_CHECKSUM: &str =
    "sha256:5a5882212c51635af50397e717ec7047884880ff7d77d83da10b1c33b924cce3";
const REFERENCE_CHECKSUM: &str =
    "sha256:e60d2186ff7d7de46c56ed983acf2abe281ea58d03f51df03162b053c350b956";

fn cmd() -> Command {
    Command::cargo_bin("primaschema").unwrap()
}

/// A 300-base reference with a two-primer scheme over it
fn write_scheme(dir: &Path) {
    std::fs::write(dir.join("info.json"), INFO_JSON).unwrap();
    std::fs::write(dir.join("primer.bed"), SIX_COL_BED).unwrap();
    std::fs::write(
        dir.join("reference.fasta"),
        format!(">ref1\n{}\n", "ACGT".repeat(75)),
    )
    .unwrap();
}

#[test]
fn hash_ref_prints_checksum() {
    let dir = tempfile::tempdir().unwrap();
    write_scheme(dir.path());

    cmd()
        .arg("hash-ref")
        .arg(dir.path().join("reference.fasta"))
        .assert()
        .success()
        .stdout(format!("{REFERENCE_CHECKSUM}\n"));
}

#[test]
fn hash_ref_ignores_case_and_line_wrapping() {
    let dir = tempfile::tempdir().unwrap();
    let wrapped = dir.path().join("wrapped.fasta");
    // Same sequence, lowercased and wrapped differently
    let body = "acgt".repeat(75);
    let (a, b) = body.split_at(101);
    std::fs::write(&wrapped, format!(">ref1 extra description\n{a}\n{b}\n")).unwrap();

    cmd()
        .arg("hash-ref")
        .arg(&wrapped)
        .assert()
        .success()
        .stdout(format!("{REFERENCE_CHECKSUM}\n"));
}

#[test]
fn hash_bed_six_column_needs_reference() {
    let dir = tempfile::tempdir().unwrap();
    write_scheme(dir.path());

    cmd()
        .arg("hash-bed")
        .arg(dir.path().join("primer.bed"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--reference"));
}

#[test]
fn hash_bed_six_column_with_reference() {
    let dir = tempfile::tempdir().unwrap();
    write_scheme(dir.path());

    cmd()
        .arg("hash-bed")
        .arg(dir.path().join("primer.bed"))
        .arg("--reference")
        .arg(dir.path().join("reference.fasta"))
        .assert()
        .success()
        .stdout(format!("{PRIMER_CHECKSUM}\n"));
}

#[test]
fn hash_bed_json_output() {
    let dir = tempfile::tempdir().unwrap();
    write_scheme(dir.path());

    cmd()
        .arg("hash-bed")
        .arg(dir.path().join("primer.bed"))
        .arg("--reference")
        .arg(dir.path().join("reference.fasta"))
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"primer_checksum\""))
        .stdout(predicate::str::contains(PRIMER_CHECKSUM));
}

#[test]
fn six_to_seven_resolves_table() {
    let dir = tempfile::tempdir().unwrap();
    write_scheme(dir.path());

    let seq = "ACGT".repeat(5);
    let expected = format!(
        "ref1\t100\t120\tamp1_LEFT\tpool1\t+\t{seq}\nref1\t180\t200\tamp1_RIGHT\tpool1\t-\t{seq}\n"
    );

    cmd()
        .arg("6to7")
        .arg(dir.path().join("primer.bed"))
        .arg(dir.path().join("reference.fasta"))
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn six_and_seven_column_tables_hash_identically() {
    let dir = tempfile::tempdir().unwrap();
    write_scheme(dir.path());

    let resolved = cmd()
        .arg("6to7")
        .arg(dir.path().join("primer.bed"))
        .arg(dir.path().join("reference.fasta"))
        .output()
        .unwrap();
    assert!(resolved.status.success());
    let seven_col = dir.path().join("resolved.bed");
    std::fs::write(&seven_col, &resolved.stdout).unwrap();

    // A fully resolved table hashes without the reference
    cmd()
        .arg("hash-bed")
        .arg(&seven_col)
        .assert()
        .success()
        .stdout(format!("{PRIMER_CHECKSUM}\n"));
}

#[test]
fn six_to_seven_rejects_unknown_suffix() {
    let dir = tempfile::tempdir().unwrap();
    write_scheme(dir.path());
    std::fs::write(
        dir.path().join("primer.bed"),
        "ref1\t100\t120\tamp1_MID\tpool1\t.\n",
    )
    .unwrap();

    cmd()
        .arg("6to7")
        .arg(dir.path().join("primer.bed"))
        .arg(dir.path().join("reference.fasta"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("amp1_MID"));
}

#[test]
fn hash_bed_seven_column_with_missing_sequences_needs_reference() {
    let dir = tempfile::tempdir().unwrap();
    write_scheme(dir.path());
    // 7-column layout, but the sequence column is unresolved
    std::fs::write(
        dir.path().join("primer.bed"),
        "ref1\t100\t120\tamp1_LEFT\tpool1\t+\t.\nref1\t180\t200\tamp1_RIGHT\tpool1\t-\t.\n",
    )
    .unwrap();

    cmd()
        .arg("hash-bed")
        .arg(dir.path().join("primer.bed"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--reference"));

    cmd()
        .arg("hash-bed")
        .arg(dir.path().join("primer.bed"))
        .arg("--reference")
        .arg(dir.path().join("reference.fasta"))
        .assert()
        .success()
        .stdout(format!("{PRIMER_CHECKSUM}\n"));
}

#[test]
fn seven_to_six_inverts_six_to_seven() {
    let dir = tempfile::tempdir().unwrap();
    write_scheme(dir.path());

    let resolved = cmd()
        .arg("6to7")
        .arg(dir.path().join("primer.bed"))
        .arg(dir.path().join("reference.fasta"))
        .output()
        .unwrap();
    assert!(resolved.status.success());
    let seven_col = dir.path().join("resolved.bed");
    std::fs::write(&seven_col, &resolved.stdout).unwrap();

    let seq = "ACGT".repeat(5);
    let expected = format!(
        "ref1\t100\t120\tamp1_LEFT\tpool1\t{seq}\nref1\t180\t200\tamp1_RIGHT\tpool1\t{seq}\n"
    );
    cmd()
        .arg("7to6")
        .arg(&seven_col)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn seven_to_six_rejects_six_column_input() {
    let dir = tempfile::tempdir().unwrap();
    write_scheme(dir.path());

    cmd()
        .arg("7to6")
        .arg(dir.path().join("primer.bed"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a 7-column table"));
}

#[test]
fn show_intervals_prints_amplicon_spans() {
    let dir = tempfile::tempdir().unwrap();
    write_scheme(dir.path());

    cmd()
        .arg("show-intervals")
        .arg(dir.path().join("primer.bed"))
        .assert()
        .success()
        .stdout("ref1\t100\t200\tamp1\n");
}

#[test]
fn show_discordant_primers_reports_mismatches() {
    let dir = tempfile::tempdir().unwrap();
    write_scheme(dir.path());
    let seq = "ACGT".repeat(5);
    // LEFT carries a sequence the reference does not back; RIGHT is concordant
    std::fs::write(
        dir.path().join("primer.bed"),
        format!(
            "ref1\t100\t120\tamp1_LEFT\tpool1\t+\tTTTTTTTTTTTTTTTTTTTT\n\
             ref1\t180\t200\tamp1_RIGHT\tpool1\t-\t{seq}\n"
        ),
    )
    .unwrap();

    cmd()
        .arg("show-discordant-primers")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(format!(
            "amp1_LEFT\tref1\t+\tTTTTTTTTTTTTTTTTTTTT\t{seq}\n"
        ));
}

#[test]
fn show_discordant_primers_empty_for_built_scheme() {
    let dir = tempfile::tempdir().unwrap();
    let scheme = dir.path().join("scheme");
    std::fs::create_dir(&scheme).unwrap();
    write_scheme(&scheme);
    let out = dir.path().join("built");

    cmd()
        .arg("build")
        .arg(&scheme)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .success();

    cmd()
        .arg("show-discordant-primers")
        .arg(&out)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn diff_reports_symmetric_difference() {
    let dir = tempfile::tempdir().unwrap();
    write_scheme(dir.path());
    let other = dir.path().join("other.bed");
    // amp1_RIGHT shifted by two bases, amp1_LEFT unchanged
    std::fs::write(
        &other,
        "ref1\t100\t120\tamp1_LEFT\tpool1\t.\nref1\t182\t202\tamp1_RIGHT\tpool1\t.\n",
    )
    .unwrap();

    cmd()
        .arg("diff")
        .arg(dir.path().join("primer.bed"))
        .arg(&other)
        .assert()
        .success()
        .stdout(
            "first\tref1\t180\t200\tamp1_RIGHT\tpool1\t.\n\
             second\tref1\t182\t202\tamp1_RIGHT\tpool1\t.\n",
        );

    // A table always diffs empty against itself
    cmd()
        .arg("diff")
        .arg(dir.path().join("primer.bed"))
        .arg(dir.path().join("primer.bed"))
        .assert()
        .success()
        .stdout("");
}

#[test]
fn diff_only_positions_ignores_resolved_fields() {
    let dir = tempfile::tempdir().unwrap();
    write_scheme(dir.path());

    let resolved = cmd()
        .arg("6to7")
        .arg(dir.path().join("primer.bed"))
        .arg(dir.path().join("reference.fasta"))
        .output()
        .unwrap();
    assert!(resolved.status.success());
    let seven_col = dir.path().join("resolved.bed");
    std::fs::write(&seven_col, &resolved.stdout).unwrap();

    // Same intervals in 6- and 7-column form: a field-level diff reports all
    // four records, a position-level diff reports none
    cmd()
        .arg("diff")
        .arg(dir.path().join("primer.bed"))
        .arg(&seven_col)
        .assert()
        .success()
        .stdout(predicate::str::contains("first\t").and(predicate::str::contains("second\t")));

    cmd()
        .arg("diff")
        .arg(dir.path().join("primer.bed"))
        .arg(&seven_col)
        .arg("--only-positions")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn validate_accepts_valid_scheme() {
    let dir = tempfile::tempdir().unwrap();
    write_scheme(dir.path());

    cmd()
        .arg("validate")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("scheme is valid"));
}

#[test]
fn validate_reports_all_problems_and_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_scheme(dir.path());
    // Uppercase name and a stale checksum: two independent errors
    let info = INFO_JSON
        .replace("\"artic\"", "\"Artic\"")
        .replace(
            "\"contributors\"",
            &format!("\"primer_checksum\": \"sha256:{}\",\n  \"contributors\"", "0".repeat(64)),
        );
    std::fs::write(dir.path().join("info.json"), info).unwrap();

    cmd()
        .arg("validate")
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("lowercase"))
        .stdout(predicate::str::contains("primer_checksum"))
        .stderr(predicate::str::contains("2 error(s)"));
}

#[test]
fn validate_json_report() {
    let dir = tempfile::tempdir().unwrap();
    write_scheme(dir.path());

    cmd()
        .arg("validate")
        .arg(dir.path())
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"valid\": true"));
}

#[test]
fn build_writes_canonical_scheme() {
    let dir = tempfile::tempdir().unwrap();
    let scheme = dir.path().join("scheme");
    std::fs::create_dir(&scheme).unwrap();
    write_scheme(&scheme);
    let out = dir.path().join("built");

    cmd()
        .arg("build")
        .arg(&scheme)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("built scheme written"));

    // Metadata carries fresh checksums
    let info = std::fs::read_to_string(out.join("info.json")).unwrap();
    assert!(info.contains(PRIMER_CHECKSUM));
    assert!(info.contains(REFERENCE_CHECKSUM));

    // Table was resolved to 7 columns
    let bed = std::fs::read_to_string(out.join("primer.bed")).unwrap();
    for line in bed.lines() {
        assert_eq!(line.split('\t').count(), 7, "line: {line}");
    }

    // Reference was rewritten in canonical form
    let fasta = std::fs::read_to_string(out.join("reference.fasta")).unwrap();
    assert_eq!(fasta, format!(">ref1\n{}\n", "ACGT".repeat(75)));

    // Built output validates clean
    cmd().arg("validate").arg(&out).assert().success();
}

#[test]
fn build_refuses_existing_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    let scheme = dir.path().join("scheme");
    std::fs::create_dir(&scheme).unwrap();
    write_scheme(&scheme);
    let out = dir.path().join("built");
    std::fs::create_dir(&out).unwrap();

    cmd()
        .arg("build")
        .arg(&scheme)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn build_refuses_invalid_scheme_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let scheme = dir.path().join("scheme");
    std::fs::create_dir(&scheme).unwrap();
    write_scheme(&scheme);
    std::fs::write(
        scheme.join("info.json"),
        INFO_JSON.replace("\"sars-cov-2\"", "\"SARS-CoV-2\""),
    )
    .unwrap();
    let out = dir.path().join("built");

    cmd()
        .arg("build")
        .arg(&scheme)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed validation"));
    assert!(!out.exists());
}

#[test]
fn missing_scheme_file_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    write_scheme(dir.path());
    std::fs::remove_file(dir.path().join("reference.fasta")).unwrap();

    cmd()
        .arg("validate")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("reference.fasta"));
}
