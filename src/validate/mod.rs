//! Scheme validation and the validate-then-write build step.
//!
//! Validation never stops at the first problem: schema findings, column-count
//! findings and checksum findings are all collected into one
//! [`ValidationReport`] so a caller sees every issue in a single pass.
//! Checksum regeneration is never a side effect of validation; it only
//! happens in [`build`].

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::core::record::CoordinateRecord;
use crate::core::scheme::{SchemeBundle, SchemeInfo, SchemeStatus};
use crate::hashing::checksum::{primer_checksum, reference_checksum, Checksum};
use crate::resolve::{resolve, ResolutionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

/// What a finding is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    SchemaViolation,
    InvalidColumnCount,
    ChecksumMismatch,
    UnknownChecksumAlgorithm,
    ReferenceMismatch,
}

#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub kind: FindingKind,
    pub message: String,
}

/// Aggregated outcome of validating one scheme bundle
#[derive(Debug, Default, Serialize)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    /// True when no error-severity findings were collected
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self
            .findings
            .iter()
            .any(|f| f.severity == Severity::Error)
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count()
    }

    fn error(&mut self, kind: FindingKind, message: impl Into<String>) {
        self.findings.push(Finding {
            severity: Severity::Error,
            kind,
            message: message.into(),
        });
    }

    fn warning(&mut self, kind: FindingKind, message: impl Into<String>) {
        self.findings.push(Finding {
            severity: Severity::Warning,
            kind,
            message: message.into(),
        });
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for finding in &self.findings {
            let severity = match finding.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            writeln!(f, "{severity}: {}", finding.message)?;
        }
        Ok(())
    }
}

/// Validate one scheme bundle: schema/structural checks on the metadata,
/// column-count check on the coordinate table, then checksum and
/// reference-name cross-checks. All findings are aggregated.
#[must_use]
pub fn validate(bundle: &SchemeBundle) -> ValidationReport {
    let mut report = ValidationReport::default();
    check_schema(&bundle.info, &mut report);
    check_columns(bundle.table_columns, &mut report);
    check_references(bundle, &mut report);
    check_checksums(bundle, &mut report);
    debug!(
        findings = report.findings.len(),
        valid = report.is_valid(),
        "validation finished"
    );
    report
}

/// Structural checks on the metadata document: required fields present,
/// value patterns respected, enumerations recognized.
fn check_schema(info: &SchemeInfo, report: &mut ValidationReport) {
    for (field, present) in [
        ("schema_version", info.schema_version.is_some()),
        ("name", info.name.is_some()),
        ("amplicon_size", info.amplicon_size.is_some()),
        ("version", info.version.is_some()),
        ("organism", info.organism.is_some()),
        ("status", info.status.is_some()),
    ] {
        if !present {
            report.error(
                FindingKind::SchemaViolation,
                format!("missing required field '{field}'"),
            );
        }
    }

    if let Some(name) = &info.name {
        if !is_lowercase_token(name) {
            report.error(
                FindingKind::SchemaViolation,
                format!("scheme name '{name}' must be a lowercase token"),
            );
        }
    }
    if let Some(organism) = &info.organism {
        if !is_lowercase_token(organism) {
            report.error(
                FindingKind::SchemaViolation,
                format!("organism '{organism}' must be a lowercase token"),
            );
        }
    }
    if let Some(version) = &info.version {
        if !is_version(version) {
            report.error(
                FindingKind::SchemaViolation,
                format!("version '{version}' does not match the 'v<major>[.<minor>...]' pattern"),
            );
        }
    }
    if let Some(size) = info.amplicon_size {
        if size == 0 {
            report.error(
                FindingKind::SchemaViolation,
                "amplicon_size must be at least 1",
            );
        }
    }
    if let Some(status) = &info.status {
        if SchemeStatus::parse(status).is_none() {
            report.error(
                FindingKind::SchemaViolation,
                format!("unrecognized status '{status}'"),
            );
        }
    }
    if info.contributors.is_empty() {
        report.warning(FindingKind::SchemaViolation, "no contributors listed");
    }
}

fn check_columns(columns: usize, report: &mut ValidationReport) {
    if columns != 6 && columns != 7 {
        report.error(
            FindingKind::InvalidColumnCount,
            format!("coordinate table has {columns} columns, expected 6 or 7"),
        );
    }
}

/// Every `chrom` in the coordinate table must name a reference sequence.
fn check_references(bundle: &SchemeBundle, report: &mut ValidationReport) {
    let mut flagged: Vec<&str> = Vec::new();
    for record in &bundle.records {
        if bundle.references.iter().any(|r| r.name == record.chrom) {
            continue;
        }
        if !flagged.contains(&record.chrom.as_str()) {
            flagged.push(&record.chrom);
            report.error(
                FindingKind::ReferenceMismatch,
                format!("coordinate records reference unknown sequence '{}'", record.chrom),
            );
        }
    }
}

/// Compare stored checksums, when present, against freshly computed ones.
fn check_checksums(bundle: &SchemeBundle, report: &mut ValidationReport) {
    if let Some(stored) = &bundle.info.primer_checksum {
        match primer_checksum(&bundle.records, &bundle.references) {
            Ok(computed) => {
                compare_checksum("primer_checksum", stored, &computed, report);
            }
            Err(e) => report.error(
                FindingKind::ChecksumMismatch,
                format!("could not recompute primer_checksum: {e}"),
            ),
        }
    }

    if let Some(stored) = &bundle.info.reference_checksum {
        let computed = reference_checksum(&bundle.references);
        compare_checksum("reference_checksum", stored, &computed, report);
    }
}

fn compare_checksum(
    field: &str,
    stored: &str,
    computed: &Checksum,
    report: &mut ValidationReport,
) {
    let stored: Checksum = match stored.parse() {
        Ok(parsed) => parsed,
        Err(e) => {
            report.error(FindingKind::UnknownChecksumAlgorithm, format!("{field}: {e}"));
            return;
        }
    };
    if !stored.is_recognized() {
        report.error(
            FindingKind::UnknownChecksumAlgorithm,
            format!("{field}: unrecognized checksum algorithm '{}'", stored.algorithm),
        );
        return;
    }
    if &stored != computed {
        report.error(
            FindingKind::ChecksumMismatch,
            format!("{field}: stored {stored} != computed {computed}"),
        );
    }
}

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("scheme failed validation with {} error(s):\n{report}", report.error_count())]
    Failed { report: ValidationReport },

    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

/// Result of a successful build, ready for the caller to persist
#[derive(Debug)]
pub struct BuildOutput {
    /// Metadata with both checksums freshly computed
    pub info: SchemeInfo,

    /// Resolved records, amplicon-grouped with LEFT before RIGHT
    pub records: Vec<CoordinateRecord>,
}

/// Validate-then-write: run the schema and column-count checks, resolve the
/// table to 7-column form if needed, recompute both checksums and emit the
/// updated metadata plus resolved records.
///
/// # Errors
///
/// Returns `BuildError::Failed` (carrying the report) when schema or
/// column-count checks fail, or `BuildError::Resolution` when the table
/// cannot be resolved.
pub fn build(bundle: &SchemeBundle) -> Result<BuildOutput, BuildError> {
    let mut report = ValidationReport::default();
    check_schema(&bundle.info, &mut report);
    check_columns(bundle.table_columns, &mut report);
    check_references(bundle, &mut report);
    if !report.is_valid() {
        return Err(BuildError::Failed { report });
    }

    let records = resolve(&bundle.records, &bundle.references)?;

    let mut info = bundle.info.clone();
    info.primer_checksum = Some(primer_checksum(&records, &bundle.references)?.to_string());
    info.reference_checksum = Some(reference_checksum(&bundle.references).to_string());

    Ok(BuildOutput { info, records })
}

/// Lowercase names: letters, digits, `-`, `.` with a leading alphanumeric
fn is_lowercase_token(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_lowercase() || first.is_ascii_digit())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.')
}

/// `v` followed by dot-separated numbers: `v1`, `v4.1`, `v2.0.1`
fn is_version(s: &str) -> bool {
    let Some(rest) = s.strip_prefix('v') else {
        return false;
    };
    !rest.is_empty()
        && rest
            .split('.')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::CoordinateRecord;
    use crate::core::reference::ReferenceSequence;
    use crate::core::scheme::Contributor;
    use crate::hashing::canon::canonical_records;

    fn test_info() -> SchemeInfo {
        SchemeInfo {
            schema_version: Some("3.0.0".to_string()),
            name: Some("artic".to_string()),
            amplicon_size: Some(400),
            version: Some("v4.1".to_string()),
            organism: Some("sars-cov-2".to_string()),
            status: Some("VALIDATED".to_string()),
            contributors: vec![Contributor {
                name: "A. Person".to_string(),
                orcid: None,
                email: None,
            }],
            ..SchemeInfo::default()
        }
    }

    fn test_bundle() -> SchemeBundle {
        let records = vec![
            CoordinateRecord::parse("ref1\t100\t120\tamp1_LEFT\tpool1\t.", 6).unwrap(),
            CoordinateRecord::parse("ref1\t180\t200\tamp1_RIGHT\tpool1\t.", 6).unwrap(),
        ];
        SchemeBundle {
            info: test_info(),
            records,
            table_columns: 6,
            references: vec![ReferenceSequence::new("ref1", &"ACGT".repeat(75)).unwrap()],
        }
    }

    #[test]
    fn test_valid_bundle_passes() {
        let report = validate(&test_bundle());
        assert!(report.is_valid(), "unexpected findings: {report}");
    }

    #[test]
    fn test_findings_are_aggregated_not_short_circuited() {
        let mut bundle = test_bundle();
        bundle.info.organism = None; // schema violation
        bundle.info.primer_checksum = Some(format!(
            "sha256:{}",
            "0".repeat(64) // wrong digest
        ));

        let report = validate(&bundle);
        assert!(!report.is_valid());
        assert_eq!(report.error_count(), 2);
        assert!(report
            .findings
            .iter()
            .any(|f| f.kind == FindingKind::SchemaViolation));
        assert!(report
            .findings
            .iter()
            .any(|f| f.kind == FindingKind::ChecksumMismatch));
    }

    #[test]
    fn test_schema_patterns() {
        let mut bundle = test_bundle();
        bundle.info.name = Some("Artic".to_string());
        bundle.info.version = Some("4.1".to_string());
        bundle.info.status = Some("PUBLISHED".to_string());

        let report = validate(&bundle);
        assert_eq!(report.error_count(), 3);
        assert!(report
            .findings
            .iter()
            .all(|f| f.kind == FindingKind::SchemaViolation));
    }

    #[test]
    fn test_invalid_column_count_flagged() {
        let mut bundle = test_bundle();
        bundle.table_columns = 5;
        let report = validate(&bundle);
        assert!(report
            .findings
            .iter()
            .any(|f| f.kind == FindingKind::InvalidColumnCount));
    }

    #[test]
    fn test_unknown_checksum_algorithm_rejected() {
        let mut bundle = test_bundle();
        bundle.info.reference_checksum = Some("blake3:abcdef".to_string());
        let report = validate(&bundle);
        assert!(report
            .findings
            .iter()
            .any(|f| f.kind == FindingKind::UnknownChecksumAlgorithm));
    }

    #[test]
    fn test_reference_mismatch_flagged_once_per_chrom() {
        let mut bundle = test_bundle();
        for record in &mut bundle.records {
            record.chrom = "ref9".to_string();
        }
        let report = validate(&bundle);
        let mismatches = report
            .findings
            .iter()
            .filter(|f| f.kind == FindingKind::ReferenceMismatch)
            .count();
        assert_eq!(mismatches, 1);
    }

    #[test]
    fn test_matching_stored_checksums_pass() {
        let mut bundle = test_bundle();
        bundle.info.primer_checksum = Some(
            primer_checksum(&bundle.records, &bundle.references)
                .unwrap()
                .to_string(),
        );
        bundle.info.reference_checksum = Some(reference_checksum(&bundle.references).to_string());
        assert!(validate(&bundle).is_valid());
    }

    #[test]
    fn test_build_emits_fresh_checksums() {
        let bundle = test_bundle();
        let output = build(&bundle).unwrap();

        let expected = primer_checksum(&output.records, &bundle.references)
            .unwrap()
            .to_string();
        assert_eq!(output.info.primer_checksum, Some(expected));
        assert!(output.records.iter().all(|r| r.strand.is_some()));
        assert!(output.records.iter().all(|r| r.sequence.is_some()));

        // The emitted checksum covers the canonical form of the emitted table
        let recomputed = Checksum::of_text(&canonical_records(&output.records));
        assert_eq!(
            output.info.primer_checksum,
            Some(recomputed.to_string())
        );
    }

    #[test]
    fn test_build_refuses_invalid_metadata() {
        let mut bundle = test_bundle();
        bundle.info.organism = None;
        assert!(matches!(build(&bundle), Err(BuildError::Failed { .. })));
    }

    #[test]
    fn test_build_scenario_checksums() {
        // Two-primer scheme against a 300-base reference: spans unchanged,
        // strands inferred, digests match the checksum engine.
        let output = build(&test_bundle()).unwrap();
        assert_eq!(
            output.info.primer_checksum.as_deref(),
            Some("sha256:5a5882212c51635af50397e717ec7047884880ff7d77d83da10b1c33b924cce3")
        );
        assert_eq!(
            output.info.reference_checksum.as_deref(),
            Some("sha256:e60d2186ff7d7de46c56ed983acf2abe281ea58d03f51df03162b053c350b956")
        );
    }
}
