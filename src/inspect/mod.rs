//! Read-only inspection of coordinate tables.
//!
//! These helpers answer questions about tables without changing them: which
//! stored primer sequences disagree with the reference, what genomic span
//! each amplicon covers, and how two tables differ.

use serde::Serialize;

use crate::core::record::{CoordinateRecord, Strand};
use crate::core::reference::ReferenceSequence;
use crate::resolve::{expected_sequence, ResolutionError};

/// A primer whose stored sequence disagrees with the reference.
#[derive(Debug, Clone, Serialize)]
pub struct Discordance {
    pub name: String,
    pub chrom: String,
    pub strand: Strand,
    pub stored: String,
    pub expected: String,
}

/// Find primers whose stored sequence differs from the oriented reference
/// slice of their interval.
///
/// Records without a stored sequence are skipped; they carry nothing to
/// disagree with, so backfilled tables always come back empty.
///
/// # Errors
///
/// Fails like [`crate::resolve::resolve`] on the first record with no
/// recognized strand suffix, a bad span, or an unknown reference name.
pub fn discordant_primers(
    records: &[CoordinateRecord],
    references: &[ReferenceSequence],
) -> Result<Vec<Discordance>, ResolutionError> {
    let mut discordant = Vec::new();
    for record in records {
        let Some(stored) = &record.sequence else {
            continue;
        };
        let (strand, expected) = expected_sequence(record, references)?;
        if *stored != expected {
            discordant.push(Discordance {
                name: record.name.clone(),
                chrom: record.chrom.clone(),
                strand,
                stored: stored.clone(),
                expected,
            });
        }
    }
    Ok(discordant)
}

/// Union span of one amplicon's primers on one reference sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmpliconInterval {
    pub chrom: String,
    pub start: u64,
    pub end: u64,
    pub amplicon: String,
}

/// Union span (min start, max end) of each amplicon's primers, grouped by
/// `(chrom, amplicon_id)` and sorted by chrom then `(start, end)`.
///
/// Alt primers extend their amplicon's span rather than opening a new one.
#[must_use]
pub fn amplicon_intervals(records: &[CoordinateRecord]) -> Vec<AmpliconInterval> {
    let mut spans: Vec<AmpliconInterval> = Vec::new();
    for record in records {
        let amplicon = record.amplicon_id();
        match spans
            .iter_mut()
            .find(|s| s.chrom == record.chrom && s.amplicon == amplicon)
        {
            Some(span) => {
                span.start = span.start.min(record.start);
                span.end = span.end.max(record.end);
            }
            None => spans.push(AmpliconInterval {
                chrom: record.chrom.clone(),
                start: record.start,
                end: record.end,
                amplicon: amplicon.to_string(),
            }),
        }
    }
    spans.sort_by(|a, b| (&a.chrom, a.start, a.end).cmp(&(&b.chrom, b.start, b.end)));
    spans
}

/// Which input table a differing record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffSide {
    First,
    Second,
}

impl std::fmt::Display for DiffSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::First => "first",
            Self::Second => "second",
        })
    }
}

/// Symmetric difference of two tables.
///
/// With `positions_only`, records are matched by `(chrom, start, end)`
/// alone; otherwise every field participates, so the same primer in 6- and
/// 7-column form counts as a difference. Output order: first-table records
/// in their input order, then second-table records in theirs.
#[must_use]
pub fn symmetric_diff(
    first: &[CoordinateRecord],
    second: &[CoordinateRecord],
    positions_only: bool,
) -> Vec<(DiffSide, CoordinateRecord)> {
    let same = |a: &CoordinateRecord, b: &CoordinateRecord| {
        if positions_only {
            a.chrom == b.chrom && a.start == b.start && a.end == b.end
        } else {
            a == b
        }
    };

    let mut diff = Vec::new();
    for record in first {
        if !second.iter().any(|other| same(record, other)) {
            diff.push((DiffSide::First, record.clone()));
        }
    }
    for record in second {
        if !first.iter().any(|other| same(other, record)) {
            diff.push((DiffSide::Second, record.clone()));
        }
    }
    diff
}
