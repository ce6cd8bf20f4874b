//! Conversion of 6-column coordinate tables into fully qualified 7-column
//! records.
//!
//! Resolution is a coordinate/strand reinterpretation, not primer
//! re-discovery: strand comes from the primer-name suffix, coordinates stay in
//! forward-reference space for both strands, and the only reference access is
//! slicing the already-given interval to backfill missing sequences (reverse
//! complemented for `-` primers). No alignment or search is performed.

use std::collections::HashMap;

use thiserror::Error;

use crate::core::record::{CoordinateRecord, Strand};
use crate::core::reference::{reverse_complement, ReferenceSequence};

#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("no recognized LEFT/RIGHT suffix in primer name '{0}'")]
    UnknownStrandConvention(String),

    #[error("primer '{name}' has an empty interval: start {start} >= end {end}")]
    EmptyInterval { name: String, start: u64, end: u64 },

    #[error("primer '{name}' span {start}-{end} exceeds reference '{chrom}' length {length}")]
    OutOfBounds {
        name: String,
        chrom: String,
        start: u64,
        end: u64,
        length: u64,
    },

    #[error("primer '{name}' references unknown sequence '{chrom}'")]
    UnknownReference { name: String, chrom: String },
}

/// Resolve coordinate records into 7-column form.
///
/// Every emitted record has a strand (inferred from the name suffix when not
/// already present) and a sequence (backfilled from the reference when
/// absent). The half-open `[start, end)` interval is kept in forward-strand
/// genome coordinates for both strands.
///
/// Output ordering preserves the input's amplicon grouping; within an
/// amplicon, LEFT primers precede RIGHT primers and alts keep their input
/// order.
///
/// # Errors
///
/// Fails on the first record with no recognized strand suffix, an empty or
/// out-of-bounds span, or a `chrom` naming no known reference. A failed
/// record aborts the whole bundle; no partial output is produced.
pub fn resolve(
    records: &[CoordinateRecord],
    references: &[ReferenceSequence],
) -> Result<Vec<CoordinateRecord>, ResolutionError> {
    let mut resolved = Vec::with_capacity(records.len());

    for record in records {
        let (strand, expected) = expected_sequence(record, references)?;
        let sequence = record.sequence.clone().unwrap_or(expected);
        resolved.push(CoordinateRecord {
            strand: Some(strand),
            sequence: Some(sequence),
            ..record.clone()
        });
    }

    // First-seen rank per amplicon keeps the input grouping; the stable sort
    // then only moves RIGHT primers behind LEFT ones within a group.
    let mut amplicon_rank: HashMap<String, usize> = HashMap::new();
    for record in &resolved {
        let next = amplicon_rank.len();
        amplicon_rank
            .entry(record.amplicon_id().to_string())
            .or_insert(next);
    }
    resolved.sort_by_key(|record| (amplicon_rank[record.amplicon_id()], record.strand));

    Ok(resolved)
}

/// Strand and reference-implied sequence for one record.
///
/// The returned sequence is what the reference says the primer should be:
/// the forward slice of `[start, end)` for `+` primers, its reverse
/// complement for `-`. Any sequence stored on the record is ignored.
///
/// # Errors
///
/// As [`resolve`], for a single record.
pub fn expected_sequence(
    record: &CoordinateRecord,
    references: &[ReferenceSequence],
) -> Result<(Strand, String), ResolutionError> {
    let strand = match record.strand {
        Some(strand) => strand,
        None => Strand::from_primer_name(&record.name)
            .ok_or_else(|| ResolutionError::UnknownStrandConvention(record.name.clone()))?,
    };

    if record.start >= record.end {
        return Err(ResolutionError::EmptyInterval {
            name: record.name.clone(),
            start: record.start,
            end: record.end,
        });
    }

    let reference = references
        .iter()
        .find(|r| r.name == record.chrom)
        .ok_or_else(|| ResolutionError::UnknownReference {
            name: record.name.clone(),
            chrom: record.chrom.clone(),
        })?;

    let forward = reference.slice(record.start, record.end).ok_or_else(|| {
        ResolutionError::OutOfBounds {
            name: record.name.clone(),
            chrom: record.chrom.clone(),
            start: record.start,
            end: record.end,
            length: reference.len(),
        }
    })?;

    let sequence = match strand {
        Strand::Forward => forward.to_string(),
        Strand::Reverse => reverse_complement(forward),
    };
    Ok((strand, sequence))
}
