//! Reader for reference FASTA files using noodles.
//!
//! Supports both uncompressed and gzip/bgzip compressed files:
//! `.fasta`, `.fa`, `.fna`, plus `.gz`/`.bgz` variants of each.

use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use noodles::fasta;
use thiserror::Error;

use crate::core::reference::{ReferenceSequence, SequenceError};

#[derive(Error, Debug)]
pub enum FastaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("no sequences found in FASTA file")]
    NoSequences,

    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

/// Check if the path is a gzipped file
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read all sequences from a FASTA file.
///
/// Sequences are uppercased and validated against the {A, C, G, T, N}
/// alphabet on the way in.
///
/// # Errors
///
/// Returns `FastaError::Io` if the file cannot be read, `FastaError::Noodles`
/// if parsing fails, `FastaError::NoSequences` for an empty file, or
/// `FastaError::Sequence` for alphabet violations.
pub fn read_fasta_file(path: &Path) -> Result<Vec<ReferenceSequence>, FastaError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        let reader = BufReader::new(GzDecoder::new(file));
        read_fasta_reader(&mut fasta::io::Reader::new(reader))
    } else {
        let reader = BufReader::new(file);
        read_fasta_reader(&mut fasta::io::Reader::new(reader))
    }
}

/// Read all sequences from raw FASTA text
///
/// # Errors
///
/// As [`read_fasta_file`], minus the IO cases.
pub fn read_fasta_text(text: &str) -> Result<Vec<ReferenceSequence>, FastaError> {
    read_fasta_reader(&mut fasta::io::Reader::new(text.as_bytes()))
}

fn read_fasta_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Vec<ReferenceSequence>, FastaError> {
    let mut references = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| FastaError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let name = String::from_utf8_lossy(record.name()).to_string();
        let sequence = String::from_utf8_lossy(record.sequence().as_ref()).to_string();
        references.push(ReferenceSequence::new(name, &sequence)?);
    }

    if references.is_empty() {
        return Err(FastaError::NoSequences);
    }

    Ok(references)
}
