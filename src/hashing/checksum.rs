use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::core::record::CoordinateRecord;
use crate::core::reference::ReferenceSequence;
use crate::hashing::canon::{canonical_records, canonical_reference};
use crate::resolve::{resolve, ResolutionError};

/// Algorithm identifier tagged onto every checksum this crate generates
pub const ALGORITHM_ID: &str = "sha256";

#[derive(Error, Debug)]
#[error("malformed checksum '{0}': expected 'algorithm:digest'")]
pub struct ChecksumParseError(String);

/// A tagged digest, serialized as `algorithm:digest` (e.g. `sha256:ab12...`).
///
/// The tag lets stored checksums self-describe how they were generated;
/// values with an unrecognized tag are rejected rather than compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checksum {
    pub algorithm: String,
    pub digest: String,
}

impl Checksum {
    /// SHA-256 digest over the UTF-8 bytes of canonical text.
    #[must_use]
    pub fn of_text(text: &str) -> Self {
        let digest = Sha256::digest(text.as_bytes());
        Self {
            algorithm: ALGORITHM_ID.to_string(),
            digest: format!("{digest:x}"),
        }
    }

    /// Whether this checksum was generated by an algorithm this crate can
    /// recompute.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        self.algorithm == ALGORITHM_ID
    }
}

impl std::fmt::Display for Checksum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.digest)
    }
}

impl FromStr for Checksum {
    type Err = ChecksumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (algorithm, digest) = s
            .split_once(':')
            .ok_or_else(|| ChecksumParseError(s.to_string()))?;
        if algorithm.is_empty() || digest.is_empty() {
            return Err(ChecksumParseError(s.to_string()));
        }
        Ok(Self {
            algorithm: algorithm.to_string(),
            digest: digest.to_string(),
        })
    }
}

/// Checksum of a coordinate table.
///
/// Unresolved records (6-column input) are resolved against the reference
/// first, so a 6-column table and its resolved 7-column form hash
/// identically.
///
/// # Errors
///
/// Returns `ResolutionError` when resolution of a 6-column record fails.
pub fn primer_checksum(
    records: &[CoordinateRecord],
    references: &[ReferenceSequence],
) -> Result<Checksum, ResolutionError> {
    let needs_resolution = records
        .iter()
        .any(|r| r.strand.is_none() || r.sequence.is_none());

    let canonical = if needs_resolution {
        canonical_records(&resolve(records, references)?)
    } else {
        canonical_records(records)
    };
    Ok(Checksum::of_text(&canonical))
}

/// Checksum of the canonical reference text.
#[must_use]
pub fn reference_checksum(references: &[ReferenceSequence]) -> Checksum {
    Checksum::of_text(&canonical_reference(references))
}
