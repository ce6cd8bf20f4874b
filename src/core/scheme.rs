use serde::{Deserialize, Serialize};

use crate::core::record::CoordinateRecord;
use crate::core::reference::ReferenceSequence;

/// File names of the artifacts making up a scheme directory
pub const METADATA_FILE_NAME: &str = "info.json";
pub const PRIMER_FILE_NAME: &str = "primer.bed";
pub const REFERENCE_FILE_NAME: &str = "reference.fasta";

/// Lifecycle status of a primer scheme definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemeStatus {
    Draft,
    Tested,
    Validated,
    Deprecated,
    Withdrawn,
}

impl SchemeStatus {
    /// Parse a status value as stored in `info.json`
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "DRAFT" => Some(Self::Draft),
            "TESTED" => Some(Self::Tested),
            "VALIDATED" => Some(Self::Validated),
            "DEPRECATED" => Some(Self::Deprecated),
            "WITHDRAWN" => Some(Self::Withdrawn),
            _ => None,
        }
    }
}

impl std::fmt::Display for SchemeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Draft => "DRAFT",
            Self::Tested => "TESTED",
            Self::Validated => "VALIDATED",
            Self::Deprecated => "DEPRECATED",
            Self::Withdrawn => "WITHDRAWN",
        };
        f.write_str(s)
    }
}

/// A person who contributed to the scheme definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orcid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// The scheme metadata document (`info.json`).
///
/// Required fields are modeled as `Option` so the validator can report every
/// missing or malformed field in one pass instead of failing at
/// deserialization; see [`crate::validate::validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemeInfo {
    /// Version of the schema this document conforms to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,

    /// Canonical scheme name, lowercase (e.g. "artic-sars-cov-2")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Length in base pairs of an amplicon in the scheme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amplicon_size: Option<u64>,

    /// Scheme version (e.g. "v4.1")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Target organism, lowercase (e.g. "sars-cov-2")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organism: Option<String>,

    /// Lifecycle status; stored as text and checked against [`SchemeStatus`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contributors: Vec<Contributor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Canonical name of the scheme this one was derived from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derived_from: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,

    /// Stored primer table checksum in `algorithm:digest` form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primer_checksum: Option<String>,

    /// Stored reference checksum in `algorithm:digest` form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_checksum: Option<String>,
}

/// Aggregate of one scheme's artifacts, assembled transiently per
/// invocation and never persisted as an object.
#[derive(Debug, Clone)]
pub struct SchemeBundle {
    pub info: SchemeInfo,

    /// Coordinate records in input file order
    pub records: Vec<CoordinateRecord>,

    /// Column count observed in the coordinate table file
    pub table_columns: usize,

    /// All sequences from the reference FASTA; records select theirs by name
    pub references: Vec<ReferenceSequence>,
}
