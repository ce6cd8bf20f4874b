use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("unsupported column count {0}: coordinate tables have 6 or 7 columns")]
    UnsupportedLayout(usize),

    #[error("invalid {field} coordinate: '{value}'")]
    InvalidCoordinate { field: &'static str, value: String },

    #[error("empty interval for '{name}': start {start} >= end {end}")]
    EmptyInterval { name: String, start: u64, end: u64 },

    #[error("invalid strand symbol '{0}': expected '+' or '-'")]
    InvalidStrand(String),

    #[error("illegal character in sequence of '{0}': expected A, C, G, T or N")]
    InvalidSequence(String),
}

/// Annealing orientation of a primer relative to the forward reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Strand {
    #[serde(rename = "+")]
    Forward,
    #[serde(rename = "-")]
    Reverse,
}

impl Strand {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Forward => "+",
            Self::Reverse => "-",
        }
    }

    /// Parse a strand column symbol
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Self::Forward),
            "-" => Some(Self::Reverse),
            _ => None,
        }
    }

    /// Infer strand from the primer naming convention.
    ///
    /// A `LEFT` name component maps to `+` and `RIGHT` to `-`. The component
    /// may be followed by alt/number components (`_alt1`, `_2`), so
    /// `scheme_1_LEFT`, `scheme_1_LEFT_alt1` and `scheme_1_RIGHT_2` all carry
    /// a recognized suffix while `scheme_1_MID` does not.
    #[must_use]
    pub fn from_primer_name(name: &str) -> Option<Self> {
        strand_suffix(name).map(|(_, strand)| strand)
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One primer entry from a coordinate table.
///
/// Records are immutable once constructed; the resolver emits new 7-column
/// records rather than mutating 6-column ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateRecord {
    /// Name of the reference sequence the coordinates refer to
    pub chrom: String,

    /// 0-based inclusive start on the forward reference
    pub start: u64,

    /// 0-based exclusive end on the forward reference
    pub end: u64,

    /// Primer name, carrying the amplicon id and the LEFT/RIGHT/alt suffix
    pub name: String,

    /// PCR pool the primer belongs to
    pub pool: String,

    /// Annealing orientation; present only in the 7-column layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strand: Option<Strand>,

    /// Primer sequence, file-supplied or backfilled from the reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<String>,
}

impl CoordinateRecord {
    /// Parse one tab/whitespace-delimited table line with the expected
    /// column count (6 or 7).
    ///
    /// # Errors
    ///
    /// Returns `ParseError` on a column-count mismatch, non-integer
    /// coordinates, an empty interval, a bad strand symbol, or illegal
    /// sequence characters.
    pub fn parse(line: &str, columns: usize) -> Result<Self, ParseError> {
        if columns != 6 && columns != 7 {
            return Err(ParseError::UnsupportedLayout(columns));
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != columns {
            return Err(ParseError::ColumnCount {
                expected: columns,
                found: fields.len(),
            });
        }

        let start: u64 = fields[1].parse().map_err(|_| ParseError::InvalidCoordinate {
            field: "start",
            value: fields[1].to_string(),
        })?;
        let end: u64 = fields[2].parse().map_err(|_| ParseError::InvalidCoordinate {
            field: "end",
            value: fields[2].to_string(),
        })?;

        let name = fields[3].to_string();
        if start >= end {
            return Err(ParseError::EmptyInterval { name, start, end });
        }

        let (strand, sequence_field) = if columns == 7 {
            let strand = Strand::parse(fields[5])
                .ok_or_else(|| ParseError::InvalidStrand(fields[5].to_string()))?;
            (Some(strand), fields[6])
        } else {
            (None, fields[5])
        };

        let sequence = parse_sequence_field(sequence_field, &name)?;

        Ok(Self {
            chrom: fields[0].to_string(),
            start,
            end,
            name,
            pool: fields[4].to_string(),
            strand,
            sequence,
        })
    }

    /// The amplicon this primer belongs to: the name with the strand suffix
    /// stripped, or the whole name when no suffix is recognized.
    #[must_use]
    pub fn amplicon_id(&self) -> &str {
        match strand_suffix(&self.name) {
            Some((offset, _)) => &self.name[..offset],
            None => &self.name,
        }
    }
}

/// `.` (or an empty field) marks an absent sequence in a 6-column table.
fn parse_sequence_field(field: &str, name: &str) -> Result<Option<String>, ParseError> {
    if field.is_empty() || field == "." {
        return Ok(None);
    }
    let upper = field.to_ascii_uppercase();
    if !upper.bytes().all(|b| matches!(b, b'A' | b'C' | b'G' | b'T' | b'N')) {
        return Err(ParseError::InvalidSequence(name.to_string()));
    }
    Ok(Some(upper))
}

/// Locate the `_LEFT`/`_RIGHT` suffix in a primer name.
///
/// Returns the byte offset of the suffix (including its leading underscore)
/// and the strand it encodes. Any components after LEFT/RIGHT must be
/// alt/number markers for the suffix to be recognized.
fn strand_suffix(name: &str) -> Option<(usize, Strand)> {
    let mut offset = name.len();
    for component in name.rsplit('_') {
        let start = offset - component.len();
        // Never treat the whole name as a suffix
        if start == 0 {
            return None;
        }
        match component.to_ascii_uppercase().as_str() {
            "LEFT" => return Some((start - 1, Strand::Forward)),
            "RIGHT" => return Some((start - 1, Strand::Reverse)),
            _ if is_alt_component(component) => {
                offset = start - 1;
            }
            _ => return None,
        }
    }
    None
}

/// Alt/number markers allowed after LEFT/RIGHT: `1`, `alt`, `alt2`, ...
fn is_alt_component(component: &str) -> bool {
    if component.is_empty() {
        return false;
    }
    let rest = component
        .strip_prefix("alt")
        .or_else(|| component.strip_prefix("ALT"))
        .unwrap_or(component);
    rest.bytes().all(|b| b.is_ascii_digit())
}
