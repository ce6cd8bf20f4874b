use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("reference '{0}' has an empty sequence")]
    Empty(String),

    #[error("illegal character '{found}' in reference '{name}': expected A, C, G, T or N")]
    IllegalBase { name: String, found: char },
}

/// A named nucleotide sequence over the alphabet {A, C, G, T, N}.
///
/// The sequence is uppercased and validated on construction, so slices taken
/// from it are always in canonical case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSequence {
    pub name: String,
    sequence: String,
}

impl ReferenceSequence {
    /// Build a reference from raw sequence text, uppercasing it and
    /// rejecting characters outside {A, C, G, T, N}.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::Empty` for an empty sequence and
    /// `SequenceError::IllegalBase` for any other alphabet violation.
    pub fn new(name: impl Into<String>, sequence: &str) -> Result<Self, SequenceError> {
        let name = name.into();
        if sequence.is_empty() {
            return Err(SequenceError::Empty(name));
        }
        let upper = sequence.to_ascii_uppercase();
        if let Some(found) = upper
            .chars()
            .find(|c| !matches!(c, 'A' | 'C' | 'G' | 'T' | 'N'))
        {
            return Err(SequenceError::IllegalBase { name, found });
        }
        Ok(Self {
            name,
            sequence: upper,
        })
    }

    #[must_use]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Sequence length in bases
    #[must_use]
    pub fn len(&self) -> u64 {
        self.sequence.len() as u64
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Forward-strand slice of the half-open interval `[start, end)`.
    /// Returns `None` when the interval is empty or out of bounds.
    #[must_use]
    pub fn slice(&self, start: u64, end: u64) -> Option<&str> {
        if start >= end || end > self.len() {
            return None;
        }
        self.sequence.get(start as usize..end as usize)
    }
}

/// Reverse complement of an upper-case {A, C, G, T, N} sequence.
#[must_use]
pub fn reverse_complement(sequence: &str) -> String {
    sequence
        .bytes()
        .rev()
        .map(|b| match b {
            b'A' => 'T',
            b'C' => 'G',
            b'G' => 'C',
            b'T' => 'A',
            _ => 'N',
        })
        .collect()
}
