//! Canonicalization and checksum computation.
//!
//! Checksums are only reproducible if the text being hashed is independent of
//! input file order, whitespace and line-ending quirks, so hashing always goes
//! through a canonical form first:
//!
//! - [`canon::canonical_records`]: coordinate records stably sorted by
//!   `(chrom, start, end, name)`, one tab-joined line per record
//! - [`canon::canonical_reference`]: reference sequences sorted by name,
//!   `>name` header followed by the uppercase sequence on a single line
//! - [`checksum::Checksum`]: a SHA-256 digest over canonical text, tagged
//!   with its algorithm id and serialized as `sha256:<hex>`

pub mod canon;
pub mod checksum;

pub use canon::{canonical_records, canonical_reference};
pub use checksum::{primer_checksum, reference_checksum, Checksum};
