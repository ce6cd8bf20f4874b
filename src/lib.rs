//! # primaschema
//!
//! A library for computing reproducible checksums of tiling amplicon PCR
//! primer schemes.
//!
//! Published primer schemes for the same protocol circulate in many textual
//! variants: reordered records, lowercased sequences, 6-column tables missing
//! the strand column. `primaschema` assigns every scheme a content-addressed
//! checksum computed over a canonical form, so any two equivalent scheme
//! files produce the same digest regardless of cosmetic differences.
//!
//! ## Features
//!
//! - **Canonical checksums**: record order, case and layout never change a digest
//! - **6-to-7 column resolution**: strand inferred from primer names, sequences
//!   backfilled from the reference
//! - **Validation**: schema, column-count and checksum cross-checks, aggregated
//!   into one report
//! - **Builds**: validate-then-write with freshly computed checksums
//!
//! ## Example
//!
//! ```rust
//! use primaschema::hashing::{primer_checksum, reference_checksum};
//! use primaschema::parsing::{bed, fasta};
//!
//! let table = bed::parse_table_text(
//!     "ref1\t0\t4\tamp1_LEFT\tpool1\t.\nref1\t6\t10\tamp1_RIGHT\tpool1\t.\n",
//! )
//! .unwrap();
//! let references = fasta::read_fasta_text(">ref1\nAACCGGTTAA\n").unwrap();
//!
//! let primer = primer_checksum(&table.records, &references).unwrap();
//! let reference = reference_checksum(&references);
//! assert!(primer.to_string().starts_with("sha256:"));
//! assert_ne!(primer, reference);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Core data types for coordinate records, references and schemes
//! - [`hashing`]: Canonical forms and the checksum engine
//! - [`resolve`]: 6-to-7 column resolution
//! - [`validate`]: Scheme validation and builds
//! - [`inspect`]: Discordance, amplicon-interval and table-diff queries
//! - [`parsing`]: Parsers for coordinate tables, FASTA and metadata files
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod hashing;
pub mod inspect;
pub mod parsing;
pub mod resolve;
pub mod validate;

// Re-export commonly used types for convenience
pub use crate::core::record::{CoordinateRecord, Strand};
pub use crate::core::reference::ReferenceSequence;
pub use crate::core::scheme::{SchemeBundle, SchemeInfo, SchemeStatus};
pub use crate::hashing::checksum::{primer_checksum, reference_checksum, Checksum};
pub use crate::resolve::resolve;
pub use crate::validate::{validate, ValidationReport};
