//! Parsers for the flat-file artifacts of a scheme directory.
//!
//! This module provides parsers for:
//!
//! - **Coordinate tables** (`scheme.bed` / `primer.bed`): 6- or 7-column
//!   tab-delimited primer coordinates, `#` comment lines ignored
//! - **Reference FASTA**: single- or multi-record, uncompressed or gzipped
//! - **Metadata documents** (`info.json`): the scheme information record
//!
//! ## Example
//!
//! ```rust,no_run
//! use primaschema::parsing::{bed, fasta};
//! use std::path::Path;
//!
//! let table = bed::parse_table_file(Path::new("primer.bed")).unwrap();
//! let references = fasta::read_fasta_file(Path::new("reference.fasta")).unwrap();
//! assert_eq!(table.columns, 7);
//! assert!(!references.is_empty());
//! ```

pub mod bed;
pub mod fasta;
pub mod info;
