//! Core data types for primer scheme artifacts.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`CoordinateRecord`]: One primer entry from a 6- or 7-column coordinate table
//! - [`Strand`]: Forward/reverse annealing orientation
//! - [`ReferenceSequence`]: A named nucleotide sequence from a FASTA file
//! - [`SchemeInfo`], [`SchemeBundle`]: The `info.json` metadata document and the
//!   transient aggregate of one scheme's artifacts
//!
//! ## Coordinate Tables
//!
//! Two tab-delimited layouts are supported. They differ only in the explicit
//! strand column:
//!
//! | Layout | Columns |
//! |--------|---------|
//! | 7-column (`primer.bed`) | chrom, start, end, name, pool, strand, sequence |
//! | 6-column (`scheme.bed`) | chrom, start, end, name, pool, sequence |
//!
//! Coordinates are 0-based, half-open `[start, end)` against the forward
//! reference. In the 6-column layout strand is not stored; it is inferred from
//! the `_LEFT`/`_RIGHT` primer-name suffix by the resolver, and `.` marks an
//! absent sequence.

pub mod record;
pub mod reference;
pub mod scheme;

pub use record::{CoordinateRecord, ParseError, Strand};
pub use reference::ReferenceSequence;
pub use scheme::{SchemeBundle, SchemeInfo, SchemeStatus};
