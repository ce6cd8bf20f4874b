//! Command-line interface for primaschema.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **hash-ref**: Print the checksum of a reference FASTA file
//! - **hash-bed**: Print the checksum of a primer coordinate table
//! - **6to7**: Resolve a 6-column coordinate table into 7-column form
//! - **7to6**: Strip the strand column from a 7-column table
//! - **validate**: Check a scheme directory for schema and checksum problems
//! - **build**: Validate a scheme and write a canonicalized copy with fresh checksums
//! - **show-discordant-primers**: List primers whose stored sequence disagrees
//!   with the reference
//! - **show-intervals**: List the genomic span covered by each amplicon
//! - **diff**: Show the symmetric difference of two coordinate tables
//!
//! ## Usage
//!
//! ```text
//! # Checksum a reference
//! primaschema hash-ref reference.fasta
//!
//! # Checksum a primer table (6-column tables need the reference)
//! primaschema hash-bed primer.bed --reference reference.fasta
//!
//! # Resolve a 6-column table to stdout
//! primaschema 6to7 scheme.bed reference.fasta > primer.bed
//!
//! # Validate a scheme directory, JSON report for scripting
//! primaschema validate schemes/artic/v4.1 --format json
//!
//! # Build into a fresh output directory
//! primaschema build schemes/artic/v4.1 --out-dir built/v4.1
//!
//! # Compare stored primer sequences against the reference
//! primaschema show-discordant-primers schemes/artic/v4.1
//!
//! # Amplicon spans, and what changed between two scheme versions
//! primaschema show-intervals primer.bed
//! primaschema diff v4.0/primer.bed v4.1/primer.bed
//! ```

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::core::scheme::{
    SchemeBundle, METADATA_FILE_NAME, PRIMER_FILE_NAME, REFERENCE_FILE_NAME,
};
use crate::parsing;

pub mod build;
pub mod convert;
pub mod hash;
pub mod inspect;
pub mod validate;

#[derive(Parser)]
#[command(name = "primaschema")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Reproducible checksums and validation for tiling amplicon PCR primer schemes")]
#[command(
    long_about = "primaschema computes content-addressed checksums for primer schemes.\n\nA scheme directory holds three files: info.json (metadata), primer.bed (primer coordinates), and reference.fasta (the reference sequence). Checksums are computed over canonical forms, so cosmetic differences such as record order, case, or 6- vs 7-column layout never change the digest."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the checksum of a reference FASTA file
    HashRef(hash::HashRefArgs),

    /// Print the checksum of a primer coordinate table
    HashBed(hash::HashBedArgs),

    /// Resolve a 6-column coordinate table into 7-column form
    #[command(name = "6to7")]
    SixToSeven(convert::ConvertArgs),

    /// Strip the strand column from a 7-column coordinate table
    #[command(name = "7to6")]
    SevenToSix(convert::SevenToSixArgs),

    /// Validate a scheme directory
    Validate(validate::ValidateArgs),

    /// Validate a scheme directory and write a canonicalized copy
    Build(build::BuildArgs),

    /// Show primers whose stored sequence disagrees with the reference
    ShowDiscordantPrimers(inspect::DiscordantArgs),

    /// Show the genomic span covered by each amplicon
    ShowIntervals(inspect::IntervalsArgs),

    /// Show the symmetric difference of two coordinate tables
    Diff(inspect::DiffArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Load the three scheme files from a directory into a bundle.
///
/// # Errors
///
/// Returns an error naming the offending file if any of the three cannot be
/// read or parsed.
pub fn load_bundle(dir: &Path) -> anyhow::Result<SchemeBundle> {
    let info_path = dir.join(METADATA_FILE_NAME);
    let bed_path = dir.join(PRIMER_FILE_NAME);
    let reference_path = dir.join(REFERENCE_FILE_NAME);

    let info = parsing::info::read_info_file(&info_path)
        .map_err(|e| anyhow::anyhow!("{}: {e}", info_path.display()))?;
    let table = parsing::bed::parse_table_file(&bed_path)
        .map_err(|e| anyhow::anyhow!("{}: {e}", bed_path.display()))?;
    let references = parsing::fasta::read_fasta_file(&reference_path)
        .map_err(|e| anyhow::anyhow!("{}: {e}", reference_path.display()))?;

    Ok(SchemeBundle {
        info,
        records: table.records,
        table_columns: table.columns,
        references,
    })
}
