use std::path::PathBuf;

use clap::Args;

use crate::core::record::CoordinateRecord;
use crate::parsing;
use crate::resolve;

#[derive(Args)]
pub struct ConvertArgs {
    /// Primer coordinate table (6 or 7 columns)
    #[arg(required = true)]
    pub bed: PathBuf,

    /// Reference FASTA file used to backfill primer sequences
    #[arg(required = true)]
    pub reference: PathBuf,
}

/// Execute 6to7 subcommand
///
/// Writes the resolved 7-column table to stdout.
///
/// # Errors
///
/// Returns an error if either input cannot be read or any record fails to
/// resolve; nothing is written on failure.
pub fn run(args: &ConvertArgs, verbose: bool) -> anyhow::Result<()> {
    let table = parsing::bed::parse_table_file(&args.bed)?;
    let references = parsing::fasta::read_fasta_file(&args.reference)?;

    if verbose {
        eprintln!(
            "Resolving {} record(s) against {} reference sequence(s)",
            table.records.len(),
            references.len()
        );
    }

    let resolved = resolve::resolve(&table.records, &references)?;
    print!("{}", parsing::bed::write_table(&resolved));
    Ok(())
}

#[derive(Args)]
pub struct SevenToSixArgs {
    /// 7-column primer coordinate table
    #[arg(required = true)]
    pub bed: PathBuf,
}

/// Execute 7to6 subcommand
///
/// Drops the strand column and writes the 6-column table to stdout; all
/// other fields are kept verbatim, so `6to7` restores the input as long as
/// the primer names carry the standard strand suffixes.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not a 7-column table.
pub fn run_seven_to_six(args: &SevenToSixArgs, verbose: bool) -> anyhow::Result<()> {
    let table = parsing::bed::parse_table_file(&args.bed)?;
    if table.columns != 7 {
        anyhow::bail!(
            "expected a 7-column table, found {} columns in {}",
            table.columns,
            args.bed.display()
        );
    }

    if verbose {
        eprintln!("Stripping strand column from {} record(s)", table.records.len());
    }

    let stripped: Vec<CoordinateRecord> = table
        .records
        .into_iter()
        .map(|record| CoordinateRecord {
            strand: None,
            ..record
        })
        .collect();
    print!("{}", parsing::bed::write_table(&stripped));
    Ok(())
}
