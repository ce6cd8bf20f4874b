use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::hashing::{primer_checksum, reference_checksum};
use crate::parsing;

#[derive(Args)]
pub struct HashRefArgs {
    /// Reference FASTA file (optionally gzipped)
    #[arg(required = true)]
    pub reference: PathBuf,
}

#[derive(Args)]
pub struct HashBedArgs {
    /// Primer coordinate table (6 or 7 columns)
    #[arg(required = true)]
    pub bed: PathBuf,

    /// Reference FASTA file, required for 6-column tables
    #[arg(short, long)]
    pub reference: Option<PathBuf>,
}

/// Execute hash-ref subcommand
///
/// # Errors
///
/// Returns an error if the reference cannot be read or parsed.
pub fn run_hash_ref(args: &HashRefArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let references = parsing::fasta::read_fasta_file(&args.reference)?;

    if verbose {
        eprintln!(
            "Read {} sequence(s) from {}",
            references.len(),
            args.reference.display()
        );
    }

    let checksum = reference_checksum(&references);
    print_checksum("reference_checksum", &checksum.to_string(), format)?;
    Ok(())
}

/// Execute hash-bed subcommand
///
/// # Errors
///
/// Returns an error if the table cannot be read, a 6-column table is given
/// without `--reference`, or resolution fails.
pub fn run_hash_bed(args: &HashBedArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let table = parsing::bed::parse_table_file(&args.bed)?;

    if verbose {
        eprintln!(
            "Read {} record(s) ({} columns) from {}",
            table.records.len(),
            table.columns,
            args.bed.display()
        );
    }

    // 7-column tables can still carry unresolved records ("." sequences)
    let needs_reference = table.columns < 7
        || table
            .records
            .iter()
            .any(|r| r.strand.is_none() || r.sequence.is_none());
    let references = match &args.reference {
        Some(path) => parsing::fasta::read_fasta_file(path)?,
        None if needs_reference => {
            anyhow::bail!(
                "table has unresolved records that need sequences backfilled before hashing; \
                 pass --reference"
            );
        }
        None => Vec::new(),
    };

    let checksum = primer_checksum(&table.records, &references)?;
    print_checksum("primer_checksum", &checksum.to_string(), format)?;
    Ok(())
}

fn print_checksum(key: &str, checksum: &str, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{checksum}"),
        OutputFormat::Json => {
            let output = serde_json::json!({ key: checksum });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
