use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_bundle, OutputFormat};
use crate::hashing::canon::format_record;
use crate::inspect;
use crate::parsing;

#[derive(Args)]
pub struct DiscordantArgs {
    /// Scheme directory holding info.json, primer.bed and reference.fasta
    #[arg(required = true)]
    pub scheme_dir: PathBuf,
}

/// Execute show-discordant-primers subcommand
///
/// Prints one line per primer whose stored sequence disagrees with the
/// oriented reference slice of its interval; prints nothing when every
/// stored sequence is concordant.
///
/// # Errors
///
/// Returns an error if the scheme files cannot be read or a record cannot be
/// oriented against the reference.
pub fn run_discordant(
    args: &DiscordantArgs,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let bundle = load_bundle(&args.scheme_dir)?;
    let discordant = inspect::discordant_primers(&bundle.records, &bundle.references)?;

    if verbose {
        eprintln!(
            "{} of {} record(s) discordant",
            discordant.len(),
            bundle.records.len()
        );
    }

    match format {
        OutputFormat::Text => {
            for d in &discordant {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    d.name, d.chrom, d.strand, d.stored, d.expected
                );
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&discordant)?),
    }
    Ok(())
}

#[derive(Args)]
pub struct IntervalsArgs {
    /// Primer coordinate table (6 or 7 columns)
    #[arg(required = true)]
    pub bed: PathBuf,
}

/// Execute show-intervals subcommand
///
/// # Errors
///
/// Returns an error if the table cannot be read.
pub fn run_intervals(args: &IntervalsArgs, format: OutputFormat) -> anyhow::Result<()> {
    let table = parsing::bed::parse_table_file(&args.bed)?;
    let intervals = inspect::amplicon_intervals(&table.records);

    match format {
        OutputFormat::Text => {
            for interval in &intervals {
                println!(
                    "{}\t{}\t{}\t{}",
                    interval.chrom, interval.start, interval.end, interval.amplicon
                );
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&intervals)?),
    }
    Ok(())
}

#[derive(Args)]
pub struct DiffArgs {
    /// First coordinate table
    #[arg(required = true)]
    pub first: PathBuf,

    /// Second coordinate table
    #[arg(required = true)]
    pub second: PathBuf,

    /// Match records by (chrom, start, end) only, ignoring the other fields
    #[arg(long)]
    pub only_positions: bool,
}

/// Execute diff subcommand
///
/// Prints the symmetric difference of the two tables, each record prefixed
/// with the table it came from. Exits zero whether or not differences exist.
///
/// # Errors
///
/// Returns an error if either table cannot be read.
pub fn run_diff(args: &DiffArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let first = parsing::bed::parse_table_file(&args.first)?;
    let second = parsing::bed::parse_table_file(&args.second)?;
    let diff = inspect::symmetric_diff(&first.records, &second.records, args.only_positions);

    if verbose {
        eprintln!(
            "{} differing record(s) across {} + {} input record(s)",
            diff.len(),
            first.records.len(),
            second.records.len()
        );
    }

    match format {
        OutputFormat::Text => {
            for (side, record) in &diff {
                println!("{side}\t{}", format_record(record));
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = diff
                .iter()
                .map(|(side, record)| {
                    serde_json::json!({
                        "source": side,
                        "record": record,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
