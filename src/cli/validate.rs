use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_bundle, OutputFormat};
use crate::validate;

#[derive(Args)]
pub struct ValidateArgs {
    /// Scheme directory holding info.json, primer.bed and reference.fasta
    #[arg(required = true)]
    pub scheme_dir: PathBuf,
}

/// Execute validate subcommand
///
/// # Errors
///
/// Returns an error (and a non-zero exit) if the scheme files cannot be read
/// or the report contains error-severity findings.
pub fn run(args: &ValidateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let bundle = load_bundle(&args.scheme_dir)?;

    if verbose {
        eprintln!(
            "Validating {} record(s) against {} reference sequence(s)",
            bundle.records.len(),
            bundle.references.len()
        );
    }

    let report = validate::validate(&bundle);

    match format {
        OutputFormat::Text => {
            print!("{report}");
            if report.is_valid() {
                println!("scheme is valid");
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "valid": report.is_valid(),
                "findings": report.findings,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    if !report.is_valid() {
        anyhow::bail!(
            "scheme failed validation with {} error(s)",
            report.error_count()
        );
    }
    Ok(())
}
