use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use crate::cli::load_bundle;
use crate::core::scheme::{METADATA_FILE_NAME, PRIMER_FILE_NAME, REFERENCE_FILE_NAME};
use crate::hashing::canon::canonical_reference;
use crate::parsing;
use crate::validate;

#[derive(Args)]
pub struct BuildArgs {
    /// Scheme directory holding info.json, primer.bed and reference.fasta
    #[arg(required = true)]
    pub scheme_dir: PathBuf,

    /// Directory to write the built scheme into; must not already exist
    #[arg(short, long, default_value = "built")]
    pub out_dir: PathBuf,
}

/// Execute build subcommand
///
/// The built scheme is staged in a temporary directory and moved into place
/// only once all three files are written, so a failed build never leaves a
/// partial output directory.
///
/// # Errors
///
/// Returns an error if the scheme fails validation or resolution, the output
/// directory already exists, or any file cannot be written.
pub fn run(args: &BuildArgs, verbose: bool) -> anyhow::Result<()> {
    if args.out_dir.exists() {
        anyhow::bail!(
            "output directory {} already exists; refusing to overwrite",
            args.out_dir.display()
        );
    }

    let bundle = load_bundle(&args.scheme_dir)?;
    let output = validate::build(&bundle)?;

    if verbose {
        eprintln!(
            "Built {} record(s); primer_checksum {}",
            output.records.len(),
            output
                .info
                .primer_checksum
                .as_deref()
                .unwrap_or("(unset)")
        );
    }

    let parent = args.out_dir.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        std::fs::create_dir_all(parent)?;
    }
    let staging = tempfile::Builder::new()
        .prefix(".primaschema-build")
        .tempdir_in(parent.unwrap_or_else(|| Path::new(".")))?;

    std::fs::write(
        staging.path().join(METADATA_FILE_NAME),
        parsing::info::write_info(&output.info)?,
    )?;
    std::fs::write(
        staging.path().join(PRIMER_FILE_NAME),
        parsing::bed::write_table(&output.records),
    )?;
    std::fs::write(
        staging.path().join(REFERENCE_FILE_NAME),
        canonical_reference(&bundle.references),
    )?;

    std::fs::rename(staging.keep(), &args.out_dir)?;
    info!(out_dir = %args.out_dir.display(), "build complete");
    println!("built scheme written to {}", args.out_dir.display());
    Ok(())
}
