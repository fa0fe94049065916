//! # Validate Subcommand
//!
//! Loads every given methodology document and reports the result per file.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use xwalk_schema::{DocumentError, MethodologyDocument};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Methodology documents (`.yaml`, `.yml` or `.json`).
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

/// Validate each document, writing one report block per file.
///
/// Returns the number of documents that failed. I/O errors on `out` abort
/// the run; document errors are reported and counted.
pub fn run(args: &ValidateArgs, out: &mut impl Write) -> anyhow::Result<usize> {
    let mut failed = 0;
    for path in &args.paths {
        match MethodologyDocument::load(path) {
            Ok(doc) => {
                writeln!(out, "OK   {} ({} entries)", path.display(), doc.entry_count())
                    .context("writing report")?;
            }
            Err(DocumentError::Invalid(violations)) => {
                failed += 1;
                writeln!(out, "FAIL {} ({} violations)", path.display(), violations.len())
                    .context("writing report")?;
                writeln!(out, "{violations}").context("writing report")?;
            }
            Err(e) => {
                failed += 1;
                tracing::error!(path = %path.display(), error = %e, "cannot validate document");
                writeln!(out, "FAIL {}: {e}", path.display()).context("writing report")?;
            }
        }
    }
    Ok(failed)
}
