//! # Stamp Subcommand
//!
//! Prints a fresh provenance stamp for pasting into a methodology
//! document's `history` section.

use std::io::Write;

use anyhow::Context;
use clap::{Args, ValueEnum};
use xwalk_core::{Clock, VersionModel};

/// Output encoding for generated entries.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Arguments for the stamp subcommand.
#[derive(Args, Debug)]
pub struct StampArgs {
    /// Author of the change.
    #[arg(long)]
    pub name: Option<String>,

    /// What changed.
    #[arg(long)]
    pub description: Option<String>,

    /// Output encoding.
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

/// Build a stamp timed by `clock` and write it in the requested format.
pub fn run(args: &StampArgs, clock: &impl Clock, out: &mut impl Write) -> anyhow::Result<VersionModel> {
    let stamp = VersionModel::new_with_clock(
        clock,
        args.name.as_deref(),
        args.description.as_deref(),
        None,
    );
    let rendered = match args.format {
        OutputFormat::Yaml => serde_yaml::to_string(&stamp).context("serializing stamp")?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&stamp).context("serializing stamp")?;
            json.push('\n');
            json
        }
    };
    out.write_all(rendered.as_bytes()).context("writing stamp")?;
    Ok(stamp)
}
