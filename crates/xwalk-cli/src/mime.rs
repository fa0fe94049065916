//! # Mime Subcommand
//!
//! Resolves a file path (by extension) or a content-type string against
//! the supported tabular types.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use clap::Args;
use xwalk_core::MimeType;

/// Arguments for the mime subcommand.
#[derive(Args, Debug)]
pub struct MimeArgs {
    /// A file path, or a content type with `--content-type`.
    #[arg(required_unless_present = "list")]
    pub input: Option<String>,

    /// Treat INPUT as a content-type string instead of a path.
    #[arg(long)]
    pub content_type: bool,

    /// List every supported type instead of resolving INPUT.
    #[arg(long, conflicts_with = "content_type")]
    pub list: bool,
}

/// Write `TAG<TAB>content-type` for the resolved type.
pub fn run(args: &MimeArgs, out: &mut impl Write) -> anyhow::Result<MimeType> {
    let input = args.input.as_deref().context("no input to resolve")?;
    let mime = if args.content_type {
        MimeType::from_content_type(input)
    } else {
        MimeType::from_path(Path::new(input))
    }
    .with_context(|| format!("cannot resolve {input:?}"))?;

    writeln!(out, "{}\t{}", mime.tag(), mime.content_type()).context("writing result")?;
    Ok(mime)
}

/// Write every supported type with its extensions.
pub fn list(out: &mut impl Write) -> anyhow::Result<()> {
    for mime in MimeType::all() {
        writeln!(
            out,
            "{}\t{}\t{}",
            mime.tag(),
            mime.content_type(),
            mime.extensions().join(",")
        )
        .context("writing result")?;
    }
    Ok(())
}
