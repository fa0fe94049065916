//! # xwalk CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Crosswalk methodology toolchain.
///
/// Validates methodology documents, resolves tabular mime-types and
/// produces provenance stamps.
#[derive(Parser, Debug)]
#[command(name = "xwalk", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate methodology documents.
    Validate(xwalk_cli::validate::ValidateArgs),
    /// Resolve a path or content type to a supported mime-type.
    Mime(xwalk_cli::mime::MimeArgs),
    /// Print a fresh provenance stamp.
    Stamp(xwalk_cli::stamp::StampArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Validate(args) => {
            let failed = xwalk_cli::validate::run(&args, &mut stdout)?;
            if failed > 0 {
                anyhow::bail!("{failed} of {} documents failed validation", args.paths.len());
            }
        }
        Commands::Mime(args) => {
            if args.list {
                xwalk_cli::mime::list(&mut stdout)?;
            } else {
                xwalk_cli::mime::run(&args, &mut stdout)?;
            }
        }
        Commands::Stamp(args) => {
            xwalk_cli::stamp::run(&args, &xwalk_core::SystemClock, &mut stdout)?;
        }
    }

    Ok(())
}
