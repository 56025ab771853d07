//! Glossa CLI - string-constant auditing from the command line.
//!
//! Scans a directory tree for Go files and prints every top-level constant
//! bound to a string literal, one `path:line: literal` record per line.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use glossa::{Glossa, ScanConfig};

/// Glossa: scan a source tree for top-level string-literal constants.
#[derive(Parser)]
#[command(name = "glossa")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Root directory to scan
    #[arg(short, long)]
    dir: PathBuf,

    /// Only report literals whose source text contains non-ASCII bytes
    #[arg(long)]
    non_ascii_only: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = ScanConfig::default().with_non_ascii_only(cli.non_ascii_only);

    match run(&cli.dir, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}

/// Run a scan and print its records.
///
/// Records go to stdout; per-file diagnostics and the summary go to
/// stderr, so piping stdout yields exactly the record lines. Per-file
/// failures never change the exit status.
fn run(dir: &Path, config: ScanConfig) -> Result<(), glossa::Error> {
    let glossa = Glossa::new(dir, config)?;
    let outcome = glossa.scan()?;

    for record in &outcome.records {
        println!("{record}");
    }

    for error in &outcome.stats.errors {
        eprintln!("{}: {error}", "warning".yellow().bold());
    }

    tracing::info!(
        files_scanned = outcome.stats.files_scanned,
        files_skipped = outcome.stats.files_skipped,
        records = outcome.records.len(),
        errors = outcome.stats.errors.len(),
        duration = ?outcome.stats.duration,
        "Scan completed"
    );

    Ok(())
}
