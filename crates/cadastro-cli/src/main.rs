//! # cadastro CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::io::Write;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cadastro_cli::check_digits::{run_check_digits, CheckDigitsArgs};
use cadastro_cli::cnpj::{run_cnpj, CnpjArgs};
use cadastro_cli::format::{run_format, FormatArgs};
use cadastro_cli::validate::{run_validate, ValidateArgs};
use cadastro_cli::EXIT_ERROR;

/// Validate and format Brazilian CPF and CNPJ numbers.
#[derive(Parser, Debug)]
#[command(name = "cadastro", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify identifiers and verify their check digits.
    Validate(ValidateArgs),

    /// Print digits in the canonical punctuated layout.
    Format(FormatArgs),

    /// Compute the check digits for a base digit sequence.
    CheckDigits(CheckDigitsArgs),

    /// Build a CNPJ from a company root and establishment number.
    Cnpj(CnpjArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("cadastro CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, std::io::stdin().lock(), &mut out),
        Commands::Format(args) => run_format(&args, &mut out),
        Commands::CheckDigits(args) => run_check_digits(&args, &mut out),
        Commands::Cnpj(args) => run_cnpj(&args, &mut out),
    };

    if let Err(e) = out.flush() {
        tracing::error!("failed to flush stdout: {e}");
        return ExitCode::from(EXIT_ERROR);
    }

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
