//! # Check-Digits Subcommand
//!
//! Computes the two Módulo 11 check digits for a base digit sequence and
//! prints them alongside the completed, punctuated identifier:
//!
//! ```text
//! $ cadastro check-digits --kind cpf 070680938
//! 68	070.680.938-68
//! ```

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use cadastro_core::{append_check_digits, extract, format, RegistryKind};

use crate::{KindArg, EXIT_OK};

/// Arguments for the `cadastro check-digits` subcommand.
#[derive(Args, Debug)]
pub struct CheckDigitsArgs {
    /// Registry whose weight tables to use.
    #[arg(long, value_enum)]
    pub kind: KindArg,

    /// Base digits: 9 for CPF, 12 for CNPJ.
    #[arg(value_name = "BASE")]
    pub base: String,
}

/// Execute the check-digits subcommand.
pub fn run_check_digits(args: &CheckDigitsArgs, out: &mut impl Write) -> Result<u8> {
    let kind = RegistryKind::from(args.kind);
    let base = extract(&args.base);
    let full = append_check_digits(&base, kind)
        .with_context(|| format!("cannot compute {kind} check digits for {:?}", args.base))?;
    let formatted = format(&full, kind).context("completed identifier has wrong length")?;
    tracing::debug!(%base, %full, "computed check digits");
    writeln!(out, "{}\t{formatted}", &full[base.len()..])?;
    Ok(EXIT_OK)
}
