//! # Format Subcommand
//!
//! Punctuates a raw digit string in the canonical layout of the requested
//! registry. Check digits are not verified; use `validate` for that.
//! Punctuation already present in the input is stripped first.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use cadastro_core::{extract, format, RegistryKind};

use crate::{KindArg, EXIT_OK};

/// Arguments for the `cadastro format` subcommand.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Registry layout to apply.
    #[arg(long, value_enum)]
    pub kind: KindArg,

    /// The identifier digits.
    #[arg(value_name = "DIGITS")]
    pub digits: String,
}

/// Execute the format subcommand.
pub fn run_format(args: &FormatArgs, out: &mut impl Write) -> Result<u8> {
    let kind = RegistryKind::from(args.kind);
    let digits = extract(&args.digits);
    let formatted = format(&digits, kind)
        .with_context(|| format!("cannot format {:?} as {kind}", args.digits))?;
    writeln!(out, "{formatted}")?;
    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(kind: KindArg, digits: &str) -> Result<String> {
        let mut out = Vec::new();
        run_format(
            &FormatArgs {
                kind,
                digits: digits.into(),
            },
            &mut out,
        )?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn formats_cpf() {
        assert_eq!(run(KindArg::Cpf, "07068093868").unwrap(), "070.680.938-68\n");
    }

    #[test]
    fn formats_cnpj_ignoring_existing_punctuation() {
        assert_eq!(
            run(KindArg::Cnpj, "00.000.000/000191").unwrap(),
            "00.000.000/0001-91\n"
        );
    }

    #[test]
    fn wrong_length_is_an_error() {
        let err = run(KindArg::Cnpj, "07068093868").unwrap_err();
        assert!(format!("{err:#}").contains("CNPJ expects 14 digits, got 11"));
    }
}
