//! # CNPJ Subcommand
//!
//! Builds the CNPJ of an establishment from the eight-digit company root.
//! Establishment 1 is the headquarters; branches are numbered from 2.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use cadastro_core::{extract, Cnpj};

use crate::EXIT_OK;

/// Arguments for the `cadastro cnpj` subcommand.
#[derive(Args, Debug)]
pub struct CnpjArgs {
    /// Eight-digit company root (punctuation allowed).
    #[arg(value_name = "ROOT")]
    pub root: String,

    /// Establishment number, 1 to 9999.
    #[arg(short, long, default_value_t = 1)]
    pub establishment: u32,

    /// Print bare digits instead of the punctuated form.
    #[arg(long)]
    pub raw: bool,
}

/// Execute the cnpj subcommand.
pub fn run_cnpj(args: &CnpjArgs, out: &mut impl Write) -> Result<u8> {
    let root = extract(&args.root);
    let cnpj = Cnpj::from_root(&root, args.establishment).with_context(|| {
        format!(
            "cannot build CNPJ from root {:?} and establishment {}",
            args.root, args.establishment
        )
    })?;
    tracing::debug!(
        root = cnpj.root(),
        establishment = cnpj.establishment(),
        headquarters = cnpj.is_headquarters(),
        "built CNPJ"
    );
    if args.raw {
        writeln!(out, "{}", cnpj.as_str())?;
    } else {
        writeln!(out, "{cnpj}")?;
    }
    Ok(EXIT_OK)
}
