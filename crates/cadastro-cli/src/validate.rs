//! # Validate Subcommand
//!
//! Classifies each input as CPF, CNPJ or unknown and verifies its check
//! digits. Inputs come from the command line, or one per line from stdin
//! when none are given.
//!
//! Text output is one tab-separated line per input:
//!
//! ```text
//! valid    CPF      07068093868     070.680.938-68
//! invalid  unknown  1234567890123   -
//! ```
//!
//! followed by a `N/M valid` summary. `--json` prints one JSON object per
//! input and no summary.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use cadastro_core::IdentifierRecord;

use crate::{EXIT_INVALID, EXIT_OK};

/// Arguments for the `cadastro validate` subcommand.
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    /// Identifiers to check. Read one per line from stdin when omitted.
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Print one JSON object per identifier.
    #[arg(long)]
    pub json: bool,

    /// Also reject inputs that are neither bare digits nor canonically punctuated.
    #[arg(long)]
    pub strict: bool,
}

/// One line of `--json` output.
#[derive(Debug, Serialize)]
struct ValidateLine<'a> {
    input: &'a str,
    #[serde(flatten)]
    record: &'a IdentifierRecord,
    accepted: bool,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when every input is accepted, 1 otherwise.
pub fn run_validate(args: &ValidateArgs, stdin: impl BufRead, out: &mut impl Write) -> Result<u8> {
    let inputs = if args.inputs.is_empty() {
        tracing::debug!("no inputs on the command line; reading stdin");
        read_inputs(stdin)?
    } else {
        args.inputs.clone()
    };

    let mut accepted_count = 0usize;
    for input in &inputs {
        let record = IdentifierRecord::from_string(input);
        let accepted = is_accepted(&record, args.strict);
        tracing::debug!(
            input = %input,
            kind = ?record.kind(),
            valid = record.is_valid(),
            well_formed = record.well_formed(),
            "validated identifier"
        );
        if accepted {
            accepted_count += 1;
        }

        if args.json {
            let line = ValidateLine {
                input,
                record: &record,
                accepted,
            };
            serde_json::to_writer(&mut *out, &line).context("failed to serialize record")?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", text_line(&record, accepted))?;
        }
    }

    if !args.json {
        writeln!(out, "{}/{} valid", accepted_count, inputs.len())?;
    }
    tracing::info!(
        total = inputs.len(),
        valid = accepted_count,
        "validation finished"
    );

    if accepted_count == inputs.len() {
        Ok(EXIT_OK)
    } else {
        Ok(EXIT_INVALID)
    }
}

/// Collect non-blank, trimmed lines.
pub fn read_inputs(reader: impl BufRead) -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read identifier from stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            inputs.push(trimmed.to_string());
        }
    }
    Ok(inputs)
}

fn is_accepted(record: &IdentifierRecord, strict: bool) -> bool {
    record.is_valid() && (!strict || record.well_formed())
}

fn text_line(record: &IdentifierRecord, accepted: bool) -> String {
    let status = match (accepted, record.is_valid()) {
        (true, _) => "valid",
        (false, true) => "malformed",
        (false, false) => "invalid",
    };
    let kind = record
        .kind()
        .map_or_else(|| "unknown".to_string(), |k| k.to_string());
    format!(
        "{status}\t{kind}\t{}\t{}",
        record.raw_digits(),
        record.formatted().unwrap_or("-")
    )
}
