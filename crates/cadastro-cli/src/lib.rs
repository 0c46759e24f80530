//! # cadastro-cli: Command-Line Front End
//!
//! Provides the `cadastro` command-line interface over `cadastro-core`.
//!
//! ## Subcommands
//!
//! - `cadastro validate`: Classify and verify CPF/CNPJ numbers.
//! - `cadastro format`: Punctuate raw digits in canonical form.
//! - `cadastro check-digits`: Compute the check digits for a base.
//! - `cadastro cnpj`: Build a CNPJ from a company root and establishment.
//!
//! ```bash
//! cadastro validate 070.680.938-68 00000000000191
//! cadastro validate --json < numbers.txt
//! cadastro format --kind cnpj 00000000000191
//! cadastro check-digits --kind cpf 070680938
//! cadastro cnpj 00000000 --establishment 2
//! ```
//!
//! Every handler returns the process exit code: 0 on success, 1 when an
//! identifier failed validation. Operational errors propagate as
//! `anyhow::Error` and exit with 2.

pub mod check_digits;
pub mod cnpj;
pub mod format;
pub mod validate;

use cadastro_core::RegistryKind;
use clap::ValueEnum;

/// Exit code for success.
pub const EXIT_OK: u8 = 0;
/// Exit code when at least one identifier is invalid.
pub const EXIT_INVALID: u8 = 1;
/// Exit code for operational errors (bad arguments, I/O failure).
pub const EXIT_ERROR: u8 = 2;

/// Registry kind as accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    /// Cadastro de Pessoas Físicas (11 digits).
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica (14 digits).
    Cnpj,
}

impl From<KindArg> for RegistryKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Cpf => RegistryKind::Cpf,
            KindArg::Cnpj => RegistryKind::Cnpj,
        }
    }
}
