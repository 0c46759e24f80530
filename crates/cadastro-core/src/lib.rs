//! # cadastro-core: Brazilian Registry Identifiers
//!
//! Validation and formatting for the two Brazilian person registries:
//! CPF (natural persons, 11 digits) and CNPJ (legal entities, 14 digits).
//!
//! ## Pipeline
//!
//! ```text
//! input ─▶ extract ─▶ classify (by length) ─▶ check digits (Módulo 11) ─▶ compare ─▶ format
//! ```
//!
//! [`IdentifierRecord::from_string`] runs the whole pipeline and never fails
//! on user input; malformed strings come back with no kind and
//! `is_valid() == false`. The individual stages are public for callers that
//! need them on their own.
//!
//! ```
//! use cadastro_core::{IdentifierRecord, RegistryKind};
//!
//! let rec = IdentifierRecord::from_string("070.680.938-68");
//! assert_eq!(rec.kind(), Some(RegistryKind::Cpf));
//! assert!(rec.is_valid());
//! assert_eq!(rec.formatted(), Some("070.680.938-68"));
//! ```
//!
//! ## Crate Policy
//!
//! - Pure functions only: no I/O, no global state, no logging.
//! - No `unsafe` code.
//! - Contract violations between components return
//!   [`CadastroError::InvalidArgument`]; they are never papered over.

pub mod check_digit;
pub mod classify;
pub mod error;
pub mod extract;
pub mod format;
pub mod identity;
pub mod kind;
pub mod record;

// Re-export primary types for ergonomic imports.
pub use check_digit::{append_check_digits, compute_check_digits, parse_digits};
pub use classify::{classify, is_repeated_digit, validate};
pub use error::{CadastroError, InvalidArgument, ValidationError};
pub use extract::{extract, normalize, Extraction};
pub use format::format;
pub use identity::{Cnpj, Cpf, CNPJ_ROOT_DIGITS, MAX_ESTABLISHMENT};
pub use kind::{RegistryKind, CHECK_DIGIT_COUNT};
pub use record::IdentifierRecord;
