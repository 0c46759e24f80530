//! # Error Types
//!
//! Structured error types for the registry-identifier core, built with
//! `thiserror`.
//!
//! ## Design
//!
//! - Malformed user input is *not* an error. Validation of an arbitrary
//!   string always yields an [`IdentifierRecord`](crate::IdentifierRecord),
//!   whose `is_valid` flag carries the outcome.
//! - [`CadastroError::InvalidArgument`] signals a contract violation between
//!   components (e.g. asking the check-digit engine for a CPF with ten base
//!   digits). It indicates a caller bug and is never tolerated silently.
//! - [`ValidationError`] is returned by the strict newtype constructors
//!   ([`Cpf`](crate::Cpf), [`Cnpj`](crate::Cnpj)) which refuse to build from
//!   an identifier that does not validate.

use thiserror::Error;

use crate::kind::RegistryKind;

/// Top-level error type for the registry-identifier core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CadastroError {
    /// A component was called with input violating its precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    /// A strict identifier newtype rejected its input.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Contract violations between the core's own components.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The digit sequence has the wrong length for the stated kind.
    #[error("{kind} expects {expected} digits, got {actual}")]
    DigitCount {
        /// Registry kind the caller asked for.
        kind: RegistryKind,
        /// Number of digits the operation requires.
        expected: usize,
        /// Number of digits actually supplied.
        actual: usize,
    },

    /// An element of the digit sequence is not a decimal digit.
    #[error("element at position {position} is not a decimal digit: {found:?}")]
    NotADigit {
        /// Zero-based position of the offending element.
        position: usize,
        /// Textual rendering of the offending element.
        found: String,
    },
}

/// Validation errors for the strict identifier newtypes.
///
/// Each variant carries the rejected input so operators can see exactly what
/// was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Not a valid CPF (wrong length, bad check digits, or repeated digits).
    #[error("invalid CPF: \"{0}\" (expected 11 digits with valid check digits, optionally as NNN.NNN.NNN-NN)")]
    InvalidCpf(String),

    /// Not a valid CNPJ (wrong length, bad check digits, or repeated digits).
    #[error("invalid CNPJ: \"{0}\" (expected 14 digits with valid check digits, optionally as NN.NNN.NNN/NNNN-NN)")]
    InvalidCnpj(String),

    /// CNPJ root is not exactly eight ASCII digits.
    #[error("invalid CNPJ root: \"{0}\" (expected 8 digits)")]
    InvalidCnpjRoot(String),

    /// CNPJ establishment number out of the 1..=9999 range.
    #[error("invalid CNPJ establishment number: {0} (expected 1 to 9999)")]
    InvalidEstablishment(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_count_message_names_kind() {
        let err = InvalidArgument::DigitCount {
            kind: RegistryKind::Cpf,
            expected: 9,
            actual: 10,
        };
        assert_eq!(err.to_string(), "CPF expects 9 digits, got 10");
    }

    #[test]
    fn invalid_argument_wraps_into_top_level() {
        let err: CadastroError = InvalidArgument::NotADigit {
            position: 3,
            found: "12".into(),
        }
        .into();
        assert!(matches!(err, CadastroError::InvalidArgument(_)));
        assert!(err.to_string().starts_with("invalid argument:"));
    }

    #[test]
    fn validation_error_carries_input() {
        let err: CadastroError = ValidationError::InvalidCpf("123".into()).into();
        assert!(err.to_string().contains("\"123\""));
    }

    #[test]
    fn establishment_error_display() {
        let err = ValidationError::InvalidEstablishment(0);
        assert_eq!(
            err.to_string(),
            "invalid CNPJ establishment number: 0 (expected 1 to 9999)"
        );
    }
}
