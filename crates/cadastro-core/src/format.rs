//! # Canonical Formatting
//!
//! Renders raw digits into the punctuated form published for each registry:
//! `NNN.NNN.NNN-NN` for CPF and `NN.NNN.NNN/NNNN-NN` for CNPJ.
//!
//! Formatting and validity are orthogonal. An identifier with wrong check
//! digits still formats, as long as it has the right number of digits.

use crate::error::{CadastroError, InvalidArgument};
use crate::kind::{RegistryKind, DIGIT_SLOT};

/// Insert `kind`'s punctuation into `raw_digits`.
///
/// # Errors
///
/// Returns [`CadastroError::InvalidArgument`] if `raw_digits` is not exactly
/// `kind.digit_count()` ASCII digits.
pub fn format(raw_digits: &str, kind: RegistryKind) -> Result<String, CadastroError> {
    let digits = raw_digits.as_bytes();
    if digits.len() != kind.digit_count() {
        return Err(InvalidArgument::DigitCount {
            kind,
            expected: kind.digit_count(),
            actual: digits.len(),
        }
        .into());
    }
    if let Some(position) = digits.iter().position(|b| !b.is_ascii_digit()) {
        return Err(InvalidArgument::NotADigit {
            position,
            found: raw_digits
                .get(position..)
                .and_then(|rest| rest.chars().next())
                .map(String::from)
                .unwrap_or_default(),
        }
        .into());
    }

    let template = kind.canonical_format();
    let mut out = String::with_capacity(template.len());
    let mut next = digits.iter();
    for slot in template.chars() {
        if slot == DIGIT_SLOT {
            if let Some(&d) = next.next() {
                out.push(char::from(d));
            }
        } else {
            out.push(slot);
        }
    }
    Ok(out)
}
