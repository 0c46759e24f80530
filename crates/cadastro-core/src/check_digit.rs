//! # Check-Digit Engine (Módulo 11)
//!
//! Computes the two verification digits that close every CPF and CNPJ.
//!
//! ## Algorithm
//!
//! For each check-digit position `i` in `0..2`:
//!
//! 1. Take the base digits, plus the check digits already computed.
//! 2. Multiply each digit by the matching entry of
//!    [`RegistryKind::weight_table`]`()[i]` and sum the products.
//! 3. `r = sum % 11`; the check digit is `0` when `r < 2`, else `11 - r`.
//!
//! The engine is total over well-formed input and refuses anything else with
//! [`CadastroError::InvalidArgument`]. A wrong-length base sequence means the
//! caller skipped classification; it is never reported as "invalid".

use crate::error::{CadastroError, InvalidArgument};
use crate::kind::{RegistryKind, CHECK_DIGIT_COUNT};

const MODULUS: u32 = 11;

/// Compute the expected check digits for `base_digits`.
///
/// # Errors
///
/// Returns [`CadastroError::InvalidArgument`] if `base_digits` does not have
/// exactly `kind.base_digit_count()` elements, or if any element is above 9.
pub fn compute_check_digits(
    base_digits: &[u8],
    kind: RegistryKind,
) -> Result<[u8; CHECK_DIGIT_COUNT], CadastroError> {
    if base_digits.len() != kind.base_digit_count() {
        return Err(InvalidArgument::DigitCount {
            kind,
            expected: kind.base_digit_count(),
            actual: base_digits.len(),
        }
        .into());
    }
    if let Some(position) = base_digits.iter().position(|d| *d > 9) {
        return Err(InvalidArgument::NotADigit {
            position,
            found: base_digits[position].to_string(),
        }
        .into());
    }

    let mut working = Vec::with_capacity(kind.digit_count());
    working.extend_from_slice(base_digits);
    let mut check = [0u8; CHECK_DIGIT_COUNT];
    for (slot, weights) in check.iter_mut().zip(kind.weight_table()) {
        *slot = mod11_digit(&working, weights);
        working.push(*slot);
    }
    Ok(check)
}

/// Compute check digits for a base given as a digit string, and return the
/// complete identifier (base followed by its two check digits).
///
/// # Errors
///
/// Same as [`compute_check_digits`]; non-digit characters are rejected.
pub fn append_check_digits(base: &str, kind: RegistryKind) -> Result<String, CadastroError> {
    let digits = parse_digits(base)?;
    let check = compute_check_digits(&digits, kind)?;
    let mut out = String::with_capacity(kind.digit_count());
    out.push_str(base);
    out.extend(check.iter().map(|d| char::from(b'0' + d)));
    Ok(out)
}

/// Convert a string of ASCII digits into digit values.
///
/// # Errors
///
/// Returns [`InvalidArgument::NotADigit`] at the first non-digit character.
pub fn parse_digits(s: &str) -> Result<Vec<u8>, CadastroError> {
    s.char_indices()
        .map(|(position, c)| {
            if c.is_ascii_digit() {
                Ok(c as u8 - b'0')
            } else {
                Err(InvalidArgument::NotADigit {
                    position,
                    found: c.to_string(),
                }
                .into())
            }
        })
        .collect()
}

/// Weighted sum mod 11 over `digits`, paired positionally with `weights`.
fn mod11_digit(digits: &[u8], weights: &[u32]) -> u8 {
    debug_assert_eq!(digits.len(), weights.len());
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(d, w)| u32::from(*d) * w)
        .sum();
    let remainder = sum % MODULUS;
    if remainder < 2 {
        0
    } else {
        // remainder is in 2..=10, so the digit is in 1..=9
        (MODULUS - remainder) as u8
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn base_for(kind: RegistryKind) -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(0u8..=9, kind.base_digit_count())
    }

    proptest! {
        /// Check digits are always single decimal digits.
        #[test]
        fn cpf_check_digits_in_range(base in base_for(RegistryKind::Cpf)) {
            let check = compute_check_digits(&base, RegistryKind::Cpf).unwrap();
            prop_assert!(check.iter().all(|d| *d <= 9));
        }

        #[test]
        fn cnpj_check_digits_in_range(base in base_for(RegistryKind::Cnpj)) {
            let check = compute_check_digits(&base, RegistryKind::Cnpj).unwrap();
            prop_assert!(check.iter().all(|d| *d <= 9));
        }

        /// The second check digit depends on the first: recomputing over the
        /// base plus the first digit with the second table agrees.
        #[test]
        fn second_digit_chains_first(base in base_for(RegistryKind::Cpf)) {
            let [first, second] = compute_check_digits(&base, RegistryKind::Cpf).unwrap();
            let mut extended = base.clone();
            extended.push(first);
            prop_assert_eq!(mod11_digit(&extended, RegistryKind::Cpf.weight_table()[1]), second);
        }

        /// Deterministic: same input, same output.
        #[test]
        fn deterministic(base in base_for(RegistryKind::Cnpj)) {
            let a = compute_check_digits(&base, RegistryKind::Cnpj).unwrap();
            let b = compute_check_digits(&base, RegistryKind::Cnpj).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
