//! # Classification and Validation
//!
//! Decides which registry a raw digit string belongs to (by length alone)
//! and whether its check digits are consistent with its base digits.
//!
//! ## Repeated digits
//!
//! Sequences made of a single repeated digit (`11111111111`,
//! `00000000000000`, ...) are never issued by either registry. Several of them
//! satisfy the Módulo 11 arithmetic anyway, so they are rejected explicitly
//! before the check digits are compared.

use crate::check_digit::{compute_check_digits, parse_digits};
use crate::format::format;
use crate::kind::RegistryKind;
use crate::record::IdentifierRecord;

/// Registry kind whose digit count equals the length of `raw_digits`.
///
/// Returns `None` when the length matches no kind, or when `raw_digits`
/// contains anything other than ASCII digits.
pub fn classify(raw_digits: &str) -> Option<RegistryKind> {
    if !raw_digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    RegistryKind::from_digit_count(raw_digits.len())
}

/// Classify `raw_digits` and verify its check digits.
///
/// Never fails: malformed input produces a record with no kind and
/// `is_valid() == false`.
pub fn validate(raw_digits: &str) -> IdentifierRecord {
    let kind = classify(raw_digits);
    let is_valid = kind.is_some_and(|kind| check_digits_match(raw_digits, kind));
    let formatted = kind.and_then(|kind| format(raw_digits, kind).ok());
    IdentifierRecord::new(raw_digits.to_owned(), kind, is_valid, formatted, kind.is_some())
}

/// Whether every character of `digits` is the same.
pub fn is_repeated_digit(digits: &str) -> bool {
    let mut bytes = digits.bytes();
    match bytes.next() {
        None => false,
        Some(first) => bytes.all(|b| b == first),
    }
}

/// Compare supplied check digits with the engine's, for a classified string.
fn check_digits_match(raw_digits: &str, kind: RegistryKind) -> bool {
    if is_repeated_digit(raw_digits) {
        return false;
    }
    let Ok(digits) = parse_digits(raw_digits) else {
        return false;
    };
    let (base, supplied) = digits.split_at(kind.base_digit_count());
    match compute_check_digits(base, kind) {
        Ok(expected) => supplied == expected.as_slice(),
        Err(_) => false,
    }
}
