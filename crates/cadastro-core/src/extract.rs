//! # Digit Extraction
//!
//! Strips formatting from user input. [`extract`] never fails: every
//! character that is not an ASCII digit is discarded, whatever it is and
//! wherever it sits. Length problems are left to the classifier.
//!
//! [`normalize`] additionally reports whether the input was spelled in one
//! of the two accepted shapes: the bare digit string, or exactly the
//! canonical punctuated form of the registry kind its digit count matches.

use serde::Serialize;

use crate::format::format;
use crate::kind::RegistryKind;

/// Digits extracted from an input string, with a formatting verdict.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Extraction {
    /// ASCII digits of the input, in order.
    pub digits: String,
    /// Whether the input was the bare digits or the canonical punctuation.
    pub well_formed: bool,
}

/// Remove every non-digit character, preserving digit order.
///
/// Only ASCII `0`–`9` count as digits; other Unicode decimal digits are
/// discarded along with punctuation.
pub fn extract(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Extract digits and judge the input's punctuation.
pub fn normalize(input: &str) -> Extraction {
    let digits = extract(input);
    let well_formed = match RegistryKind::from_digit_count(digits.len()) {
        None => false,
        Some(kind) => {
            input == digits || format(&digits, kind).is_ok_and(|canonical| canonical == input)
        }
    };
    Extraction {
        digits,
        well_formed,
    }
}
