//! # Identifier Records
//!
//! [`IdentifierRecord`] is the outcome of validating one input string. It is
//! built once, eagerly, and never changes afterwards.

use serde::Serialize;

use crate::classify::validate;
use crate::extract::normalize;
use crate::kind::RegistryKind;

/// Result of classifying and validating one identifier string.
///
/// # Invariants
///
/// - `is_valid()` implies `kind()` and `formatted()` are `Some`, and
///   extracting the digits of `formatted()` yields `raw_digits()`.
/// - `formatted()` is `Some` exactly when `kind()` is `Some`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IdentifierRecord {
    raw_digits: String,
    kind: Option<RegistryKind>,
    is_valid: bool,
    formatted: Option<String>,
    well_formed: bool,
}

impl IdentifierRecord {
    pub(crate) fn new(
        raw_digits: String,
        kind: Option<RegistryKind>,
        is_valid: bool,
        formatted: Option<String>,
        well_formed: bool,
    ) -> Self {
        Self {
            raw_digits,
            kind,
            is_valid,
            formatted,
            well_formed,
        }
    }

    /// Extract the digits of `input`, classify them, and verify them.
    ///
    /// Punctuation is discarded before classification, so `"070.680.938-68"`
    /// and `"07068093868"` produce the same kind, validity and formatting.
    pub fn from_string(input: &str) -> Self {
        let extraction = normalize(input);
        let record = validate(&extraction.digits);
        Self {
            well_formed: extraction.well_formed,
            ..record
        }
    }

    /// The extracted digit string.
    pub fn raw_digits(&self) -> &str {
        &self.raw_digits
    }

    /// The matched registry, or `None` when the digit count matches neither.
    pub fn kind(&self) -> Option<RegistryKind> {
        self.kind
    }

    /// Whether the kind is known and both check digits are correct.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Canonical punctuated rendering, when the digit count fits a kind.
    pub fn formatted(&self) -> Option<&str> {
        self.formatted.as_deref()
    }

    /// Whether the input was bare digits or exactly the canonical form.
    pub fn well_formed(&self) -> bool {
        self.well_formed
    }
}

impl std::str::FromStr for IdentifierRecord {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_string(s))
    }
}

impl std::fmt::Display for IdentifierRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.formatted().unwrap_or(&self.raw_digits))
    }
}
