//! # Identity Newtypes
//!
//! Strict domain primitives for CPF and CNPJ numbers. Unlike
//! [`IdentifierRecord`], which describes *any* input, a [`Cpf`] or [`Cnpj`]
//! can only exist if its check digits are correct. You cannot pass a
//! [`Cnpj`] where a [`Cpf`] is expected.
//!
//! ## Validation
//!
//! Both constructors accept the bare digits or any punctuation (punctuation
//! is discarded), and store the canonical digit-only form. `Display` renders
//! the punctuated form. Deserialization routes through the constructor, so
//! an invalid value in a JSON payload is rejected instead of silently
//! accepted.
//!
//! ## CNPJ structure
//!
//! `RR.RRR.RRR/EEEE-VV`: an eight-digit root identifying the company, a
//! four-digit establishment number (`0001` is the headquarters, higher
//! numbers are branches), and two check digits.

use serde::{Deserialize, Serialize};

use crate::check_digit::append_check_digits;
use crate::error::ValidationError;
use crate::format::format;
use crate::kind::RegistryKind;
use crate::record::IdentifierRecord;

/// Number of digits in a CNPJ root.
pub const CNPJ_ROOT_DIGITS: usize = 8;

/// Highest establishment number a CNPJ can carry.
pub const MAX_ESTABLISHMENT: u32 = 9999;

/// States served by each CPF fiscal region, indexed by the ninth digit.
const FISCAL_REGIONS: [&[&str]; 10] = [
    &["RS"],
    &["DF", "GO", "MS", "MT", "TO"],
    &["AC", "AM", "AP", "PA", "RO", "RR"],
    &["CE", "MA", "PI"],
    &["AL", "PB", "PE", "RN"],
    &["BA", "SE"],
    &["MG"],
    &["ES", "RJ"],
    &["SP"],
    &["PR", "SC"],
];

/// Helper macro to implement `Deserialize` for string newtypes that must
/// validate their contents. Deserializes as a plain `String`, then routes
/// through the type's `new()` constructor.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Digit value at byte offset `i` of an all-ASCII-digit string.
fn digit_at(digits: &str, i: usize) -> u8 {
    digits.as_bytes()[i] - b'0'
}

/// Validate `input` as `kind` and return its raw digits.
fn validated_digits(input: &str, kind: RegistryKind) -> Option<String> {
    let record = IdentifierRecord::from_string(input);
    (record.kind() == Some(kind) && record.is_valid()).then(|| record.raw_digits().to_owned())
}

// ---------------------------------------------------------------------------
// CPF
// ---------------------------------------------------------------------------

/// A CPF number with verified check digits.
///
/// # Validation
///
/// - Exactly 11 digits after discarding punctuation
/// - Not a single repeated digit
/// - Both Módulo 11 check digits correct
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cpf(String);

impl_validating_deserialize!(Cpf);

impl Cpf {
    /// Create a CPF, validating length and check digits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCpf`] carrying the original input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        match validated_digits(&raw, RegistryKind::Cpf) {
            Some(digits) => Ok(Self(digits)),
            None => Err(ValidationError::InvalidCpf(raw)),
        }
    }

    /// The 11 digits, without punctuation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The punctuated form: `NNN.NNN.NNN-NN`.
    pub fn formatted(&self) -> String {
        format(&self.0, RegistryKind::Cpf).expect("validated at construction")
    }

    /// The two trailing check digits.
    pub fn check_digits(&self) -> [u8; 2] {
        [digit_at(&self.0, 9), digit_at(&self.0, 10)]
    }

    /// The ninth digit, naming the fiscal region that issued the number.
    pub fn fiscal_region(&self) -> u8 {
        digit_at(&self.0, 8)
    }

    /// Two-letter codes of the states in this CPF's fiscal region.
    pub fn fiscal_region_states(&self) -> &'static [&'static str] {
        FISCAL_REGIONS[usize::from(self.fiscal_region())]
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl std::str::FromStr for Cpf {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ---------------------------------------------------------------------------
// CNPJ
// ---------------------------------------------------------------------------

/// A CNPJ number with verified check digits.
///
/// # Validation
///
/// - Exactly 14 digits after discarding punctuation
/// - Not a single repeated digit
/// - Both Módulo 11 check digits correct
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cnpj(String);

impl_validating_deserialize!(Cnpj);

impl Cnpj {
    /// Create a CNPJ, validating length and check digits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCnpj`] carrying the original input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        match validated_digits(&raw, RegistryKind::Cnpj) {
            Some(digits) => Ok(Self(digits)),
            None => Err(ValidationError::InvalidCnpj(raw)),
        }
    }

    /// Build the CNPJ of `establishment` under company `root`.
    ///
    /// ```
    /// use cadastro_core::Cnpj;
    ///
    /// let hq = Cnpj::from_root("00000000", 1).unwrap();
    /// assert_eq!(hq.to_string(), "00.000.000/0001-91");
    /// let branch = Cnpj::from_root("00000000", 2).unwrap();
    /// assert_eq!(branch.to_string(), "00.000.000/0002-72");
    /// ```
    ///
    /// # Errors
    ///
    /// - [`ValidationError::InvalidCnpjRoot`] if `root` is not 8 ASCII digits.
    /// - [`ValidationError::InvalidEstablishment`] if `establishment` is 0 or
    ///   above [`MAX_ESTABLISHMENT`].
    /// - [`ValidationError::InvalidCnpj`] if the result is a repeated-digit
    ///   sequence, which is never issued.
    pub fn from_root(root: &str, establishment: u32) -> Result<Self, ValidationError> {
        if root.len() != CNPJ_ROOT_DIGITS || !root.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidCnpjRoot(root.to_string()));
        }
        if establishment == 0 || establishment > MAX_ESTABLISHMENT {
            return Err(ValidationError::InvalidEstablishment(establishment));
        }

        let base = format!("{root}{establishment:04}");
        let full = append_check_digits(&base, RegistryKind::Cnpj)
            .map_err(|_| ValidationError::InvalidCnpj(base.clone()))?;
        Self::new(full)
    }

    /// The 14 digits, without punctuation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The punctuated form: `NN.NNN.NNN/NNNN-NN`.
    pub fn formatted(&self) -> String {
        format(&self.0, RegistryKind::Cnpj).expect("validated at construction")
    }

    /// The eight-digit company root, shared by all its establishments.
    pub fn root(&self) -> &str {
        &self.0[..CNPJ_ROOT_DIGITS]
    }

    /// The establishment number (1 for the headquarters).
    pub fn establishment(&self) -> u32 {
        (CNPJ_ROOT_DIGITS..CNPJ_ROOT_DIGITS + 4)
            .fold(0, |acc, i| acc * 10 + u32::from(digit_at(&self.0, i)))
    }

    /// Whether this is the company's headquarters (establishment `0001`).
    pub fn is_headquarters(&self) -> bool {
        self.establishment() == 1
    }

    /// The two trailing check digits.
    pub fn check_digits(&self) -> [u8; 2] {
        [digit_at(&self.0, 12), digit_at(&self.0, 13)]
    }

    /// The CNPJ of another establishment of the same company.
    ///
    /// # Errors
    ///
    /// Same as [`Cnpj::from_root`].
    pub fn with_establishment(&self, establishment: u32) -> Result<Self, ValidationError> {
        Self::from_root(self.root(), establishment)
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl std::str::FromStr for Cnpj {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Cpf --

    #[test]
    fn cpf_valid_bare_and_formatted() {
        let a = Cpf::new("07068093868").unwrap();
        let b = Cpf::new("070.680.938-68").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "07068093868");
        assert_eq!(a.formatted(), "070.680.938-68");
        assert_eq!(a.to_string(), "070.680.938-68");
    }

    #[test]
    fn cpf_rejects_invalid() {
        assert_eq!(
            Cpf::new("070.680.938-61"),
            Err(ValidationError::InvalidCpf("070.680.938-61".into()))
        );
        assert!(Cpf::new("453.178.287-92").is_err());
        assert!(Cpf::new("11111111111").is_err());
        assert!(Cpf::new("").is_err());
        assert!(Cpf::new("00000000000191").is_err()); // a valid CNPJ
    }

    #[test]
    fn cpf_check_digits() {
        let cpf = Cpf::new("453.178.287-91").unwrap();
        assert_eq!(cpf.check_digits(), [9, 1]);
    }

    #[test]
    fn cpf_fiscal_region() {
        let cpf = Cpf::new("070.680.938-68").unwrap();
        assert_eq!(cpf.fiscal_region(), 8);
        assert_eq!(cpf.fiscal_region_states(), &["SP"]);

        let cpf = Cpf::new("453.178.287-91").unwrap();
        assert_eq!(cpf.fiscal_region(), 7);
        assert_eq!(cpf.fiscal_region_states(), &["ES", "RJ"]);
    }

    #[test]
    fn cpf_from_str() {
        let cpf: Cpf = "45317828791".parse().unwrap();
        assert_eq!(cpf.as_str(), "45317828791");
    }

    // -- Cnpj --

    #[test]
    fn cnpj_valid() {
        let cnpj = Cnpj::new("00.000.000/0001-91").unwrap();
        assert_eq!(cnpj.as_str(), "00000000000191");
        assert_eq!(cnpj.to_string(), "00.000.000/0001-91");
        assert_eq!(cnpj.check_digits(), [9, 1]);
    }

    #[test]
    fn cnpj_rejects_invalid() {
        assert_eq!(
            Cnpj::new("00.000.000/0001-93"),
            Err(ValidationError::InvalidCnpj("00.000.000/0001-93".into()))
        );
        assert!(Cnpj::new("00000000000000").is_err());
        assert!(Cnpj::new("07068093868").is_err()); // a valid CPF
    }

    #[test]
    fn cnpj_from_root() {
        let hq = Cnpj::from_root("00000000", 1).unwrap();
        assert_eq!(hq.to_string(), "00.000.000/0001-91");
        assert_eq!(hq.root(), "00000000");
        assert_eq!(hq.establishment(), 1);
        assert!(hq.is_headquarters());

        let branch = Cnpj::from_root("00000000", 2).unwrap();
        assert_eq!(branch.to_string(), "00.000.000/0002-72");
        assert_eq!(branch.establishment(), 2);
        assert!(!branch.is_headquarters());
    }

    #[test]
    fn cnpj_from_root_large_establishment() {
        let cnpj = Cnpj::from_root("11222333", 9999).unwrap();
        assert_eq!(cnpj.establishment(), 9999);
        assert_eq!(cnpj.root(), "11222333");
        assert!(Cnpj::new(cnpj.to_string()).is_ok());
    }

    #[test]
    fn cnpj_from_root_rejects_bad_input() {
        assert_eq!(
            Cnpj::from_root("0000000", 1),
            Err(ValidationError::InvalidCnpjRoot("0000000".into()))
        );
        assert!(Cnpj::from_root("00.000.000", 1).is_err());
        assert!(Cnpj::from_root("0000000a", 1).is_err());
        assert_eq!(
            Cnpj::from_root("00000000", 0),
            Err(ValidationError::InvalidEstablishment(0))
        );
        assert_eq!(
            Cnpj::from_root("00000000", 10_000),
            Err(ValidationError::InvalidEstablishment(10_000))
        );
    }

    #[test]
    fn cnpj_with_establishment() {
        let hq = Cnpj::new("11.222.333/0001-81").unwrap();
        let branch = hq.with_establishment(2).unwrap();
        assert_eq!(branch.root(), hq.root());
        assert_eq!(branch.establishment(), 2);
        assert!(branch.with_establishment(1).unwrap() == hq);
    }

    // -- Serde --

    #[test]
    fn cpf_serde_roundtrip() {
        let cpf = Cpf::new("070.680.938-68").unwrap();
        let json = serde_json::to_string(&cpf).unwrap();
        assert_eq!(json, "\"07068093868\"");
        let back: Cpf = serde_json::from_str(&json).unwrap();
        assert_eq!(cpf, back);
    }

    #[test]
    fn cnpj_serde_roundtrip() {
        let cnpj = Cnpj::new("00000000000191").unwrap();
        let json = serde_json::to_string(&cnpj).unwrap();
        let back: Cnpj = serde_json::from_str(&json).unwrap();
        assert_eq!(cnpj, back);
    }

    #[test]
    fn deserialize_accepts_punctuation() {
        let cnpj: Cnpj = serde_json::from_str("\"00.000.000/0001-91\"").unwrap();
        assert_eq!(cnpj.as_str(), "00000000000191");
    }

    #[test]
    fn deserialize_rejects_invalid() {
        assert!(serde_json::from_str::<Cpf>("\"07068093861\"").is_err());
        assert!(serde_json::from_str::<Cnpj>("\"00000000000193\"").is_err());
    }

    // -- Hash collections --

    #[test]
    fn cpf_in_hashset() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Cpf::new("07068093868").unwrap());
        set.insert(Cpf::new("070.680.938-68").unwrap());
        set.insert(Cpf::new("45317828791").unwrap());
        assert_eq!(set.len(), 2);
    }
}
