//! # Registry Kinds
//!
//! Defines the [`RegistryKind`] enum: the two Brazilian person registries
//! whose identifiers this crate understands. The enum is closed; every
//! `match` on it is exhaustive.
//!
//! Each kind carries fixed, published parameters: total digit count, base
//! digit count, the Módulo 11 weight tables for its two check digits, and the
//! canonical punctuation template.

use serde::{Deserialize, Serialize};

/// Number of check digits at the end of every identifier, for both kinds.
pub const CHECK_DIGIT_COUNT: usize = 2;

/// Digit slot marker in a [`RegistryKind::canonical_format`] template.
pub const DIGIT_SLOT: char = 'N';

const CPF_WEIGHTS_FIRST: &[u32] = &[10, 9, 8, 7, 6, 5, 4, 3, 2];
const CPF_WEIGHTS_SECOND: &[u32] = &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

// CNPJ weights run 2..=9 from the right, wrapping back to 9.
const CNPJ_WEIGHTS_FIRST: &[u32] = &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_SECOND: &[u32] = &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// A Brazilian person registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryKind {
    /// Cadastro de Pessoas Físicas: natural persons, 11 digits.
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica: legal entities, 14 digits.
    Cnpj,
}

impl RegistryKind {
    /// Every registry kind, in classification order.
    pub const ALL: [RegistryKind; 2] = [Self::Cpf, Self::Cnpj];

    /// Total number of digits in a complete identifier.
    pub const fn digit_count(self) -> usize {
        match self {
            Self::Cpf => 11,
            Self::Cnpj => 14,
        }
    }

    /// Number of digits preceding the check digits.
    pub const fn base_digit_count(self) -> usize {
        self.digit_count() - CHECK_DIGIT_COUNT
    }

    /// Number of check digits (always two).
    pub const fn check_digit_count(self) -> usize {
        CHECK_DIGIT_COUNT
    }

    /// Módulo 11 weights, one table per check-digit position.
    ///
    /// `weight_table()[0]` has `base_digit_count()` entries; `[1]` has one
    /// more, covering the first check digit as well.
    pub const fn weight_table(self) -> [&'static [u32]; CHECK_DIGIT_COUNT] {
        match self {
            Self::Cpf => [CPF_WEIGHTS_FIRST, CPF_WEIGHTS_SECOND],
            Self::Cnpj => [CNPJ_WEIGHTS_FIRST, CNPJ_WEIGHTS_SECOND],
        }
    }

    /// Punctuation template, with [`DIGIT_SLOT`] marking each digit.
    pub const fn canonical_format(self) -> &'static str {
        match self {
            Self::Cpf => "NNN.NNN.NNN-NN",
            Self::Cnpj => "NN.NNN.NNN/NNNN-NN",
        }
    }

    /// Classify by digit count. `None` when no kind has that many digits.
    pub fn from_digit_count(count: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.digit_count() == count)
    }

    /// Upper-case registry acronym.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
        }
    }
}

impl std::fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RegistryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cpf" => Ok(Self::Cpf),
            "cnpj" => Ok(Self::Cnpj),
            other => Err(format!("unknown registry kind: {other}")),
        }
    }
}
