//! Error types for CNJ number parsing.
//!
//! The public validation functions never fail; they map these errors to
//! `false`, `None` or a structured result. The typed constructors on
//! [`CnjNumber`](crate::CnjNumber) return them so callers can tell a
//! punctuation typo from a digit typo.

use thiserror::Error;

/// Result type alias for CNJ parsing operations.
pub type CnjResult<T> = Result<T, CnjError>;

/// Reasons a value could not be turned into a [`CnjNumber`](crate::CnjNumber).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CnjError {
    /// Input was empty or whitespace only
    #[error("process number is empty")]
    Empty,

    /// Input does not follow the NNNNNNN-DD.AAAA.J.TR.OOOO punctuation
    #[error("'{value}' does not match the CNJ pattern NNNNNNN-DD.AAAA.J.TR.OOOO")]
    InvalidShape { value: String },

    /// Wrong number of digits for a raw identifier
    #[error("expected {expected} digits, found {found}")]
    InvalidLength { expected: usize, found: usize },

    /// Shape is fine but the embedded check digits are wrong
    #[error("check digits mismatch: expected {expected}, found {found}")]
    CheckDigitMismatch { expected: String, found: String },

    /// A single field has the wrong width or contains non-digits
    #[error("invalid field '{field}': {reason}")]
    Field { field: &'static str, reason: String },
}

impl CnjError {
    /// User-facing message shown next to a process-number input.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Empty => "Número do processo é obrigatório",
            Self::CheckDigitMismatch { .. } => {
                "Número CNJ inválido - dígitos verificadores incorretos"
            }
            Self::InvalidShape { .. } | Self::InvalidLength { .. } | Self::Field { .. } => {
                "Formato CNJ inválido. Use o padrão NNNNNNN-DD.AAAA.J.TR.OOOO"
            }
        }
    }

    /// Returns true when the number was well formed but failed the checksum.
    pub fn is_checksum_error(&self) -> bool {
        matches!(self, Self::CheckDigitMismatch { .. })
    }
}
