//! Validation policy and result types.

use serde::Serialize;
use std::fmt;

/// Message for a free-form value rejected under [`ValidationPolicy::CnjOnly`].
pub const CNJ_REQUIRED_MESSAGE: &str = "Número do processo deve seguir o padrão CNJ";

/// Which identifier family a process number was judged to belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessNumberKind {
    /// Punctuated like a CNJ number
    Cnj,
    /// Free-form reference such as an internal case code
    Livre,
}

impl fmt::Display for ProcessNumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cnj => f.write_str("cnj"),
            Self::Livre => f.write_str("livre"),
        }
    }
}

/// How strictly free-form process numbers are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Anything that does not look like CNJ is accepted as free-form.
    #[default]
    Permissive,

    /// Only valid CNJ numbers are accepted.
    CnjOnly,
}

/// Outcome of validating a process number typed into a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessNumberValidation {
    pub is_valid: bool,

    #[serde(rename = "type")]
    pub kind: ProcessNumberKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ProcessNumberValidation {
    pub fn valid(kind: ProcessNumberKind) -> Self {
        Self {
            is_valid: true,
            kind,
            message: None,
        }
    }

    pub fn invalid(kind: ProcessNumberKind, message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            kind,
            message: Some(message.into()),
        }
    }
}
