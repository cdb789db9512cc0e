//! Form-facing validation of process numbers.
//!
//! A process number is either a CNJ number or a free-form reference
//! ("livre"). Values punctuated with both a hyphen and a period are held
//! to the full CNJ rules; anything else is free-form, which the default
//! policy accepts.

pub mod policy;

pub use policy::{
    ProcessNumberKind, ProcessNumberValidation, ValidationPolicy, CNJ_REQUIRED_MESSAGE,
};

use crate::domain::CnjNumber;
use crate::error::CnjError;

/// Validator applying a [`ValidationPolicy`] to form input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessNumberValidator {
    policy: ValidationPolicy,
}

impl ProcessNumberValidator {
    /// Creates a validator with the given policy.
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    /// Creates a validator that rejects free-form references.
    pub fn cnj_only() -> Self {
        Self::new(ValidationPolicy::CnjOnly)
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Validates a process number. Never fails; every outcome is a value.
    ///
    /// # Rules
    /// - Empty or whitespace-only input is rejected as free-form.
    /// - Input containing both `-` and `.` must be a valid CNJ number;
    ///   shape errors and check-digit errors get distinct messages.
    /// - Anything else is free-form, accepted unless the policy is
    ///   [`ValidationPolicy::CnjOnly`].
    pub fn validate(&self, value: &str) -> ProcessNumberValidation {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return ProcessNumberValidation::invalid(
                ProcessNumberKind::Livre,
                CnjError::Empty.message(),
            );
        }

        if !looks_like_cnj(trimmed) {
            tracing::debug!(value = trimmed, policy = ?self.policy, "free-form process number");
            return match self.policy {
                ValidationPolicy::Permissive => {
                    ProcessNumberValidation::valid(ProcessNumberKind::Livre)
                }
                ValidationPolicy::CnjOnly => ProcessNumberValidation::invalid(
                    ProcessNumberKind::Livre,
                    CNJ_REQUIRED_MESSAGE,
                ),
            };
        }

        match CnjNumber::parse(trimmed) {
            Ok(_) => ProcessNumberValidation::valid(ProcessNumberKind::Cnj),
            Err(err) => {
                tracing::debug!(value = trimmed, error = %err, "rejected CNJ number");
                ProcessNumberValidation::invalid(ProcessNumberKind::Cnj, err.message())
            }
        }
    }
}

/// Hyphen plus period is taken as an attempt at CNJ punctuation.
fn looks_like_cnj(value: &str) -> bool {
    value.contains('-') && value.contains('.')
}

/// Validates with the default (permissive) policy.
pub fn validate_process_number(value: &str) -> ProcessNumberValidation {
    ProcessNumberValidator::default().validate(value)
}
