//! Domain Error Types
//!
//! Business-rule failures raised directly by entity operations. Field
//! validation failures are collected first and arrive here wrapped as a
//! single [`DomainValidationError`].

use super::validation::DomainValidationError;

/// Domain-level error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] DomainValidationError),

    #[error("Address is mandatory to activate customer")]
    AddressRequiredForActivation,

    #[error("Points should be positive")]
    NegativeRewardPoints,
}
