//! Aggregated validation failure.

use super::notification::{ErrorCollector, ErrorRecord};

/// Raised once after every rule for an entity has run.
///
/// Carries the full, ordered list of violations. The display form is the
/// unfiltered `"{context}: {message}"` join produced by [`ErrorCollector::messages`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .notification.messages(None))]
pub struct DomainValidationError {
    notification: ErrorCollector,
}

impl DomainValidationError {
    /// Build from a snapshot of an entity's collected errors.
    pub fn new(errors: &[ErrorRecord]) -> Self {
        Self {
            notification: ErrorCollector::from(errors.to_vec()),
        }
    }

    /// Every violation, in the order it was recorded.
    pub fn errors(&self) -> &[ErrorRecord] {
        self.notification.errors()
    }

    /// Violations rendered and joined, optionally filtered by context.
    pub fn messages(&self, context: Option<&str>) -> String {
        self.notification.messages(context)
    }

    /// Message of the first violation, without its context prefix.
    pub fn first_message(&self) -> Option<&str> {
        self.errors().first().map(|error| error.message.as_str())
    }

    /// True if any violation carries exactly this message.
    pub fn contains(&self, message: &str) -> bool {
        self.errors().iter().any(|error| error.message == message)
    }
}
