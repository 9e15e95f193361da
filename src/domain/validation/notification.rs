//! Error collector (notification pattern).
//!
//! An ordered, append-only list of `(message, context)` records. Entities own
//! exactly one collector each and rebuild it on every validation pass.

use serde::{Deserialize, Serialize};

/// A single validation violation tagged with the entity context it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Human readable violation message (e.g. "Name is required")
    pub message: String,

    /// Entity label the violation belongs to (e.g. "Customer")
    pub context: String,
}

impl ErrorRecord {
    /// Create a new error record.
    pub fn new(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: context.into(),
        }
    }

    /// Render as `"{context}: {message}"`.
    pub fn render(&self) -> String {
        format!("{}: {}", self.context, self.message)
    }
}

impl std::fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.context, self.message)
    }
}

/// Ordered collection of validation errors.
///
/// Insertion order is preserved and duplicates are kept. Records are copied
/// on insert, so the caller's value can be reused or changed afterwards
/// without touching what was stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorCollector {
    errors: Vec<ErrorRecord>,
}

impl ErrorCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Append a copy of `error`.
    pub fn add_error(&mut self, error: &ErrorRecord) {
        self.errors.push(error.clone());
    }

    /// True if at least one error was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// All recorded errors, in insertion order.
    pub fn errors(&self) -> &[ErrorRecord] {
        &self.errors
    }

    /// Number of recorded errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Render errors as `"{context}: {message}"` joined by `", "`.
    ///
    /// With `Some(context)` only records whose context matches exactly
    /// (case-sensitive) are included; an unknown context yields `""`.
    /// An empty context is treated as no filter.
    pub fn messages(&self, context: Option<&str>) -> String {
        let context = context.filter(|c| !c.is_empty());
        self.errors
            .iter()
            .filter(|error| context.map_or(true, |c| error.context == c))
            .map(ErrorRecord::render)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl From<Vec<ErrorRecord>> for ErrorCollector {
    fn from(errors: Vec<ErrorRecord>) -> Self {
        Self { errors }
    }
}
