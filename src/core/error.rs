//! Error taxonomy.
//!
//! Two classes of failure exist in the core:
//!
//! - **Invalid argument** ([`ValidationError`]): a caller handed a bad value
//!   to a constructor or operation. Raised synchronously at the boundary that
//!   received the value and carries the field name and offending value so a
//!   collaborator can render a message.
//! - **Topology violation** ([`GameError::Topology`]): board generation
//!   produced an inconsistent graph. This is a programming error and is
//!   propagated rather than papered over.
//!
//! Nothing in the core performs I/O, so there are no retryable errors.

use thiserror::Error;

/// A rejected input value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid {field} `{value}`: expected {expected}")]
pub struct ValidationError {
    /// Name of the offending field or parameter.
    pub field: &'static str,
    /// The offending value, rendered for display.
    pub value: String,
    /// What would have been accepted.
    pub expected: String,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(field: &'static str, value: impl ToString, expected: impl Into<String>) -> Self {
        Self {
            field,
            value: value.to_string(),
            expected: expected.into(),
        }
    }

    /// Reject a blank text field.
    pub fn blank(field: &'static str) -> Self {
        Self::new(field, "", "non-blank text")
    }
}

/// Every failure the core can report.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A caller supplied a value outside the accepted domain.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Board generation produced an inconsistent tile graph.
    #[error("board topology invariant violated: {detail}")]
    Topology {
        /// What went wrong, including the coordinate or id involved.
        detail: String,
    },
}

impl GameError {
    /// Shorthand for a topology violation.
    pub fn topology(detail: impl Into<String>) -> Self {
        Self::Topology {
            detail: detail.into(),
        }
    }

    /// The validation error behind this failure, if it is one.
    #[must_use]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            GameError::Invalid(err) => Some(err),
            GameError::Topology { .. } => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

/// Check that a required text field is not blank.
pub(crate) fn require_text(
    field: &'static str,
    value: &str,
) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::blank(field))
    } else {
        Ok(())
    }
}

/// Check that `value` lies in `min..=max`.
pub(crate) fn require_range<T>(
    field: &'static str,
    value: T,
    min: T,
    max: T,
) -> std::result::Result<(), ValidationError>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if value < min || value > max {
        Err(ValidationError::new(field, value, format!("a value in [{}, {}]", min, max)))
    } else {
        Ok(())
    }
}
