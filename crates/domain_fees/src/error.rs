//! Fees domain errors

use core_kernel::{MoneyError, StudentId, TemplateId};
use std::fmt;
use thiserror::Error;

/// Errors that can occur in the fees domain
#[derive(Debug, Error)]
pub enum FeesError {
    /// Malformed input: bad enum value, non-positive amount, missing field
    #[error("Validation error: {0}")]
    Validation(String),

    /// Template, student, ledger, or transaction absent
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Payment attempted before any fee structure assignment
    #[error("No fee structure assigned to student {0}")]
    NotAssigned(StudentId),

    /// Deleting a template still referenced by student ledgers
    #[error("Fee structure {0} is assigned to one or more students")]
    TemplateInUse(TemplateId),

    /// Serialization primitive contention; the caller should retry
    #[error("Concurrent modification: {0}")]
    Conflict(String),

    /// Money arithmetic or range error
    #[error(transparent)]
    Money(#[from] MoneyError),
}

impl FeesError {
    pub fn validation(message: impl Into<String>) -> Self {
        FeesError::Validation(message.into())
    }

    pub fn not_found(entity: &'static str, id: impl fmt::Display) -> Self {
        FeesError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Returns true if this error indicates an absent entity
    pub fn is_not_found(&self) -> bool {
        matches!(self, FeesError::NotFound { .. })
    }

    /// Returns true if the caller may retry the operation as-is
    pub fn is_retryable(&self) -> bool {
        matches!(self, FeesError::Conflict(_))
    }
}
