//! Domain error types.

use common::EntityId;
use entity_store::StoreError;
use thiserror::Error;

/// Reasons a command is rejected.
///
/// A rejected command never changes the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A payload field is missing, blank or out of range.
    #[error("{0}")]
    Validation(String),

    /// The payload collides with an existing entity's uniqueness key.
    #[error("{0}")]
    Conflict(String),

    /// No entity with this identifier.
    #[error("{resource} {id} not found")]
    NotFound {
        resource: &'static str,
        id: EntityId,
    },

    /// The store could not carry out the command.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl DomainError {
    pub fn required(field: &str) -> Self {
        DomainError::Validation(format!("{field} required"))
    }

    pub fn non_negative(field: &str) -> Self {
        DomainError::Validation(format!("{field} must be non-negative"))
    }

    pub fn duplicate(key: &str) -> Self {
        DomainError::Conflict(format!("duplicate {key}"))
    }

    pub fn not_found(resource: &'static str, id: EntityId) -> Self {
        DomainError::NotFound { resource, id }
    }

    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::Validation(_) => "validation",
            DomainError::Conflict(_) => "conflict",
            DomainError::NotFound { .. } => "not_found",
            DomainError::Store(_) => "store",
        }
    }
}
