//! The contract every stored resource type implements.

use entity_store::Entity;

use crate::DomainError;
use crate::query::Queryable;

/// Whether a create that repeats an existing uniqueness key is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Reject with a conflict.
    #[default]
    Reject,
    /// Store the duplicate.
    Allow,
}

impl std::str::FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(DuplicatePolicy::Reject),
            "allow" => Ok(DuplicatePolicy::Allow),
            other => Err(format!("unknown duplicate policy: {other}")),
        }
    }
}

impl std::fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DuplicatePolicy::Reject => write!(f, "reject"),
            DuplicatePolicy::Allow => write!(f, "allow"),
        }
    }
}

/// A resource served by the list/get/create/update/delete handlers.
///
/// Validation, normalization and merging are pure functions of the payload
/// and the current value; the handlers decide when to call them.
pub trait Resource: Entity + Queryable {
    /// Singular name, used in messages, logs and metric labels.
    const NAME: &'static str;

    /// Path segment of the collection, e.g. `movies`.
    const COLLECTION: &'static str;

    /// Human-readable uniqueness key, or `None` when duplicates are never
    /// checked.
    const UNIQUE_KEY: Option<&'static str> = None;

    type Create: Send;
    type Update: Send;

    fn validate_create(payload: &Self::Create) -> Result<(), DomainError>;

    /// Trims text fields into a draft ready for insertion.
    fn normalize(payload: Self::Create) -> Self::Draft;

    fn validate_update(payload: &Self::Update) -> Result<(), DomainError>;

    /// Returns `self` with the update's fields laid over it.
    fn merge(&self, update: Self::Update) -> Self;

    /// Whether `draft` repeats this entity's uniqueness key.
    fn duplicates(&self, _draft: &Self::Draft) -> bool {
        false
    }
}
