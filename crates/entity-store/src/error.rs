use thiserror::Error;

/// Errors raised by an entity store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Every identifier has been handed out; the store accepts no more inserts.
    #[error("identifier space exhausted")]
    IdsExhausted,
}

/// Result type for entity store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
