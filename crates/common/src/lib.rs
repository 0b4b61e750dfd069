//! Shared types for the resource services.

pub mod paging;
pub mod types;

pub use paging::{DEFAULT_TAKE, MAX_TAKE, Page, Paging};
pub use types::EntityId;
