pub mod entity;
pub mod error;
pub mod memory;
pub mod shared;
pub mod store;

pub use common::EntityId;
pub use entity::Entity;
pub use error::{Result, StoreError};
pub use memory::InMemoryStore;
pub use shared::SharedStore;
pub use store::EntityStore;
