use common::EntityId;

use crate::{Entity, Result};

/// Ordered collection of one entity type with a monotonic identifier counter.
///
/// Implementations are not synchronized on their own. Callers that share a
/// store across tasks wrap it in a [`SharedStore`](crate::SharedStore) so each
/// command runs as one critical section.
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Assigns the next identifier to `draft`, appends it and returns the
    /// stored entity.
    ///
    /// Fails with [`StoreError::IdsExhausted`](crate::StoreError::IdsExhausted)
    /// once no identifier is left; the store is unchanged in that case.
    fn insert(&mut self, draft: E::Draft) -> Result<E>;

    /// Returns the first entity with this identifier.
    fn find_by_id(&self, id: EntityId) -> Option<E>;

    /// Returns the position of the entity with this identifier.
    fn find_index_by_id(&self, id: EntityId) -> Option<usize>;

    /// Returns the entity stored at `index`.
    fn get_at(&self, index: usize) -> Option<&E>;

    /// Overwrites the entity at `index`, returning the previous value.
    ///
    /// The replacement must carry the identifier already stored at `index`.
    /// Returns `None` and leaves the store untouched if `index` is out of range
    /// or the identifiers differ.
    fn replace_at(&mut self, index: usize, entity: E) -> Option<E>;

    /// Removes every entity with this identifier and returns how many went.
    fn remove_by_id(&mut self, id: EntityId) -> usize;

    /// Returns every entity in insertion order.
    fn all(&self) -> Vec<E>;

    /// Whether any stored entity satisfies `predicate`, without cloning.
    fn any(&self, predicate: &dyn Fn(&E) -> bool) -> bool;

    /// Number of live entities.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
