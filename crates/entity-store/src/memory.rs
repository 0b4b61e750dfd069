use common::EntityId;

use crate::{Entity, EntityStore, Result, StoreError};

/// In-memory entity store.
///
/// Entities live in a `Vec` in insertion order. The identifier counter only
/// moves forward, so identifiers of deleted entities are never handed out
/// again. Nothing survives a process restart.
#[derive(Debug, Clone)]
pub struct InMemoryStore<E> {
    entities: Vec<E>,
    // `None` once the last identifier has been issued.
    next_id: Option<EntityId>,
}

impl<E: Entity> InMemoryStore<E> {
    /// Creates an empty store whose first identifier is `1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store whose first identifier is `next`.
    pub fn starting_at(next: EntityId) -> Self {
        Self {
            entities: Vec::new(),
            next_id: Some(next),
        }
    }

    /// The identifier the next insert will receive, if any is left.
    pub fn next_id(&self) -> Option<EntityId> {
        self.next_id
    }
}

impl<E> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            next_id: Some(EntityId::FIRST),
        }
    }
}

impl<E: Entity> EntityStore<E> for InMemoryStore<E> {
    fn insert(&mut self, draft: E::Draft) -> Result<E> {
        let Some(id) = self.next_id else {
            tracing::error!("identifier space exhausted");
            return Err(StoreError::IdsExhausted);
        };
        self.next_id = id.next();

        let entity = E::from_draft(id, draft);
        self.entities.push(entity.clone());
        tracing::trace!(%id, "entity inserted");
        Ok(entity)
    }

    fn find_by_id(&self, id: EntityId) -> Option<E> {
        self.entities.iter().find(|e| e.id() == id).cloned()
    }

    fn find_index_by_id(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|e| e.id() == id)
    }

    fn get_at(&self, index: usize) -> Option<&E> {
        self.entities.get(index)
    }

    fn replace_at(&mut self, index: usize, entity: E) -> Option<E> {
        let slot = self.entities.get_mut(index)?;
        if slot.id() != entity.id() {
            tracing::warn!(
                stored = %slot.id(),
                replacement = %entity.id(),
                "refusing replacement with a different identifier"
            );
            return None;
        }
        Some(std::mem::replace(slot, entity))
    }

    fn remove_by_id(&mut self, id: EntityId) -> usize {
        let before = self.entities.len();
        self.entities.retain(|e| e.id() != id);
        before - self.entities.len()
    }

    fn all(&self) -> Vec<E> {
        self.entities.clone()
    }

    fn any(&self, predicate: &dyn Fn(&E) -> bool) -> bool {
        self.entities.iter().any(predicate)
    }

    fn len(&self) -> usize {
        self.entities.len()
    }
}
