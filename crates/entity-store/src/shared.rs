use std::marker::PhantomData;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{Entity, EntityStore};

/// A store behind a single reader/writer lock.
///
/// Holding the read guard for a whole query, or the write guard for a whole
/// validate-check-mutate sequence, makes each command one critical section.
pub struct SharedStore<E, S> {
    inner: Arc<RwLock<S>>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity, S: EntityStore<E>> SharedStore<E, S> {
    pub fn new(store: S) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
            _entity: PhantomData,
        }
    }

    /// Locks the store for a read-only command.
    pub async fn read(&self) -> RwLockReadGuard<'_, S> {
        self.inner.read().await
    }

    /// Locks the store for a mutating command.
    pub async fn write(&self) -> RwLockWriteGuard<'_, S> {
        self.inner.write().await
    }

    /// Number of live entities.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

impl<E, S> Clone for SharedStore<E, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity, S: EntityStore<E> + Default> Default for SharedStore<E, S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
