//! Command handlers shared by every resource.

use common::{EntityId, Page};
use entity_store::{EntityStore, InMemoryStore, SharedStore};

use crate::error::DomainError;
use crate::query::{ListQuery, Queryable};
use crate::resource::{DuplicatePolicy, Resource};

/// List query type for a resource.
pub type ResourceQuery<R> = ListQuery<<R as Queryable>::Filter, <R as Queryable>::Sort>;

/// List, get, create, update and delete over one resource type.
///
/// The service holds no state of its own. Reads run under the store's read
/// guard and mutations under its write guard, so each command sees and leaves
/// a consistent store. A rejected command leaves the store as it was.
pub struct ResourceService<R: Resource, S: EntityStore<R> = InMemoryStore<R>> {
    store: SharedStore<R, S>,
    duplicates: DuplicatePolicy,
}

impl<R: Resource> ResourceService<R> {
    /// Creates a service over an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryStore::new())
    }
}

impl<R: Resource, S: EntityStore<R>> ResourceService<R, S> {
    /// Creates a service that rejects duplicates.
    pub fn new(store: S) -> Self {
        Self::with_policy(store, DuplicatePolicy::Reject)
    }

    pub fn with_policy(store: S, duplicates: DuplicatePolicy) -> Self {
        Self {
            store: SharedStore::new(store),
            duplicates,
        }
    }

    /// Returns the shared store.
    pub fn store(&self) -> &SharedStore<R, S> {
        &self.store
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    /// Filters, sorts and pages the collection.
    #[tracing::instrument(skip_all, fields(resource = R::NAME))]
    pub async fn list(&self, query: &ResourceQuery<R>) -> Page<R> {
        record_command(R::NAME, "list");
        let store = self.store.read().await;
        let page = crate::query::run(store.all(), query);
        tracing::debug!(total = page.total, returned = page.items.len(), "listed");
        page
    }

    /// Loads one entity.
    #[tracing::instrument(skip_all, fields(resource = R::NAME, id = %id))]
    pub async fn get(&self, id: EntityId) -> Result<R, DomainError> {
        record_command(R::NAME, "get");
        let store = self.store.read().await;
        store
            .find_by_id(id)
            .ok_or_else(|| DomainError::not_found(R::NAME, id))
            .inspect_err(record_rejection::<R>)
    }

    /// Validates, checks uniqueness and stores a new entity.
    ///
    /// The returned entity carries its freshly assigned identifier.
    #[tracing::instrument(skip_all, fields(resource = R::NAME))]
    pub async fn create(&self, payload: R::Create) -> Result<R, DomainError> {
        record_command(R::NAME, "create");
        R::validate_create(&payload).inspect_err(record_rejection::<R>)?;
        let draft = R::normalize(payload);

        let mut store = self.store.write().await;
        if let Some(key) = R::UNIQUE_KEY
            && self.duplicates == DuplicatePolicy::Reject
            && store.any(&|existing: &R| existing.duplicates(&draft))
        {
            let err = DomainError::duplicate(key);
            record_rejection::<R>(&err);
            return Err(err);
        }

        let entity = store
            .insert(draft)
            .map_err(DomainError::from)
            .inspect_err(record_rejection::<R>)?;
        record_size(R::NAME, store.len());
        tracing::info!(id = %entity.id(), "created");
        Ok(entity)
    }

    /// Merges an update into an existing entity.
    ///
    /// An unknown identifier is reported before the payload is validated.
    #[tracing::instrument(skip_all, fields(resource = R::NAME, id = %id))]
    pub async fn update(&self, id: EntityId, payload: R::Update) -> Result<R, DomainError> {
        record_command(R::NAME, "update");
        let mut store = self.store.write().await;

        let result = apply_update::<R, S>(&mut *store, id, payload);
        match &result {
            Ok(_) => tracing::info!("updated"),
            Err(err) => record_rejection::<R>(err),
        }
        result
    }

    /// Removes an entity. Its identifier is never issued again.
    #[tracing::instrument(skip_all, fields(resource = R::NAME, id = %id))]
    pub async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        record_command(R::NAME, "delete");
        let mut store = self.store.write().await;

        let removed = store.remove_by_id(id);
        if removed == 0 {
            let err = DomainError::not_found(R::NAME, id);
            record_rejection::<R>(&err);
            return Err(err);
        }

        record_size(R::NAME, store.len());
        tracing::info!(removed, "deleted");
        Ok(())
    }

    /// Returns every entity accepted by `predicate`, in store order.
    pub async fn select(&self, predicate: impl Fn(&R) -> bool) -> Vec<R> {
        let store = self.store.read().await;
        store.all().into_iter().filter(|e| predicate(e)).collect()
    }

    /// Number of live entities.
    pub async fn count(&self) -> usize {
        self.store.len().await
    }
}

fn apply_update<R: Resource, S: EntityStore<R>>(
    store: &mut S,
    id: EntityId,
    payload: R::Update,
) -> Result<R, DomainError> {
    let index = store
        .find_index_by_id(id)
        .ok_or_else(|| DomainError::not_found(R::NAME, id))?;
    let current = store
        .get_at(index)
        .ok_or_else(|| DomainError::not_found(R::NAME, id))?;

    R::validate_update(&payload)?;
    let updated = current.merge(payload);

    store
        .replace_at(index, updated.clone())
        .ok_or_else(|| DomainError::not_found(R::NAME, id))?;
    Ok(updated)
}

fn record_command(resource: &'static str, op: &'static str) {
    metrics::counter!("resource_commands_total", "resource" => resource, "op" => op).increment(1);
}

fn record_rejection<R: Resource>(err: &DomainError) {
    metrics::counter!(
        "resource_rejections_total",
        "resource" => R::NAME,
        "kind" => err.kind()
    )
    .increment(1);
    tracing::debug!(error = %err, kind = err.kind(), "command rejected");
}

fn record_size(resource: &'static str, len: usize) {
    metrics::gauge!("resource_entities", "resource" => resource).set(len as f64);
}
