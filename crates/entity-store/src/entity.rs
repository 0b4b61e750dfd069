use common::EntityId;

/// A record kept in an [`EntityStore`](crate::EntityStore).
///
/// Every entity carries an identifier assigned by the store. Before it has
/// one, the same data travels as a `Draft`.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The entity's fields without its identifier.
    type Draft: Send;

    /// Returns the identifier assigned on insertion.
    fn id(&self) -> EntityId;

    /// Attaches a freshly issued identifier to a draft.
    fn from_draft(id: EntityId, draft: Self::Draft) -> Self;
}
