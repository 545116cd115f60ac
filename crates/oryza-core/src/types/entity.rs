//! The persisted-entity abstraction shared by variants and orders.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::types::EntityId;

/// A record kept in an insertion-ordered, persisted collection.
///
/// Each implementor names the store key its whole collection lives under
/// and knows how to build itself from a draft once an id is assigned.
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// Key the full collection is stored under.
    const STORE_KEY: &'static str;

    /// Human-readable kind, used in log events.
    const KIND: &'static str;

    /// Fields supplied by the caller on creation.
    type Draft;

    /// Returns this entity's id.
    fn id(&self) -> EntityId;

    /// Builds a new entity from a draft and a freshly issued id.
    fn from_draft(id: EntityId, draft: Self::Draft) -> Self;

    /// Collection used when nothing usable is persisted yet.
    fn defaults() -> Vec<Self> {
        Vec::new()
    }
}
