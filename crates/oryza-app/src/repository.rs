//! Persisted, insertion-ordered entity collections.
//!
//! A [`Repository`] owns the in-memory copy of one collection. Every
//! mutation builds the next collection, writes it to the store in full, and
//! only then swaps it in, so memory and store never disagree after a failed
//! write.

use oryza_core::{Entity, EntityId, IdSequence};
use oryza_storage::{KeyValueStore, LocalStore};

use crate::Result;

/// Result of a confirmed-or-aborted delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Entities were removed and the collection persisted
    Deleted {
        /// How many entities carried the id
        removed: usize,
    },
    /// Confirmed, but nothing carried the id; nothing was written
    NotFound,
    /// The user declined; nothing was written
    Cancelled,
}

impl DeleteOutcome {
    /// Returns `true` when something was removed.
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted { .. })
    }
}

/// In-memory collection of `E`, newest first, backed by a [`LocalStore`].
#[derive(Debug, Clone)]
pub struct Repository<E: Entity> {
    items: Vec<E>,
    ids: IdSequence,
}

impl<E: Entity> Repository<E> {
    /// Loads the collection stored under `E::STORE_KEY`.
    ///
    /// Absent or corrupt data yields `E::defaults()`.
    pub fn load<S: KeyValueStore>(store: &LocalStore<S>) -> Result<Self> {
        let items: Vec<E> = store.load_or_else(E::STORE_KEY, E::defaults)?;
        tracing::debug!(kind = E::KIND, count = items.len(), "Loaded collection");
        Ok(Self::from_items(items))
    }

    /// Wraps an existing collection without touching the store.
    pub fn from_items(items: Vec<E>) -> Self {
        let ids = IdSequence::seeded(items.iter().map(Entity::id));
        Self { items, ids }
    }

    /// All entities in display order.
    pub fn list(&self) -> &[E] {
        &self.items
    }

    /// Looks up an entity by id.
    pub fn get(&self, id: EntityId) -> Option<&E> {
        self.items.iter().find(|e| e.id() == id)
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Creates an entity with a fresh id, prepends it, and persists.
    ///
    /// Fails without writing once the id sequence is exhausted.
    pub fn create<S: KeyValueStore>(
        &mut self,
        draft: E::Draft,
        store: &mut LocalStore<S>,
    ) -> Result<E> {
        let id = self.ids.next_id()?;
        let entity = E::from_draft(id, draft);

        let mut next = Vec::with_capacity(self.items.len() + 1);
        next.push(entity.clone());
        next.extend(self.items.iter().cloned());

        store.save(E::STORE_KEY, &next)?;
        self.items = next;

        tracing::info!(kind = E::KIND, id = %id, "Created");
        Ok(entity)
    }

    /// Removes every entity carrying `id` once `confirm` agrees.
    ///
    /// `confirm` is asked before the lookup, so a declined delete never
    /// touches the collection.
    pub fn delete<S, F>(
        &mut self,
        id: EntityId,
        store: &mut LocalStore<S>,
        confirm: F,
    ) -> Result<DeleteOutcome>
    where
        S: KeyValueStore,
        F: FnOnce() -> bool,
    {
        if !confirm() {
            tracing::debug!(kind = E::KIND, id = %id, "Delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        let remaining: Vec<E> = self
            .items
            .iter()
            .filter(|e| e.id() != id)
            .cloned()
            .collect();
        let removed = self.items.len() - remaining.len();
        if removed == 0 {
            tracing::debug!(kind = E::KIND, id = %id, "Delete target not found");
            return Ok(DeleteOutcome::NotFound);
        }

        store.save(E::STORE_KEY, &remaining)?;
        self.items = remaining;

        tracing::info!(kind = E::KIND, id = %id, removed, "Deleted");
        Ok(DeleteOutcome::Deleted { removed })
    }
}
