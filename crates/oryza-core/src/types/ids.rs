//! Entity identifiers and the sequence that issues them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Integer identifier of a variant or order.
///
/// Serialized as a bare JSON number, matching records written by earlier
/// versions of the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    /// Creates an id from its raw value.
    ///
    /// # Examples
    ///
    /// ```
    /// use oryza_core::EntityId;
    ///
    /// let id = EntityId::new(42);
    /// assert_eq!(id.get(), 42);
    /// ```
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::str::FromStr for EntityId {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| Error::invalid_id(s))
    }
}

/// Issues unique, strictly increasing ids derived from the wall clock.
///
/// Each id is the current time in milliseconds, bumped past the previous
/// id when two requests land in the same millisecond (or the clock steps
/// backwards). Seed it from a loaded collection so ids stay unique across
/// reloads.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sequence that will only issue ids above every id in `ids`.
    pub fn seeded<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = EntityId>,
    {
        let last = ids.into_iter().map(EntityId::get).max().unwrap_or(0);
        Self { last }
    }

    /// Issues the next id using the current time.
    pub fn next_id(&mut self) -> Result<EntityId> {
        self.next_at(chrono::Utc::now().timestamp_millis())
    }

    /// Issues the next id as if the clock read `now_ms`.
    ///
    /// Fails once `u64::MAX` has been issued; the sequence is left as it was.
    pub fn next_at(&mut self, now_ms: i64) -> Result<EntityId> {
        let floor = self
            .last
            .checked_add(1)
            .ok_or(Error::IdsExhausted { last: self.last })?;
        let id = u64::try_from(now_ms).unwrap_or(0).max(floor);
        self.last = id;
        Ok(EntityId(id))
    }

    /// The most recently issued (or seeded) id, if any.
    pub fn last(&self) -> Option<EntityId> {
        (self.last > 0).then_some(EntityId(self.last))
    }
}
