//! Ordered, ID-keyed in-memory collection for one entity kind.

use cinecat_core::types::DbId;

/// A record that lives in an [`EntityStore`].
pub trait Entity: Clone {
    /// Human-readable kind name used in errors and logs (`"Director"`).
    const KIND: &'static str;

    fn id(&self) -> DbId;
}

/// Insertion-ordered records plus a monotonic ID counter.
///
/// IDs are handed out from `next_id` and never reused, even after the record
/// holding one is removed.
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    records: Vec<T>,
    next_id: DbId,
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a store from records that already carry IDs.
    ///
    /// The counter resumes after the largest seeded ID.
    pub fn seeded(records: Vec<T>) -> Self {
        let next_id = records.iter().map(Entity::id).max().unwrap_or(0) + 1;
        Self { records, next_id }
    }

    /// Assign the next ID, build the record with it and append it.
    pub fn insert(&mut self, build: impl FnOnce(DbId) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;

        let record = build(id);
        self.records.push(record.clone());
        record
    }

    pub fn get(&self, id: DbId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Replace the whole record with `id` in place, keeping its position.
    ///
    /// Returns `None` (and builds nothing) if no record has that ID.
    pub fn update(&mut self, id: DbId, build: impl FnOnce(DbId) -> T) -> Option<T> {
        let slot = self.records.iter_mut().find(|r| r.id() == id)?;
        *slot = build(id);
        Some(slot.clone())
    }

    /// Remove and return the record with `id`; remaining order is preserved.
    pub fn remove(&mut self, id: DbId) -> Option<T> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The ID the next insert will receive.
    pub fn next_id(&self) -> DbId {
        self.next_id
    }
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
