//! Dense indexing of task ids.
//!
//! Task ids are arbitrary positive integers chosen by the caller. The passes run
//! over plain vectors, so each id is mapped to a slot in `0..len`.

use rustc_hash::FxHashMap;

use crate::models::TaskId;

/// Position of a task in the calculator's working vectors.
pub type TaskSlot = usize;

/// Bidirectional mapping between task ids and slots.
#[derive(Debug, Clone)]
pub struct TaskIdInterner {
    to_slot: FxHashMap<TaskId, TaskSlot>,
    from_slot: Vec<TaskId>,
}

impl TaskIdInterner {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_slot: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            from_slot: Vec::with_capacity(capacity),
        }
    }

    /// Assign the next slot to `id`.
    ///
    /// Returns `None` if `id` was already interned; the existing slot is kept.
    pub fn insert(&mut self, id: TaskId) -> Option<TaskSlot> {
        if self.to_slot.contains_key(&id) {
            return None;
        }
        let slot = self.from_slot.len();
        self.from_slot.push(id);
        self.to_slot.insert(id, slot);
        Some(slot)
    }

    #[inline]
    pub fn slot(&self, id: TaskId) -> Option<TaskSlot> {
        self.to_slot.get(&id).copied()
    }

    #[inline]
    pub fn id(&self, slot: TaskSlot) -> TaskId {
        self.from_slot[slot]
    }

    pub fn len(&self) -> usize {
        self.from_slot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from_slot.is_empty()
    }
}

impl Default for TaskIdInterner {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_resolve() {
        let mut interner = TaskIdInterner::with_capacity(4);

        assert_eq!(interner.insert(40), Some(0));
        assert_eq!(interner.insert(7), Some(1));
        assert_eq!(interner.insert(40), None); // duplicate

        assert_eq!(interner.slot(40), Some(0));
        assert_eq!(interner.slot(7), Some(1));
        assert_eq!(interner.slot(8), None);
        assert_eq!(interner.id(1), 7);
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn test_default_is_empty() {
        let interner = TaskIdInterner::default();
        assert!(interner.is_empty());
    }
}
