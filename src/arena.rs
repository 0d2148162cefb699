//! Slot storage for heap entries.
//!
//! The heap backbone is a compact `Vec` of [`EntryId`] handles; the entries
//! themselves live here. Slots freed when a tombstone is discarded are
//! tracked in a free list and reused by later insertions, with a generation
//! counter per slot so a reused slot never answers for a stale handle.
//!
//! No unsafe code; everything relies on bounds checks and generation
//! validation.

use crate::entry::{Entry, EntryId};

#[derive(Debug, Clone)]
enum Slot<T, P> {
    Occupied { entry: Entry<T, P>, generation: u32 },
    Vacant { next_free: Option<u32>, generation: u32 },
}

/// Free-list slot store owning every entry of a queue, live and tombstoned.
#[derive(Debug, Clone)]
pub(crate) struct EntryArena<T, P> {
    slots: Vec<Slot<T, P>>,
    free_head: Option<u32>,
    len: usize,
}

impl<T, P> EntryArena<T, P> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Number of occupied slots (live entries plus tombstones).
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Stores an entry, reusing a freed slot when one is available.
    pub(crate) fn insert(&mut self, entry: Entry<T, P>) -> EntryId {
        self.len += 1;

        if let Some(free_index) = self.free_head {
            let slot = &mut self.slots[free_index as usize];
            match slot {
                Slot::Vacant {
                    next_free,
                    generation,
                } => {
                    let generation = *generation;
                    self.free_head = *next_free;
                    *slot = Slot::Occupied { entry, generation };
                    EntryId::new(free_index, generation)
                }
                Slot::Occupied { .. } => unreachable!("free list pointed to occupied slot"),
            }
        } else {
            let index = u32::try_from(self.slots.len()).expect("entry arena overflow");
            self.slots.push(Slot::Occupied {
                entry,
                generation: 0,
            });
            EntryId::new(index, 0)
        }
    }

    /// Frees the slot behind `id` and returns its entry.
    ///
    /// Returns `None` when the handle is stale or out of range.
    pub(crate) fn release(&mut self, id: EntryId) -> Option<Entry<T, P>> {
        let slot = self.slots.get_mut(id.index() as usize)?;

        match slot {
            Slot::Occupied { generation, .. } if *generation == id.generation() => {
                let freed = core::mem::replace(
                    slot,
                    Slot::Vacant {
                        next_free: self.free_head,
                        generation: id.generation().wrapping_add(1),
                    },
                );
                self.free_head = Some(id.index());
                self.len -= 1;

                match freed {
                    Slot::Occupied { entry, .. } => Some(entry),
                    Slot::Vacant { .. } => unreachable!(),
                }
            }
            _ => None,
        }
    }

    pub(crate) fn get(&self, id: EntryId) -> Option<&Entry<T, P>> {
        match self.slots.get(id.index() as usize)? {
            Slot::Occupied { entry, generation } if *generation == id.generation() => Some(entry),
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, id: EntryId) -> Option<&mut Entry<T, P>> {
        match self.slots.get_mut(id.index() as usize)? {
            Slot::Occupied { entry, generation } if *generation == id.generation() => Some(entry),
            _ => None,
        }
    }

    /// Drops every slot, live and tombstoned.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}

impl<T, P> Default for EntryArena<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(task: u32, priority: i32) -> Entry<u32, i32> {
        Entry::new(task, priority)
    }

    #[test]
    fn insert_and_get() {
        let mut arena = EntryArena::new();
        let id = arena.insert(entry(7, 3));
        assert_eq!(arena.len(), 1);

        let stored = arena.get(id).unwrap();
        assert_eq!(stored.task, 7);
        assert_eq!(stored.priority, 3);
        assert!(stored.live);
    }

    #[test]
    fn release_frees_and_reuses_slot() {
        let mut arena = EntryArena::new();
        let first = arena.insert(entry(1, 10));
        let second = arena.insert(entry(2, 20));

        let freed = arena.release(first).unwrap();
        assert_eq!(freed.task, 1);
        assert_eq!(arena.len(), 1);

        let third = arena.insert(entry(3, 30));
        assert_eq!(third.index(), first.index());
        assert_ne!(third.generation(), first.generation());

        assert_eq!(arena.get(second).unwrap().task, 2);
        assert_eq!(arena.get(third).unwrap().task, 3);
    }

    #[test]
    fn stale_handle_never_resolves() {
        let mut arena = EntryArena::new();
        let old = arena.insert(entry(1, 10));
        arena.release(old);
        let new = arena.insert(entry(2, 20));

        assert_eq!(old.index(), new.index());
        assert!(arena.get(old).is_none());
        assert!(arena.release(old).is_none());
        assert_eq!(arena.get(new).unwrap().task, 2);
    }

    #[test]
    fn tombstone_flag_survives_storage() {
        let mut arena = EntryArena::new();
        let id = arena.insert(entry(1, 10));
        arena.get_mut(id).unwrap().live = false;
        assert!(!arena.get(id).unwrap().live);
        assert_eq!(arena.len(), 1, "tombstones still occupy their slot");
    }

    #[test]
    fn clear_drops_everything() {
        let mut arena = EntryArena::new();
        let id = arena.insert(entry(1, 10));
        arena.insert(entry(2, 20));
        arena.clear();
        assert_eq!(arena.len(), 0);
        assert!(arena.get(id).is_none());
    }
}
