//! Heap entry representation and stable entry handles.
//!
//! An [`Entry`] is one queued (or tombstoned) task together with its
//! priority. Entries live in the [`EntryArena`](crate::arena::EntryArena),
//! never in the heap backbone itself, so the handle an index holds stays
//! valid while sift operations shuffle heap positions.

use core::fmt;

/// A stable handle to an entry slot in the arena.
///
/// The generation counter distinguishes a slot's current occupant from a
/// previous occupant whose slot was freed and reused, so a stale handle can
/// never resolve to the wrong entry.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EntryId {
    index: u32,
    generation: u32,
}

impl EntryId {
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub(crate) const fn index(self) -> u32 {
        self.index
    }

    pub(crate) const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryId({}:{})", self.index, self.generation)
    }
}

/// One queued task and its priority.
///
/// `live` distinguishes a normal entry from a tombstone: a tombstone still
/// occupies its heap position and participates in the ordering invariant
/// under its original priority, but it is semantically dead and is discarded
/// when it surfaces at the root during a pop.
#[derive(Debug, Clone)]
pub(crate) struct Entry<T, P> {
    pub(crate) task: T,
    pub(crate) priority: P,
    pub(crate) live: bool,
}

impl<T, P> Entry<T, P> {
    /// Creates a live entry for a freshly added task.
    pub(crate) const fn new(task: T, priority: P) -> Self {
        Self {
            task,
            priority,
            live: true,
        }
    }
}
