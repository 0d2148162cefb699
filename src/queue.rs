//! Mutable min-priority queue with lazy deletion.
//!
//! This module provides [`PriorityQueue`], a binary min-heap paired with a
//! task-identity index. The index gives O(log n) reprioritization and O(1)
//! removal of an arbitrary queued task, where a plain binary heap would need
//! an O(n) search-and-patch.
//!
//! # Design (lazy deletion)
//!
//! Removing or reprioritizing a task never reorganizes the heap. The task's
//! entry is marked as a tombstone and its index key is dropped; the dead
//! entry keeps its heap position, ordered by its original priority, until it
//! surfaces at the root during a pop that was going to happen anyway and is
//! discarded for free.
//!
//! The heap backbone is a compact `Vec` of entry handles; the entries
//! themselves live in a slot arena. Handles stay valid while sift operations
//! shuffle backbone positions, so the index never chases moving entries.
//!
//! # Invariants
//!
//! - For every backbone position `i` with parent `p = (i - 1) / 2`:
//!   `priority(heap[p]) <= priority(heap[i])`. Tombstones participate under
//!   their original priority.
//! - A task is an index key iff exactly one live entry for it exists; no
//!   task ever has two live entries.
//! - Ties between equal priorities are broken arbitrarily. There is no
//!   sequence counter and no stability guarantee; the comparator is
//!   priority-only.
//!
//! # Complexity
//!
//! | Operation     | Time                      |
//! |---------------|---------------------------|
//! | add_task      | O(log n)                  |
//! | remove_task   | O(1)                      |
//! | pop_task      | O(log n) amortized        |
//! | is_empty, len | O(1)                      |
//!
//! `n` counts entries physically present, live plus tombstoned. A workload
//! that removes or reprioritizes heavily carries tombstones in the backbone
//! until pops reconcile them.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::trace;

use crate::arena::EntryArena;
use crate::entry::{Entry, EntryId};
use crate::error::QueueError;

/// A min-priority queue over caller-supplied task identities.
///
/// `T` is an opaque identity used only for equality and hashing, never
/// interpreted. `P` is any totally ordered priority; lower pops first.
///
/// The queue is single-threaded by design: every operation runs to
/// completion before returning and the structure performs no locking.
/// Callers sharing it across threads are responsible for external
/// synchronization.
///
/// # Examples
///
/// ```
/// use lazyheap::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.add_task("compact", 100);
/// queue.add_task("flush", -1);
/// queue.add_task("compact", 5); // reprioritize, old entry superseded
///
/// assert_eq!(queue.pop_task(), Ok("flush"));
/// assert_eq!(queue.pop_task(), Ok("compact"));
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P> {
    /// Slot storage for every entry, live and tombstoned.
    entries: EntryArena<T, P>,
    /// Compact backbone of entry handles forming the binary min-heap.
    heap: Vec<EntryId>,
    /// Maps each task to its unique live entry.
    index: HashMap<T, EntryId>,
}

impl<T, P> PriorityQueue<T, P> {
    /// Creates a new empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: EntryArena::new(),
            heap: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates a new queue with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: EntryArena::with_capacity(capacity),
            heap: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of live tasks in the queue.
    ///
    /// Tombstones awaiting reconciliation are not counted.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if no live task is queued.
    ///
    /// This reads the index cardinality, which tracks exactly the live
    /// entries, so the check is O(1) even under heavy tombstone
    /// accumulation. (The reference behavior is an O(n) liveness scan; the
    /// live-count reading is a strengthening that changes no other
    /// contract.)
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Drops every entry, live and tombstoned, and the whole index.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.heap.clear();
        self.index.clear();
    }
}

impl<T, P> PriorityQueue<T, P>
where
    T: Eq + Hash + Clone,
    P: Ord,
{
    /// Returns true if the given task has a live entry.
    ///
    /// O(1) via the index; tombstones never satisfy the lookup.
    #[must_use]
    pub fn contains(&self, task: &T) -> bool {
        self.index.contains_key(task)
    }

    /// Adds a new task or updates the priority of an existing one.
    ///
    /// If `task` is already queued this is a reprioritization in either
    /// direction: the old entry is tombstoned through the removal path and a
    /// fresh live entry with the new priority is pushed, so at most one live
    /// entry per task exists afterwards. Never fails; equal priorities are
    /// permitted.
    ///
    /// O(log n), dominated by the sift-up of the replacement entry.
    pub fn add_task(&mut self, task: T, priority: P) {
        if self.index.contains_key(&task) {
            // Superseding half of an update: retire the old entry first.
            let _ = self.remove_task(&task);
            trace!(live = self.index.len(), "reprioritizing queued task");
        }

        let id = self.entries.insert(Entry::new(task.clone(), priority));
        self.index.insert(task, id);

        let pos = self.heap.len();
        self.heap.push(id);
        self.sift_up(pos);
    }

    /// Removes a queued task without touching the heap backbone.
    ///
    /// The task's entry is marked as a tombstone and its index key is
    /// dropped; no sift or reheapify happens here. The dead entry is
    /// physically discarded by a later pop.
    ///
    /// O(1) plus the index deletion.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::TaskNotFound`] when `task` has no live entry.
    /// A failed call leaves the queue exactly as it was.
    pub fn remove_task(&mut self, task: &T) -> Result<(), QueueError> {
        let id = self.index.remove(task).ok_or(QueueError::TaskNotFound)?;
        if let Some(entry) = self.entries.get_mut(id) {
            entry.live = false;
        }
        trace!(
            live = self.index.len(),
            backlog = self.heap.len(),
            "task tombstoned"
        );
        Ok(())
    }

    /// Removes and returns the live task with the lowest priority.
    ///
    /// Tombstoned entries reaching the root are discarded along the way;
    /// this is where deferred removals are finally reconciled with the heap
    /// structure.
    ///
    /// O(log n) amortized; each discarded tombstone was paid for by the
    /// removal that created it.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::QueueEmpty`] when no live task remains.
    /// Tombstones consumed during a failed attempt stay discarded, which is
    /// harmless: the queue was observably empty before and after.
    pub fn pop_task(&mut self) -> Result<T, QueueError> {
        let mut discarded = 0u32;

        while let Some(id) = self.pop_root() {
            let Some(entry) = self.entries.release(id) else {
                continue;
            };

            if entry.live {
                if discarded > 0 {
                    trace!(discarded, backlog = self.heap.len(), "tombstones reconciled");
                }
                self.index.remove(&entry.task);
                return Ok(entry.task);
            }

            discarded += 1;
        }

        if discarded > 0 {
            trace!(discarded, "tombstones reconciled on failed pop");
        }
        Err(QueueError::QueueEmpty)
    }

    /// Pops the root handle off the backbone, restoring the heap shape.
    fn pop_root(&mut self) -> Option<EntryId> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let id = self.heap.pop();

        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        id
    }

    /// Sifts the backbone entry at `pos` up towards the root.
    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.earlier(pos, parent) {
                self.heap.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    /// Sifts the backbone entry at `pos` down towards the leaves.
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = 2 * pos + 2;
            let mut smallest = pos;

            if left < len && self.earlier(left, smallest) {
                smallest = left;
            }
            if right < len && self.earlier(right, smallest) {
                smallest = right;
            }

            if smallest == pos {
                break;
            }

            self.heap.swap(pos, smallest);
            pos = smallest;
        }
    }

    /// Returns true if the entry at backbone position `a` has strictly
    /// lower priority than the one at `b` (min-heap: lower pops first).
    ///
    /// Tombstones compare under their original priority.
    fn earlier(&self, a: usize, b: usize) -> bool {
        let (Some(ea), Some(eb)) = (
            self.entries.get(self.heap[a]),
            self.entries.get(self.heap[b]),
        ) else {
            return false;
        };
        ea.priority < eb.priority
    }
}

impl<T, P> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
