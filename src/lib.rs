//! Lazyheap: a mutable min-priority queue with lazy deletion.
//!
//! # Overview
//!
//! A textbook binary heap supports insert and extract-min, but not changing
//! the priority of a queued item or removing an arbitrary item by identity
//! without an O(n) search. Lazyheap pairs the heap with a task-identity
//! index and uses tombstoning: removal marks an entry dead and forgets it in
//! the index, and the dead entry is physically evicted only when it surfaces
//! at the heap root during a later pop.
//!
//! # Core Guarantees
//!
//! - **One live entry per task**: re-adding a queued task supersedes its old
//!   priority; the old entry becomes a tombstone
//! - **Sub-linear mutation**: reprioritization is O(log n), arbitrary
//!   removal is O(1) plus the index deletion — never an O(n) heap patch
//! - **Min-first pops**: `pop_task` always returns a live task of minimum
//!   priority; ties are broken arbitrarily (no stability)
//! - **Typed failures**: "nothing to remove" and "nothing to pop" are
//!   distinct [`QueueError`] kinds
//! - **No unsafe code**: the index holds generation-checked slot handles,
//!   never references into heap storage
//!
//! # Example
//!
//! ```
//! use lazyheap::{PriorityQueue, QueueError};
//!
//! let mut queue = PriorityQueue::new();
//! queue.add_task("checkpoint", 100);
//! queue.add_task("serve", 0);
//! queue.add_task("checkpoint", -1); // reprioritize
//! queue.remove_task(&"serve")?;
//!
//! assert_eq!(queue.pop_task(), Ok("checkpoint"));
//! assert_eq!(queue.pop_task(), Err(QueueError::QueueEmpty));
//! # Ok::<(), QueueError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`queue`]: the priority queue itself (heap backbone plus index)
//! - `entry`: entry records, tombstone flag, stable entry handles
//! - `arena`: slot storage backing the entry handles
//! - [`error`]: the two-kind failure taxonomy

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod arena;
mod entry;
pub mod error;
pub mod queue;

pub use error::QueueError;
pub use queue::PriorityQueue;
