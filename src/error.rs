//! Error types for queue operations.
//!
//! The queue has exactly two failure kinds, raised synchronously to the
//! immediate caller and never recovered internally. They are distinct
//! variants because callers reasonably branch differently on "nothing to
//! remove" versus "nothing to pop".

/// Failure kinds raised by [`PriorityQueue`](crate::PriorityQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum QueueError {
    /// `remove_task` was called for a task with no live entry.
    #[error("task has no live entry in the queue")]
    TaskNotFound,

    /// `pop_task` was called when no live task remained, including the case
    /// where only tombstones were left and all were consumed during the
    /// attempt.
    #[error("pop from an empty priority queue")]
    QueueEmpty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_distinguishable() {
        assert_ne!(QueueError::TaskNotFound, QueueError::QueueEmpty);
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            QueueError::TaskNotFound.to_string(),
            "task has no live entry in the queue"
        );
        assert_eq!(
            QueueError::QueueEmpty.to_string(),
            "pop from an empty priority queue"
        );
    }
}
