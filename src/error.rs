//! Errors raised by the fallible constructors.
//!
//! The deque contract itself is total: reading or removing from an empty deque yields
//! `None`. Only seeded construction can reject its input.

use thiserror::Error;

/// Rejection reasons for [`CircularArrayDeque::with_capacity`] and
/// [`CircularArrayDeque::from_parts`].
///
/// [`CircularArrayDeque::with_capacity`]: crate::CircularArrayDeque::with_capacity
/// [`CircularArrayDeque::from_parts`]: crate::CircularArrayDeque::from_parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DequeError {
    /// The requested capacity is below the engine's floor.
    #[error("capacity {requested} is below the minimum of {minimum}")]
    CapacityTooSmall { requested: usize, minimum: usize },

    /// The seed front index does not address a slot of the buffer.
    #[error("front index {front} is out of range for capacity {capacity}")]
    FrontOutOfRange { front: usize, capacity: usize },

    /// The seed data would fill the buffer completely.
    ///
    /// A full ring is grown on the spot by `enqueue`, so a seeded deque must leave at
    /// least one free slot.
    #[error("{len} elements do not fit in capacity {capacity} (at most {max} allowed)")]
    TooManyElements { len: usize, capacity: usize, max: usize },
}
