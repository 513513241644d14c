//! The double-ended queue contract shared by every engine in this crate.
//!
//! [`AnyDeque`] is object safe, so callers can hold a `&mut dyn AnyDeque<T>` and stay
//! agnostic to whether a ring buffer or a linked ring sits behind it. The standard
//! library's `VecDeque` implements it as well, which makes it a convenient reference
//! when comparing engines.

use std::collections::VecDeque;

/// Selects which end of a deque an operation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum End {
    /// The logical first element.
    #[default]
    Front,
    /// The logical last element.
    Back,
}

impl End {
    /// Returns the other end.
    #[inline(always)]
    pub fn opposite(self) -> Self {
        match self {
            End::Front => End::Back,
            End::Back => End::Front,
        }
    }
}

/// An object-safe abstraction over double-ended queue engines.
///
/// Every operation is total: reading or removing from an empty deque returns `None`
/// and leaves the deque untouched.
pub trait AnyDeque<T> {
    /// Returns the number of elements in the deque.
    fn len(&self) -> usize;
    /// Returns `true` if the deque contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns a shared reference to the front element, or `None` if empty.
    fn front_element(&self) -> Option<&T>;
    /// Returns a shared reference to the back element, or `None` if empty.
    fn back_element(&self) -> Option<&T>;
    /// Inserts `value` at the chosen end.
    fn enqueue(&mut self, value: T, end: End);
    /// Removes and returns the element at the chosen end, or `None` if empty.
    fn dequeue(&mut self, end: End) -> Option<T>;

    /// Prepends an element to the front.
    fn push_front(&mut self, value: T) {
        self.enqueue(value, End::Front);
    }
    /// Appends an element to the back.
    fn push_back(&mut self, value: T) {
        self.enqueue(value, End::Back);
    }
    /// Removes and returns the front element, or `None` if empty.
    fn pop_front(&mut self) -> Option<T> {
        self.dequeue(End::Front)
    }
    /// Removes and returns the back element, or `None` if empty.
    fn pop_back(&mut self) -> Option<T> {
        self.dequeue(End::Back)
    }
    /// Removes all elements.
    fn clear(&mut self) {
        while self.dequeue(End::Back).is_some() {}
    }
}

impl<T> AnyDeque<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn front_element(&self) -> Option<&T> {
        self.front()
    }
    fn back_element(&self) -> Option<&T> {
        self.back()
    }
    fn enqueue(&mut self, value: T, end: End) {
        match end {
            End::Front => self.push_front(value),
            End::Back => self.push_back(value),
        }
    }
    fn dequeue(&mut self, end: End) -> Option<T> {
        match end {
            End::Front => self.pop_front(),
            End::Back => self.pop_back(),
        }
    }
    fn clear(&mut self) {
        self.clear();
    }
}
