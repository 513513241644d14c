//! [`AnyDeque`] front-end for [`CircularLinkedDeque`].

use core::fmt;

use crate::lists::circular_list::{CircularLinkedDeque, Iter};
use crate::{AnyDeque, End};

/// A double-ended queue backed by a circular doubly-linked ring.
///
/// Behaves exactly like [`CircularArrayDeque`](crate::CircularArrayDeque) for every
/// sequence of operations, but has no buffer to grow: each insert links one node into
/// the ring and each removal unlinks one.
///
/// # Example
/// ```rust
/// use ring_deques::{End, LinkedDequeAdapter};
///
/// let mut d = LinkedDequeAdapter::new();
/// d.enqueue(1, End::Back);
/// d.enqueue(2, End::Back);
/// d.enqueue(3, End::Front);
///
/// assert_eq!(d.front_element(), Some(&3));
/// assert_eq!(d.back_element(), Some(&2));
/// assert_eq!(d.dequeue(End::Back), Some(2));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LinkedDequeAdapter<T> {
    list: CircularLinkedDeque<T>,
}

impl<T> AnyDeque<T> for LinkedDequeAdapter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
    fn front_element(&self) -> Option<&T> {
        self.front_element()
    }
    fn back_element(&self) -> Option<&T> {
        self.back_element()
    }
    fn enqueue(&mut self, value: T, end: End) {
        self.enqueue(value, end);
    }
    fn dequeue(&mut self, end: End) -> Option<T> {
        self.dequeue(end)
    }
    fn clear(&mut self) {
        self.list.clear();
    }
}

impl<T> LinkedDequeAdapter<T> {
    /// Creates an empty deque.
    pub fn new() -> Self {
        Self {
            list: CircularLinkedDeque::new(),
        }
    }

    /// Returns the number of elements in the deque.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the deque contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// The head's value, or `None` if empty.
    #[inline(always)]
    pub fn front_element(&self) -> Option<&T> {
        self.list.head()
    }

    /// The value of `head.prev`, or `None` if empty.
    #[inline(always)]
    pub fn back_element(&self) -> Option<&T> {
        self.list.tail()
    }

    /// Inserts `value` at `end`.
    pub fn enqueue(&mut self, value: T, end: End) {
        self.list.insert(value, end);
    }

    /// Removes the node at `end` and hands back its value. Returns `None` if empty.
    pub fn dequeue(&mut self, end: End) -> Option<T> {
        self.list.remove(end)
    }

    /// Returns a front-to-back iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }

    /// The underlying ring.
    pub fn as_list(&self) -> &CircularLinkedDeque<T> {
        &self.list
    }
}

impl<T> From<CircularLinkedDeque<T>> for LinkedDequeAdapter<T> {
    fn from(list: CircularLinkedDeque<T>) -> Self {
        Self { list }
    }
}

impl<T> Default for LinkedDequeAdapter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a LinkedDequeAdapter<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedDequeAdapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, f)
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedDequeAdapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.list, f)
    }
}

impl<T> Extend<T> for LinkedDequeAdapter<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value, End::Back);
        }
    }
}

impl<T> FromIterator<T> for LinkedDequeAdapter<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lists::circular_list::tests::assert_ring_invariants;

    // ─── basic ops ────────────────────────────────────────────────────────────
    #[test]
    fn test_adapter_empty() {
        let mut d: LinkedDequeAdapter<i32> = LinkedDequeAdapter::new();
        assert!(d.is_empty());
        assert_eq!(d.len(), 0);
        assert_eq!(d.front_element(), None);
        assert_eq!(d.back_element(), None);
        assert_eq!(d.dequeue(End::Front), None);
        assert_eq!(d.dequeue(End::Back), None);
        assert!(d.is_empty());
    }

    #[test]
    fn test_adapter_mixed_ends_example() {
        let mut d = LinkedDequeAdapter::new();
        d.enqueue(1, End::Back);
        d.enqueue(2, End::Back);
        d.enqueue(3, End::Front);
        assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(d.dequeue(End::Front), Some(3));
        assert_eq!(d.dequeue(End::Back), Some(2));
        assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![1]);
        assert_ring_invariants(d.as_list());
    }

    #[test]
    fn test_adapter_fifo_and_lifo() {
        let mut queue = LinkedDequeAdapter::new();
        let mut stack = LinkedDequeAdapter::new();
        for i in 0..40 {
            queue.enqueue(i, End::Back);
            stack.enqueue(i, End::Front);
        }
        for i in 0..40 {
            assert_eq!(queue.dequeue(End::Front), Some(i));
            assert_eq!(stack.dequeue(End::Front), Some(39 - i));
        }
        assert!(queue.is_empty() && stack.is_empty());
    }

    #[test]
    fn test_adapter_round_trip_opposite_end() {
        let mut d: LinkedDequeAdapter<u8> = (0..20).collect();
        let out: Vec<_> = std::iter::from_fn(|| d.dequeue(End::Front)).collect();
        assert_eq!(out, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_adapter_dequeue_back_reads_head_prev() {
        let mut d: LinkedDequeAdapter<char> = "abc".chars().collect();
        assert_eq!(d.back_element(), Some(&'c'));
        assert_eq!(d.dequeue(End::Back), Some('c'));
        assert_eq!(d.back_element(), Some(&'b'));
        assert_eq!(d.front_element(), Some(&'a'));
        assert_ring_invariants(d.as_list());
    }

    // ─── AnyDeque dispatch ────────────────────────────────────────────────────
    #[test]
    fn test_adapter_any_deque_trait() {
        let mut d: LinkedDequeAdapter<i32> = LinkedDequeAdapter::new();
        let any: &mut dyn AnyDeque<i32> = &mut d;
        any.push_back(10);
        any.push_front(5);
        assert_eq!(any.len(), 2);
        assert_eq!(any.front_element(), Some(&5));
        assert_eq!(any.back_element(), Some(&10));
        any.clear();
        assert!(any.is_empty());
        assert!(d.as_list().head_id().is_none());
    }

    // ─── traits ───────────────────────────────────────────────────────────────
    #[test]
    fn test_adapter_traits() {
        let a: LinkedDequeAdapter<i32> = vec![1, 2, 3].into_iter().collect();
        let mut b = a.clone();
        assert_eq!(a, b);
        b.dequeue(End::Back);
        assert_ne!(a, b);
        assert_eq!(a.to_string(), "<= (1) =><= (2) =><= (3) =>");
        assert_eq!(format!("{b:?}"), "[1, 2]");

        let mut list = CircularLinkedDeque::new();
        list.insert(7, End::Back);
        let wrapped = LinkedDequeAdapter::from(list);
        assert_eq!(wrapped.front_element(), Some(&7));
    }
}
