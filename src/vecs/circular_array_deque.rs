//! Double-ended queue over a resizing circular buffer.
//!
//! # Ring layout
//! The buffer holds `capacity` slots. `front` and `back` are physical slot indices that
//! move with modular arithmetic: inserting at the front steps `front` backwards,
//! inserting at the back steps `back` forwards. Both are unset while the deque is empty.
//!
//! # Resize policy
//! ```text
//! enqueue: size += 1;  if size == capacity              -> grow   (capacity * 2)
//! dequeue: size -= 1;  if size <= capacity / 4
//!                      and capacity / 2 >= MIN_CAPACITY -> shrink (capacity / 2)
//! ```
//! A resize "unrolls" the ring into a fresh buffer so the front lands at slot 0 and the
//! back at slot `size - 1`. The gap between the full trigger and the quarter trigger
//! keeps the structure from bouncing between growing and shrinking on alternating
//! operations, so each operation is amortized O(1).
//!
//! The buffer grows the moment it becomes full. A full ring would otherwise have
//! `front == back + 1`, exactly like an empty one.

use core::fmt;
use core::iter::FusedIterator;

use crate::{AnyDeque, DequeError, End};

/// Physical indices of the two logical ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Ends {
    front: usize,
    back: usize,
}

/// A double-ended queue backed by a circular buffer that doubles when full and halves
/// when a quarter full, never dropping below [`MIN_CAPACITY`](Self::MIN_CAPACITY) slots.
///
/// # Example
/// ```rust
/// use ring_deques::{CircularArrayDeque, End};
///
/// let mut d = CircularArrayDeque::new();
/// d.enqueue(1, End::Back);
/// d.enqueue(2, End::Back);
/// d.enqueue(3, End::Front);
///
/// assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
/// assert_eq!(d.dequeue(End::Front), Some(3));
/// assert_eq!(d.dequeue(End::Back), Some(2));
/// assert_eq!(d.len(), 1);
/// ```
#[derive(Clone)]
pub struct CircularArrayDeque<T> {
    slots: Box<[Option<T>]>,
    len: usize,
    ends: Option<Ends>,
}

impl<T> AnyDeque<T> for CircularArrayDeque<T> {
    fn len(&self) -> usize {
        self.len
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
}

impl<T> CircularArrayDeque<T> {
    /// The smallest capacity the buffer is ever allocated with.
    pub const MIN_CAPACITY: usize = 4;

    /// Creates an empty deque with [`MIN_CAPACITY`](Self::MIN_CAPACITY) slots.
    pub fn new() -> Self {
        Self {
            slots: Self::empty_slots(Self::MIN_CAPACITY),
            len: 0,
            ends: None,
        }
    }

    /// Creates an empty deque with `capacity` slots.
    ///
    /// # Errors
    /// [`DequeError::CapacityTooSmall`] if `capacity < MIN_CAPACITY`.
    pub fn with_capacity(capacity: usize) -> Result<Self, DequeError> {
        Self::check_capacity(capacity)?;
        Ok(Self {
            slots: Self::empty_slots(capacity),
            len: 0,
            ends: None,
        })
    }

    /// Creates a deque whose ring already holds `data`, with the first element at
    /// physical slot `front` and the rest following it (wrapping past the end of the
    /// buffer if needed).
    ///
    /// An empty `data` produces an empty deque; `front` is still validated.
    ///
    /// # Errors
    /// - [`DequeError::CapacityTooSmall`] if `capacity < MIN_CAPACITY`.
    /// - [`DequeError::FrontOutOfRange`] if `front >= capacity`.
    /// - [`DequeError::TooManyElements`] if `data` would leave no free slot.
    pub fn from_parts<I>(data: I, front: usize, capacity: usize) -> Result<Self, DequeError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::check_capacity(capacity)?;
        if front >= capacity {
            log::debug!("rejecting seed front {front} for capacity {capacity}");
            return Err(DequeError::FrontOutOfRange { front, capacity });
        }
        let data: Vec<T> = data.into_iter().collect();
        if data.len() >= capacity {
            log::debug!("rejecting {} seed elements for capacity {capacity}", data.len());
            return Err(DequeError::TooManyElements {
                len: data.len(),
                capacity,
                max: capacity - 1,
            });
        }

        let len = data.len();
        let mut slots = Self::empty_slots(capacity);
        for (i, value) in data.into_iter().enumerate() {
            slots[(front + i) % capacity] = Some(value);
        }
        let ends = (len > 0).then(|| Ends {
            front,
            back: (front + len - 1) % capacity,
        });
        Ok(Self { slots, len, ends })
    }

    fn check_capacity(capacity: usize) -> Result<(), DequeError> {
        if capacity < Self::MIN_CAPACITY {
            log::debug!("rejecting capacity {capacity}");
            return Err(DequeError::CapacityTooSmall {
                requested: capacity,
                minimum: Self::MIN_CAPACITY,
            });
        }
        Ok(())
    }

    fn empty_slots(capacity: usize) -> Box<[Option<T>]> {
        (0..capacity).map(|_| None).collect()
    }

    /// Returns the number of elements currently in the deque.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Physical slot of the front element, or `None` if empty.
    #[inline(always)]
    pub fn front_index(&self) -> Option<usize> {
        self.ends.map(|e| e.front)
    }

    /// Physical slot of the back element, or `None` if empty.
    #[inline(always)]
    pub fn back_index(&self) -> Option<usize> {
        self.ends.map(|e| e.back)
    }

    /// Returns a shared reference to the front element, or `None` if empty.
    #[inline(always)]
    pub fn front_element(&self) -> Option<&T> {
        self.slots[self.ends?.front].as_ref()
    }

    /// Returns a shared reference to the back element, or `None` if empty.
    #[inline(always)]
    pub fn back_element(&self) -> Option<&T> {
        self.slots[self.ends?.back].as_ref()
    }

    /// Returns the element at logical `index` (0 is the front), or `None`.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let front = self.ends?.front;
        self.slots[self.wrap_add(front, index)].as_ref()
    }

    /// Returns a front-to-back iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            head: 0,
            tail: self.len,
        }
    }

    #[inline(always)]
    fn wrap_add(&self, idx: usize, add: usize) -> usize {
        (idx + add) % self.capacity()
    }

    #[inline(always)]
    fn wrap_sub(&self, idx: usize, sub: usize) -> usize {
        let capacity = self.capacity();
        (idx + capacity - sub % capacity) % capacity
    }

    /// Inserts `value` at `end`, doubling the buffer if it becomes full.
    pub fn enqueue(&mut self, value: T, end: End) {
        let slot = match self.ends {
            None => {
                self.ends = Some(Ends { front: 0, back: 0 });
                0
            }
            Some(Ends { front, back }) => {
                let (front, back) = match end {
                    End::Front => (self.wrap_sub(front, 1), back),
                    End::Back => (front, self.wrap_add(back, 1)),
                };
                self.ends = Some(Ends { front, back });
                match end {
                    End::Front => front,
                    End::Back => back,
                }
            }
        };
        debug_assert!(self.slots[slot].is_none(), "enqueue overwrote a live slot");
        self.slots[slot] = Some(value);
        self.len += 1;

        if self.len == self.capacity() {
            self.grow();
        }
    }

    /// Removes and returns the element at `end`, halving the buffer once it drops to a
    /// quarter full. Returns `None` without touching the deque if it is empty.
    pub fn dequeue(&mut self, end: End) -> Option<T> {
        let Ends { front, back } = self.ends?;
        let slot = match end {
            End::Front => {
                self.ends = Some(Ends {
                    front: self.wrap_add(front, 1),
                    back,
                });
                front
            }
            End::Back => {
                self.ends = Some(Ends {
                    front,
                    back: self.wrap_sub(back, 1),
                });
                back
            }
        };
        let value = self.slots[slot].take();
        debug_assert!(value.is_some(), "dequeue read an unused slot");
        self.len -= 1;
        if self.len == 0 {
            self.ends = None;
        }

        let capacity = self.capacity();
        if self.len <= capacity / 4 && capacity / 2 >= Self::MIN_CAPACITY {
            self.shrink();
        }
        value
    }

    /// Doubles the capacity.
    #[inline(never)]
    fn grow(&mut self) {
        self.relocate(self.capacity() * 2);
    }

    /// Halves the capacity, never going below `MIN_CAPACITY`.
    #[inline(never)]
    fn shrink(&mut self) {
        self.relocate((self.capacity() / 2).max(Self::MIN_CAPACITY));
    }

    /// Moves every element into a fresh buffer of `new_capacity` slots, unrolled so the
    /// front sits at slot 0.
    fn relocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity > self.len);
        debug_assert!(new_capacity >= Self::MIN_CAPACITY);

        let old_capacity = self.capacity();
        let mut slots = Self::empty_slots(new_capacity);
        if let Some(Ends { front, .. }) = self.ends {
            let mut walk = front;
            for slot in slots.iter_mut().take(self.len) {
                *slot = self.slots[walk].take();
                walk = (walk + 1) % old_capacity;
            }
            self.ends = Some(Ends {
                front: 0,
                back: self.len - 1,
            });
        }
        self.slots = slots;

        log::trace!(
            "resized ring from {old_capacity} to {new_capacity} slots ({} elements)",
            self.len
        );
    }
}

/// Front-to-back iterator over a [`CircularArrayDeque`].
pub struct Iter<'a, T> {
    deque: &'a CircularArrayDeque<T>,
    head: usize,
    tail: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.head == self.tail {
            return None;
        }
        let item = self.deque.get(self.head);
        self.head += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tail - self.head;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        self.tail -= 1;
        self.deque.get(self.tail)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a CircularArrayDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the physical buffer, tagging the front slot `(F)` and the back slot `(B)`.
/// Unused slots render as `_`.
impl<T: fmt::Display> fmt::Display for CircularArrayDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(Ends { front, back }) = self.ends else {
            return f.write_str("CircularArrayDeque <empty>");
        };
        f.write_str("CircularArrayDeque <")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            match slot {
                Some(value) => write!(f, "{value}")?,
                None => f.write_str("_")?,
            }
            if i == front {
                f.write_str("(F)")?;
            } else if i == back {
                f.write_str("(B)")?;
            }
        }
        f.write_str(">")
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularArrayDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for CircularArrayDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for CircularArrayDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for CircularArrayDeque<T> {}

impl<T> Extend<T> for CircularArrayDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value, End::Back);
        }
    }
}

impl<T> FromIterator<T> for CircularArrayDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}
