//! Circular doubly-linked list stored in an index arena.
//!
//! Nodes live in a `Vec` of slots and refer to each other by [`NodeId`]. This avoids
//! reference cycles between `next` and `prev` while keeping every relink O(1).
//! Vacated slots are threaded onto a free list and reused by later inserts. Once live
//! nodes fill no more than a quarter of the arena, the ring is compacted into a fresh
//! arena of exactly `len` slots, and the whole arena is released when the last node is
//! removed. Compaction renumbers nodes, so [`NodeId`]s do not survive it.
//!
//! ```text
//!           head                      head.prev (back)
//!            |                              |
//!       +--> [a] <--> [b] <--> ... <--> [z] <--+
//!       |                                      |
//!       +--------------------------------------+
//! ```

use core::fmt;
use core::iter::FusedIterator;
use core::mem;

use crate::End;

/// Handle of a node inside a [`CircularLinkedDeque`] arena.
///
/// Valid until the node is removed or the arena compacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A value together with its two ring neighbours.
#[derive(Debug, Clone)]
pub struct CircularNode<T> {
    value: T,
    next: NodeId,
    prev: NodeId,
}

impl<T> CircularNode<T> {
    /// The stored element.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The following node in the ring.
    pub fn next(&self) -> NodeId {
        self.next
    }

    /// The preceding node in the ring.
    pub fn prev(&self) -> NodeId {
        self.prev
    }
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(CircularNode<T>),
    Vacant { next_free: Option<NodeId> },
}

/// A circular doubly-linked list with O(1) insertion and removal at both ends.
///
/// `head` is the front; `head.prev` is the back. Following `next` from `head` exactly
/// `len` times returns to `head`.
#[derive(Clone)]
pub struct CircularLinkedDeque<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<NodeId>,
    head: Option<NodeId>,
    len: usize,
}

impl<T> CircularLinkedDeque<T> {
    /// Arenas at or below this many slots are never compacted.
    const COMPACT_FLOOR: usize = 4;

    /// Creates an empty ring. Does not allocate.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            head: None,
            len: 0,
        }
    }

    /// Returns the number of nodes in the ring.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the ring has no nodes.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Handle of the front node, or `None` if empty.
    #[inline(always)]
    pub fn head_id(&self) -> Option<NodeId> {
        self.head
    }

    /// Returns the node behind `id`, or `None` if the handle is stale.
    pub fn node(&self, id: NodeId) -> Option<&CircularNode<T>> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Returns the front value, or `None` if empty.
    pub fn head(&self) -> Option<&T> {
        self.head.map(|id| &self.linked(id).value)
    }

    /// Returns the back value (`head.prev`), or `None` if empty.
    pub fn tail(&self) -> Option<&T> {
        let head = self.head?;
        Some(&self.linked(self.linked(head).prev).value)
    }

    /// Returns an iterator walking `next` from the head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.len,
        }
    }

    /// Links a new node holding `value` into the ring.
    ///
    /// The node goes between the back and the head. At [`End::Front`] it then becomes
    /// the head.
    pub fn insert(&mut self, value: T, end: End) {
        let id = self.vacant_id();
        match self.head {
            None => {
                self.occupy(id, CircularNode { value, next: id, prev: id });
                self.head = Some(id);
            }
            Some(head) => {
                let tail = self.linked(head).prev;
                self.occupy(id, CircularNode { value, next: head, prev: tail });
                self.linked_mut(tail).next = id;
                self.linked_mut(head).prev = id;
                if end == End::Front {
                    self.head = Some(id);
                }
            }
        }
        self.len += 1;
    }

    /// Unlinks the node at `end` and returns its value. Does nothing on an empty ring.
    pub fn remove(&mut self, end: End) -> Option<T> {
        let head = self.head?;
        let target = match end {
            End::Front => head,
            End::Back => self.linked(head).prev,
        };
        let node = self.vacate(target);
        self.len -= 1;

        if self.len == 0 {
            self.head = None;
            self.slots.clear();
            self.free_head = None;
        } else {
            self.linked_mut(node.prev).next = node.next;
            self.linked_mut(node.next).prev = node.prev;
            if target == head {
                self.head = Some(node.next);
            }
            if self.slots.len() > Self::COMPACT_FLOOR && self.slots.len() > 4 * self.len {
                self.compact();
            }
        }
        Some(node.value)
    }

    /// Drops every node and releases the arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.head = None;
        self.len = 0;
    }

    /// Rebuilds the arena with only the live nodes, laid out in ring order from the
    /// head. Drops the free list.
    #[inline(never)]
    fn compact(&mut self) {
        let Some(head) = self.head else {
            return;
        };
        let len = self.len;
        let mut old = mem::take(&mut self.slots);
        let mut slots = Vec::with_capacity(len);
        let mut curr = head;
        for i in 0..len {
            let vacant = Slot::Vacant { next_free: None };
            let node = match mem::replace(&mut old[curr.0], vacant) {
                Slot::Occupied(node) => node,
                Slot::Vacant { .. } => unreachable!("ring links point at a vacant slot"),
            };
            curr = node.next;
            slots.push(Slot::Occupied(CircularNode {
                value: node.value,
                next: NodeId((i + 1) % len),
                prev: NodeId((i + len - 1) % len),
            }));
        }
        self.slots = slots;
        self.head = Some(NodeId(0));
        self.free_head = None;

        log::trace!("compacted node arena from {} to {len} slots", old.len());
    }

    /// Slot the next `occupy` call must fill.
    fn vacant_id(&self) -> NodeId {
        self.free_head.unwrap_or(NodeId(self.slots.len()))
    }

    fn occupy(&mut self, id: NodeId, node: CircularNode<T>) {
        if id.0 == self.slots.len() {
            self.slots.push(Slot::Occupied(node));
            return;
        }
        let slot = &mut self.slots[id.0];
        if let Slot::Vacant { next_free } = *slot {
            self.free_head = next_free;
        } else {
            unreachable!("free list points at a live node");
        }
        *slot = Slot::Occupied(node);
    }

    fn vacate(&mut self, id: NodeId) -> CircularNode<T> {
        let vacant = Slot::Vacant { next_free: self.free_head };
        match mem::replace(&mut self.slots[id.0], vacant) {
            Slot::Occupied(node) => {
                self.free_head = Some(id);
                node
            }
            Slot::Vacant { .. } => unreachable!("ring links point at a vacant slot"),
        }
    }

    /// Node reachable through the ring; ring links never point at a vacant slot.
    #[inline(always)]
    fn linked(&self, id: NodeId) -> &CircularNode<T> {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("ring links point at a vacant slot"),
        }
    }

    #[inline(always)]
    fn linked_mut(&mut self, id: NodeId) -> &mut CircularNode<T> {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("ring links point at a vacant slot"),
        }
    }
}

/// Iterator over a [`CircularLinkedDeque`], from head to back.
pub struct Iter<'a, T> {
    list: &'a CircularLinkedDeque<T>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.linked(self.next?);
        self.next = Some(node.next);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a CircularLinkedDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for CircularLinkedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Two rings are equal when they hold equal values in the same order from the head.
impl<T: PartialEq> PartialEq for CircularLinkedDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for CircularLinkedDeque<T> {}

impl<T: fmt::Display> fmt::Display for CircularLinkedDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "<= ({value}) =>")?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularLinkedDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
