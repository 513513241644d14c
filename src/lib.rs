//! # Ring Deques
//!
//! Two interchangeable double-ended queue engines behind one contract, [`AnyDeque`].
//!
//! * [`CircularArrayDeque`]: a ring buffer addressed with modular indices. It doubles when
//!   it becomes full and halves once it drops to a quarter full, never going below four
//!   slots. Amortized O(1) at both ends.
//! * [`LinkedDequeAdapter`]: a circular doubly-linked ring ([`CircularLinkedDeque`]) of
//!   nodes. O(1) at both ends with no resize step.
//!
//! Both engines return the same values for any interleaving of operations, so callers can
//! swap one for the other without a behavioural change. Reading or removing from an empty
//! deque is not an error: it yields `None`.
//!
//! ## Features
//!
//! * `linked` (default): the linked engine and its adapter.
//!
//! ## Examples
//!
//! ### Sliding window over either engine
//!
//! ```rust
//! use ring_deques::{AnyDeque, CircularArrayDeque, End};
//!
//! fn window_sums(data: &[u32], width: usize, window: &mut dyn AnyDeque<u32>) -> Vec<u32> {
//!     let mut sums = Vec::new();
//!     let mut sum = 0;
//!     for &x in data {
//!         window.enqueue(x, End::Back);
//!         sum += x;
//!         if window.len() > width {
//!             sum -= window.dequeue(End::Front).unwrap_or(0);
//!         }
//!         if window.len() == width {
//!             sums.push(sum);
//!         }
//!     }
//!     sums
//! }
//!
//! let mut ring = CircularArrayDeque::<u32>::new();
//! assert_eq!(window_sums(&[1, 2, 3, 4, 5], 3, &mut ring), vec![6, 9, 12]);
//! ```
//!
//! ### Growth
//!
//! ```rust
//! use ring_deques::{CircularArrayDeque, End};
//!
//! let mut d = CircularArrayDeque::new();
//! for i in 0..4 {
//!     d.enqueue(i, End::Back);
//! }
//! // Full at four elements, so the ring doubled.
//! assert_eq!(d.capacity(), 8);
//! assert_eq!(d.front_index(), Some(0));
//! ```

// --- Module Declarations ---

pub mod deque;
pub mod error;
#[cfg(feature = "linked")]
pub mod lists;
pub mod vecs;

// --- Re-exports ---

pub use deque::{AnyDeque, End};
pub use error::DequeError;
#[cfg(feature = "linked")]
pub use lists::circular_list::{CircularLinkedDeque, CircularNode, NodeId};
#[cfg(feature = "linked")]
pub use lists::linked_deque::LinkedDequeAdapter;
pub use vecs::circular_array_deque::CircularArrayDeque;
