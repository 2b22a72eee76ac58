//! Array-Backed Binary Min-Heap Priority Queues
//!
//! This crate provides mutable binary min-heaps for use as priority queues by
//! graph and pathfinding algorithms that need efficient extract-minimum and
//! arbitrary-element removal.
//!
//! # Features
//!
//! - **`BinaryHeap`**: the baseline array-backed heap; O(log n) insert and
//!   delete-min, O(n) remove-by-equality via a linear scan
//! - **`IndexedBinaryHeap`**: the same heap plus a value-to-indices map,
//!   bringing remove-by-equality down to O(log n) and membership to O(1)
//! - **`PriorityQueue`**: the common trait, with a sorted-drain convenience
//!   built on defensive copies
//!
//! All queues are min-heaps over the element's own [`Ord`]; the fallible
//! operations return [`HeapError`] instead of panicking, and failures never
//! mutate the queue.
//!
//! # Example
//!
//! ```rust
//! use indexed_binary_heap::binary::BinaryHeap;
//! use indexed_binary_heap::PriorityQueue;
//!
//! let mut queue = BinaryHeap::new();
//! queue.insert(5);
//! queue.insert(3);
//! queue.insert(8);
//!
//! assert_eq!(queue.find_min(), Ok(&3));
//! assert_eq!(queue.delete_min(), Ok(3));
//! assert_eq!(queue.len(), 2);
//! ```

pub mod binary;
pub mod indexed;
pub mod traits;

// Re-export the trait and error type for convenience
pub use traits::{HeapError, PriorityQueue};
