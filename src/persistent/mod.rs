//! Persistent (immutable) sequence structures built on finger trees.
//!
//! This module provides a general-purpose, annotated 2-3 finger tree and two
//! specializations of it:
//!
//! - [`FingerTree`]: Persistent sequence annotated with a monoidal measurement
//! - [`Sequence`]: Persistent indexed sequence (finger tree measured by size)
//! - [`PriorityQueue`]: Persistent max-priority queue (finger tree measured by
//!   the largest priority)
//!
//! # Structural Sharing
//!
//! Every operation returns a new version of the structure and leaves the
//! original untouched. Unchanged digits, nodes and whole sub-trees are shared
//! between versions by reference counting, so a push only allocates the
//! spine it rewrites.
//!
//! # Examples
//!
//! ## `FingerTree`
//!
//! ```rust
//! use lambars_fingertree::persistent::{FingerTree, Size};
//! use lambars_fingertree::typeclass::Sum;
//!
//! let tree: FingerTree<char, Size> = "finger".chars().collect();
//! assert_eq!(tree.measure(), Sum::new(6));
//!
//! // Split before the element whose running count first exceeds 2
//! let (left, right) = tree.split(|count| count.0 > 2).into_parts();
//! assert_eq!(left.iter().collect::<String>(), "fi");
//! assert_eq!(right.iter().collect::<String>(), "nger");
//! ```
//!
//! ## `Sequence`
//!
//! ```rust
//! use lambars_fingertree::persistent::Sequence;
//!
//! let sequence: Sequence<i32> = (1..=5).collect();
//! let inserted = sequence.insert(2, 99).unwrap();
//!
//! assert_eq!(sequence.at(2), Ok(&3));   // Original unchanged
//! assert_eq!(inserted.at(2), Ok(&99));  // New version
//! ```
//!
//! ## `PriorityQueue`
//!
//! ```rust
//! use lambars_fingertree::persistent::PriorityQueue;
//!
//! let queue = PriorityQueue::new().push(2, "low").push(9, "high");
//! let (rest, (priority, element)) = queue.pop().unwrap();
//!
//! assert_eq!((priority, element), (9, "high"));
//! assert_eq!(rest.len(), 1);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled (default), this is `std::sync::Arc`,
/// which lets trees cross thread boundaries and have their annotations
/// forced concurrently.
///
/// When the `arc` feature is disabled, this is `std::rc::Rc`, which is
/// faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod fingertree;
mod priority_queue;
mod sequence;

pub use fingertree::FingerTree;
pub use fingertree::FingerTreeError;
pub use fingertree::FingerTreeIntoIterator;
pub use fingertree::FingerTreeIterator;
pub use fingertree::Measured;
pub use fingertree::Result;
pub use fingertree::Size;
pub use fingertree::SplitPair;
pub use fingertree::Unmeasured;
pub use fingertree::View;
pub use priority_queue::MaxPriority;
pub use priority_queue::PriorityQueue;
pub use priority_queue::PriorityQueueIterator;
pub use sequence::Sequence;
pub use sequence::SequenceIntoIterator;
pub use sequence::SequenceIterator;
