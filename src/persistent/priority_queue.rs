//! Persistent (immutable) max-priority queue.
//!
//! [`PriorityQueue`] is a [`FingerTree`] of `(priority, element)` pairs
//! measured by [`MaxPriority`]: every annotation records how many pairs it
//! covers and the largest priority among them. The highest-priority pair is
//! found by splitting where the running maximum first reaches the maximum of
//! the whole tree, so pairs of equal priority leave in insertion order.

use std::fmt;
use std::iter::FromIterator;

use super::fingertree::{FingerTree, FingerTreeIterator, Measured};
use crate::typeclass::{Max, Sum};

/// Measures a `(priority, element)` pair by a count of one and its priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MaxPriority;

impl<P: Ord + Clone, A> Measured<(P, A)> for MaxPriority {
    type Measure = (Sum<usize>, Option<Max<P>>);

    fn measure(element: &(P, A)) -> Self::Measure {
        (Sum::new(1), Some(Max::new(element.0.clone())))
    }
}

/// Predicate selecting the first pair whose priority is `target`.
fn reaches<P: Ord>(target: &P) -> impl Fn(&(Sum<usize>, Option<Max<P>>)) -> bool + '_ {
    move |measure: &(Sum<usize>, Option<Max<P>>)| {
        measure
            .1
            .as_ref()
            .is_some_and(|highest| highest.0 >= *target)
    }
}

/// A persistent priority queue returning the highest priority first.
///
/// # Time Complexity
///
/// | Operation          | Complexity         |
/// |--------------------|--------------------|
/// | `new`, `is_empty`  | O(1)               |
/// | `len`              | O(1)               |
/// | `push`             | O(1) amortized     |
/// | `peek`             | O(log n)           |
/// | `pop`              | O(log n)           |
/// | `merge`            | O(log min(n1, n2)) |
///
/// # Examples
///
/// ```rust
/// use lambars_fingertree::persistent::PriorityQueue;
///
/// let queue: PriorityQueue<u8, &str> =
///     [(1, "write"), (5, "deploy"), (3, "test")].into_iter().collect();
///
/// assert_eq!(queue.peek(), Some((&5, &"deploy")));
///
/// let (rest, highest) = queue.pop().unwrap();
/// assert_eq!(highest, (5, "deploy"));
/// assert_eq!(rest.peek(), Some((&3, &"test")));
/// assert_eq!(queue.len(), 3); // Original unchanged
/// ```
pub struct PriorityQueue<P: Ord + Clone, A> {
    tree: FingerTree<(P, A), MaxPriority>,
}

impl<P: Ord + Clone, A> Clone for PriorityQueue<P, A> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<P: Ord + Clone, A> PriorityQueue<P, A> {
    /// Creates a new empty queue.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tree: FingerTree::new(),
        }
    }

    /// Returns `true` if the queue contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.measure().0.into_inner()
    }

    /// Adds `element` with the given priority.
    #[must_use]
    pub fn push(&self, priority: P, element: A) -> Self {
        Self {
            tree: self.tree.push_back((priority, element)),
        }
    }

    /// Returns the element with the highest priority, and that priority.
    /// Among equal priorities the earliest pushed wins.
    #[must_use]
    pub fn peek(&self) -> Option<(&P, &A)> {
        let (_, highest) = self.tree.measure();
        let target = highest?.into_inner();
        self.tree
            .find(reaches(&target))
            .map(|(priority, element)| (priority, element))
    }

    /// Removes the element with the highest priority, returning the remaining
    /// queue and the removed pair. Returns `None` for an empty queue.
    #[must_use]
    pub fn pop(&self) -> Option<(Self, (P, A))>
    where
        A: Clone,
    {
        let (_, highest) = self.tree.measure();
        let target = highest?.into_inner();
        let (left, right) = self.tree.split(reaches(&target)).into_parts();
        let view = right.view_left()?;
        let removed = view.head.clone();
        Some((
            Self {
                tree: left.append(&view.rest),
            },
            removed,
        ))
    }

    /// Combines two queues; pairs of equal priority from `self` leave first.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            tree: self.tree.append(&other.tree),
        }
    }

    /// Iterates over the pairs in insertion order, not priority order.
    #[must_use]
    pub fn iter(&self) -> PriorityQueueIterator<'_, P, A> {
        PriorityQueueIterator {
            inner: self.tree.iter(),
        }
    }
}

impl<P: Ord + Clone, A> Default for PriorityQueue<P, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord + Clone + fmt::Debug, A: fmt::Debug> fmt::Debug for PriorityQueue<P, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<P: Ord + Clone, A> FromIterator<(P, A)> for PriorityQueue<P, A> {
    fn from_iter<I: IntoIterator<Item = (P, A)>>(iter: I) -> Self {
        Self {
            tree: iter.into_iter().collect(),
        }
    }
}

impl<'a, P: Ord + Clone, A> IntoIterator for &'a PriorityQueue<P, A> {
    type Item = (&'a P, &'a A);
    type IntoIter = PriorityQueueIterator<'a, P, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowing iterator over the pairs of a [`PriorityQueue`], in insertion
/// order.
pub struct PriorityQueueIterator<'a, P: Ord + Clone, A> {
    inner: FingerTreeIterator<'a, (P, A), MaxPriority>,
}

impl<'a, P: Ord + Clone, A> Iterator for PriorityQueueIterator<'a, P, A> {
    type Item = (&'a P, &'a A);

    fn next(&mut self) -> Option<Self::Item> {
        let (priority, element) = self.inner.next()?;
        Some((priority, element))
    }
}

impl<P: Ord + Clone, A> DoubleEndedIterator for PriorityQueueIterator<'_, P, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (priority, element) = self.inner.next_back()?;
        Some((priority, element))
    }
}
