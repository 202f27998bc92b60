//! Results of decomposing a tree at an end or at a predicate.

use std::fmt;

use super::FingerTree;
use super::measured::Measured;

/// One element detached from an end of a tree, with the remaining tree.
///
/// Returned by [`FingerTree::view_left`] and [`FingerTree::view_right`]. The
/// element is borrowed from the tree that was viewed.
pub struct View<'a, A, M: Measured<A>> {
    /// The detached element.
    pub head: &'a A,
    /// Every other element, in order.
    pub rest: FingerTree<A, M>,
}

impl<'a, A, M: Measured<A>> View<'a, A, M> {
    /// Consumes the view and returns its element and remainder.
    pub fn into_parts(self) -> (&'a A, FingerTree<A, M>) {
        (self.head, self.rest)
    }
}

impl<A: fmt::Debug, M: Measured<A>> fmt::Debug for View<'_, A, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("View")
            .field("head", self.head)
            .field("rest", &self.rest)
            .finish()
    }
}

/// The two halves of a tree cut where a predicate on the running annotation
/// first holds.
///
/// Returned by [`FingerTree::split`]. The element at which the predicate
/// first holds is the first element of `right`.
pub struct SplitPair<A, M: Measured<A>> {
    /// Elements before the cut.
    pub left: FingerTree<A, M>,
    /// Elements from the cut onwards.
    pub right: FingerTree<A, M>,
}

impl<A, M: Measured<A>> SplitPair<A, M> {
    /// Consumes the pair and returns `(left, right)`.
    pub fn into_parts(self) -> (FingerTree<A, M>, FingerTree<A, M>) {
        (self.left, self.right)
    }
}

impl<A, M: Measured<A>> Clone for SplitPair<A, M> {
    fn clone(&self) -> Self {
        Self {
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

impl<A: fmt::Debug, M: Measured<A>> fmt::Debug for SplitPair<A, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SplitPair")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}
