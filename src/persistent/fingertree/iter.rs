use std::collections::VecDeque;
use std::iter::FusedIterator;

use arrayvec::ArrayVec;

use super::FingerTree;
use super::measured::Measured;
use super::node::Entry;
use super::tree::Tree;
use crate::persistent::ReferenceCounter;

/// Work still to be expanded by a [`FingerTreeIterator`], in element order.
enum Pending<'a, A, M: Measured<A>> {
    Entry(&'a Entry<A, M>),
    Tree(&'a Tree<A, M>),
}

impl<A, M: Measured<A>> Clone for Pending<'_, A, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, M: Measured<A>> Copy for Pending<'_, A, M> {}

impl<'a, A, M: Measured<A>> Pending<'a, A, M> {
    /// Returns the element, or `None` after expanding one level into `parts`.
    fn expand(self, parts: &mut ArrayVec<Self, 9>) -> Option<&'a A> {
        match self {
            Self::Entry(Entry::Leaf(element)) => return Some(&**element),
            Self::Entry(Entry::Node(node)) => {
                parts.extend(node.children().into_iter().map(Self::Entry));
            }
            Self::Tree(Tree::Empty) => {}
            Self::Tree(Tree::Single(entry)) => parts.push(Self::Entry(entry)),
            Self::Tree(Tree::Deep(deep)) => {
                parts.extend(deep.left.entries().into_iter().map(Self::Entry));
                parts.push(Self::Tree(&deep.middle));
                parts.extend(deep.right.entries().into_iter().map(Self::Entry));
            }
        }
        None
    }
}

/// A borrowing iterator over the elements of a [`FingerTree`].
///
/// Created by [`FingerTree::iter`]. Sub-trees are expanded lazily from
/// whichever end is being consumed, so iterating from both ends never visits
/// an element twice.
pub struct FingerTreeIterator<'a, A, M: Measured<A>> {
    pending: VecDeque<Pending<'a, A, M>>,
}

impl<'a, A, M: Measured<A>> FingerTreeIterator<'a, A, M> {
    pub(crate) fn new(tree: &'a Tree<A, M>) -> Self {
        let mut pending = VecDeque::new();
        pending.push_back(Pending::Tree(tree));
        Self { pending }
    }
}

impl<'a, A, M: Measured<A>> Iterator for FingerTreeIterator<'a, A, M> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut parts = ArrayVec::new();
            if let Some(element) = self.pending.pop_front()?.expand(&mut parts) {
                return Some(element);
            }
            for part in parts.into_iter().rev() {
                self.pending.push_front(part);
            }
        }
    }
}

impl<A, M: Measured<A>> DoubleEndedIterator for FingerTreeIterator<'_, A, M> {
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            let mut parts = ArrayVec::new();
            if let Some(element) = self.pending.pop_back()?.expand(&mut parts) {
                return Some(element);
            }
            self.pending.extend(parts);
        }
    }
}

impl<A, M: Measured<A>> FusedIterator for FingerTreeIterator<'_, A, M> {}

impl<A, M: Measured<A>> Clone for FingerTreeIterator<'_, A, M> {
    fn clone(&self) -> Self {
        Self {
            pending: self.pending.clone(),
        }
    }
}

/// An owning iterator over the elements of a [`FingerTree`].
///
/// Elements still shared with another version of the tree are cloned; those
/// owned solely by this iterator are moved out.
pub struct FingerTreeIntoIterator<A, M: Measured<A>> {
    tree: FingerTree<A, M>,
}

impl<A, M: Measured<A>> FingerTreeIntoIterator<A, M> {
    pub(crate) const fn new(tree: FingerTree<A, M>) -> Self {
        Self { tree }
    }
}

fn take_element<A: Clone, M: Measured<A>>(entry: Entry<A, M>) -> A {
    ReferenceCounter::try_unwrap(entry.into_element()).unwrap_or_else(|shared| (*shared).clone())
}

impl<A: Clone, M: Measured<A>> Iterator for FingerTreeIntoIterator<A, M> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, rest) = self.tree.root.view_left()?;
        self.tree = FingerTree::from_root(rest);
        Some(take_element(head))
    }
}

impl<A: Clone, M: Measured<A>> DoubleEndedIterator for FingerTreeIntoIterator<A, M> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (last, rest) = self.tree.root.view_right()?;
        self.tree = FingerTree::from_root(rest);
        Some(take_element(last))
    }
}

impl<A: Clone, M: Measured<A>> FusedIterator for FingerTreeIntoIterator<A, M> {}
