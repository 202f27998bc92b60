//! The recursive tree: empty, a single entry, or a deep spine.

use super::digit::Digit;
use super::measured::Measured;
use super::node::Entry;
use super::split::{deep_left, deep_right};
use crate::control::ConcurrentMemo;
use crate::persistent::ReferenceCounter;
use crate::typeclass::{Monoid, Semigroup};

/// One level of a finger tree.
///
/// The middle tree of a `Deep` holds node entries that group the entries of
/// this level; its own middle tree groups those nodes, and so on.
pub(crate) enum Tree<A, M: Measured<A>> {
    Empty,
    Single(Entry<A, M>),
    Deep(ReferenceCounter<Deep<A, M>>),
}

/// Fingers and middle tree of a deep level, with the annotation of all three
/// cached on first demand.
pub(crate) struct Deep<A, M: Measured<A>> {
    measure: ConcurrentMemo<M::Measure>,
    pub(crate) left: Digit<A, M>,
    pub(crate) middle: Tree<A, M>,
    pub(crate) right: Digit<A, M>,
}

impl<A, M: Measured<A>> Clone for Tree<A, M> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Single(entry) => Self::Single(entry.clone()),
            Self::Deep(deep) => Self::Deep(deep.clone()),
        }
    }
}

impl<A, M: Measured<A>> Deep<A, M> {
    fn measure(&self) -> M::Measure {
        self.measure
            .force_with(|| {
                self.left
                    .measure()
                    .combine(self.middle.measure())
                    .combine(self.right.measure())
            })
            .clone()
    }
}

impl<A, M: Measured<A>> Tree<A, M> {
    pub(crate) fn deep(left: Digit<A, M>, middle: Self, right: Digit<A, M>) -> Self {
        Self::Deep(ReferenceCounter::new(Deep {
            measure: ConcurrentMemo::new(),
            left,
            middle,
            right,
        }))
    }

    pub(crate) const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub(crate) fn measure(&self) -> M::Measure {
        match self {
            Self::Empty => M::Measure::empty(),
            Self::Single(entry) => entry.measure(),
            Self::Deep(deep) => deep.measure(),
        }
    }

    /// Number of deep levels above the innermost middle tree.
    pub(crate) fn depth(&self) -> usize {
        let mut depth = 0;
        let mut level = self;
        while let Self::Deep(deep) = level {
            depth += 1;
            level = &deep.middle;
        }
        depth
    }

    pub(crate) fn front(&self) -> Option<&Entry<A, M>> {
        match self {
            Self::Empty => None,
            Self::Single(entry) => Some(entry),
            Self::Deep(deep) => Some(deep.left.head()),
        }
    }

    pub(crate) fn back(&self) -> Option<&Entry<A, M>> {
        match self {
            Self::Empty => None,
            Self::Single(entry) => Some(entry),
            Self::Deep(deep) => Some(deep.right.last()),
        }
    }

    pub(crate) fn push_front(&self, entry: Entry<A, M>) -> Self {
        match self {
            Self::Empty => Self::Single(entry),
            Self::Single(existing) => {
                Self::deep(Digit::one(entry), Self::Empty, Digit::one(existing.clone()))
            }
            Self::Deep(deep) => deep.left.prepend(entry, &deep.middle, &deep.right),
        }
    }

    pub(crate) fn push_back(&self, entry: Entry<A, M>) -> Self {
        match self {
            Self::Empty => Self::Single(entry),
            Self::Single(existing) => {
                Self::deep(Digit::one(existing.clone()), Self::Empty, Digit::one(entry))
            }
            Self::Deep(deep) => deep.right.append(entry, &deep.middle, &deep.left),
        }
    }

    /// Detaches the first entry. A left finger that runs dry is refilled
    /// from the middle tree.
    pub(crate) fn view_left(&self) -> Option<(Entry<A, M>, Self)> {
        match self {
            Self::Empty => None,
            Self::Single(entry) => Some((entry.clone(), Self::Empty)),
            Self::Deep(deep) => {
                let (rest, head) = deep.left.pop_front();
                Some((
                    head,
                    deep_left(rest, deep.middle.clone(), deep.right.clone()),
                ))
            }
        }
    }

    pub(crate) fn view_right(&self) -> Option<(Entry<A, M>, Self)> {
        match self {
            Self::Empty => None,
            Self::Single(entry) => Some((entry.clone(), Self::Empty)),
            Self::Deep(deep) => {
                let (rest, last) = deep.right.pop_back();
                Some((
                    last,
                    deep_right(deep.left.clone(), deep.middle.clone(), rest),
                ))
            }
        }
    }

    pub(crate) fn reverse_with<F>(&self, leaf: &mut F) -> Self
    where
        F: FnMut(&ReferenceCounter<A>) -> ReferenceCounter<A>,
    {
        match self {
            Self::Empty => Self::Empty,
            Self::Single(entry) => Self::Single(entry.reverse_with(leaf)),
            Self::Deep(deep) => {
                let left = deep.right.reverse_with(leaf);
                let middle = deep.middle.reverse_with(leaf);
                let right = deep.left.reverse_with(leaf);
                Self::deep(left, middle, right)
            }
        }
    }

    pub(crate) fn map<B, N, F>(&self, function: &mut F) -> Tree<B, N>
    where
        N: Measured<B>,
        F: FnMut(&A) -> B,
    {
        match self {
            Self::Empty => Tree::Empty,
            Self::Single(entry) => Tree::Single(entry.map(function)),
            Self::Deep(deep) => {
                let left = deep.left.map(function);
                let middle = deep.middle.map(function);
                let right = deep.right.map(function);
                Tree::deep(left, middle, right)
            }
        }
    }

    pub(crate) fn fold_left<B, F>(&self, accumulator: B, function: &mut F) -> B
    where
        F: FnMut(B, &A) -> B,
    {
        match self {
            Self::Empty => accumulator,
            Self::Single(entry) => entry.fold_left(accumulator, function),
            Self::Deep(deep) => {
                let accumulator = deep.left.fold_left(accumulator, function);
                let accumulator = deep.middle.fold_left(accumulator, function);
                deep.right.fold_left(accumulator, function)
            }
        }
    }

    pub(crate) fn fold_right<B, F>(&self, accumulator: B, function: &mut F) -> B
    where
        F: FnMut(&A, B) -> B,
    {
        match self {
            Self::Empty => accumulator,
            Self::Single(entry) => entry.fold_right(accumulator, function),
            Self::Deep(deep) => {
                let accumulator = deep.right.fold_right(accumulator, function);
                let accumulator = deep.middle.fold_right(accumulator, function);
                deep.left.fold_right(accumulator, function)
            }
        }
    }

    /// Descends through cached annotations to the entry of this level at
    /// which `predicate` first holds, without rebuilding anything.
    ///
    /// Returns the entry together with the annotation of everything before
    /// it, or `None` for an empty tree.
    pub(crate) fn locate<P>(
        &self,
        predicate: &P,
        accumulated: M::Measure,
    ) -> Option<(M::Measure, &Entry<A, M>)>
    where
        P: Fn(&M::Measure) -> bool,
    {
        match self {
            Self::Empty => None,
            Self::Single(entry) => Some((accumulated, entry)),
            Self::Deep(deep) => {
                let after_left = accumulated.clone().combine(deep.left.measure());
                if predicate(&after_left) {
                    return Some(deep.left.locate(predicate, accumulated));
                }
                let after_middle = after_left.clone().combine(deep.middle.measure());
                if predicate(&after_middle) {
                    let (before_node, node) = deep.middle.locate(predicate, after_left)?;
                    return Some(node.as_node().locate(predicate, before_node));
                }
                Some(deep.right.locate(predicate, after_middle))
            }
        }
    }
}
