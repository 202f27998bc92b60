//! Digits: the one-to-four entry buffers at either fringe of a tree level.

use arrayvec::ArrayVec;

use super::measured::Measured;
use super::node::{Entry, Node, locate_entry};
use super::split::Split;
use super::tree::Tree;
use crate::control::ConcurrentMemo;
use crate::persistent::ReferenceCounter;
use crate::typeclass::{Monoid, Semigroup};

/// The entries of a digit; the arity is always between one and four.
pub(crate) enum Shape<A, M: Measured<A>> {
    One(Entry<A, M>),
    Two(Entry<A, M>, Entry<A, M>),
    Three(Entry<A, M>, Entry<A, M>, Entry<A, M>),
    Four(Entry<A, M>, Entry<A, M>, Entry<A, M>, Entry<A, M>),
}

impl<A, M: Measured<A>> Clone for Shape<A, M> {
    fn clone(&self) -> Self {
        match self {
            Self::One(first) => Self::One(first.clone()),
            Self::Two(first, second) => Self::Two(first.clone(), second.clone()),
            Self::Three(first, second, third) => {
                Self::Three(first.clone(), second.clone(), third.clone())
            }
            Self::Four(first, second, third, fourth) => {
                Self::Four(first.clone(), second.clone(), third.clone(), fourth.clone())
            }
        }
    }
}

/// A fringe buffer with a lazily cached annotation.
pub(crate) struct Digit<A, M: Measured<A>> {
    shape: Shape<A, M>,
    measure: ConcurrentMemo<M::Measure>,
}

impl<A, M: Measured<A>> Clone for Digit<A, M> {
    fn clone(&self) -> Self {
        Self {
            shape: self.shape.clone(),
            measure: self.measure.clone(),
        }
    }
}

impl<A, M: Measured<A>> Digit<A, M> {
    pub(crate) const fn from_parts(
        shape: Shape<A, M>,
        measure: ConcurrentMemo<M::Measure>,
    ) -> Self {
        Self { shape, measure }
    }

    const fn from_shape(shape: Shape<A, M>) -> Self {
        Self::from_parts(shape, ConcurrentMemo::new())
    }

    pub(crate) const fn one(entry: Entry<A, M>) -> Self {
        Self::from_shape(Shape::One(entry))
    }

    pub(crate) const fn two(first: Entry<A, M>, second: Entry<A, M>) -> Self {
        Self::from_shape(Shape::Two(first, second))
    }

    /// Builds a digit from up to four entries; `None` for an empty slice.
    pub(crate) fn from_slice(entries: &[Entry<A, M>]) -> Option<Self> {
        let shape = match entries {
            [] => return None,
            [first] => Shape::One(first.clone()),
            [first, second] => Shape::Two(first.clone(), second.clone()),
            [first, second, third] => Shape::Three(first.clone(), second.clone(), third.clone()),
            [first, second, third, fourth] => {
                Shape::Four(first.clone(), second.clone(), third.clone(), fourth.clone())
            }
            _ => unreachable!("a digit holds at most four entries"),
        };
        Some(Self::from_shape(shape))
    }

    #[cfg(test)]
    pub(crate) const fn len(&self) -> usize {
        match self.shape {
            Shape::One(_) => 1,
            Shape::Two(..) => 2,
            Shape::Three(..) => 3,
            Shape::Four(..) => 4,
        }
    }

    pub(crate) const fn head(&self) -> &Entry<A, M> {
        match &self.shape {
            Shape::One(first)
            | Shape::Two(first, _)
            | Shape::Three(first, _, _)
            | Shape::Four(first, _, _, _) => first,
        }
    }

    pub(crate) const fn last(&self) -> &Entry<A, M> {
        match &self.shape {
            Shape::One(first) => first,
            Shape::Two(_, second) => second,
            Shape::Three(_, _, third) => third,
            Shape::Four(_, _, _, fourth) => fourth,
        }
    }

    pub(crate) fn entries(&self) -> ArrayVec<&Entry<A, M>, 4> {
        let mut entries = ArrayVec::new();
        match &self.shape {
            Shape::One(first) => entries.push(first),
            Shape::Two(first, second) => entries.extend([first, second]),
            Shape::Three(first, second, third) => entries.extend([first, second, third]),
            Shape::Four(first, second, third, fourth) => {
                entries.extend([first, second, third, fourth]);
            }
        }
        entries
    }

    pub(crate) fn to_entries(&self) -> ArrayVec<Entry<A, M>, 4> {
        self.entries().into_iter().cloned().collect()
    }

    pub(crate) fn measure(&self) -> M::Measure {
        self.measure
            .force_with(|| {
                let measures = self.entries().into_iter().map(Entry::measure);
                M::Measure::combine_all(measures)
            })
            .clone()
    }

    #[cfg(test)]
    pub(crate) fn is_measured(&self) -> bool {
        self.measure.is_initialized()
    }

    /// Removes the first entry. The remainder is `None` for a one-entry digit.
    pub(crate) fn pop_front(&self) -> (Option<Self>, Entry<A, M>) {
        match &self.shape {
            Shape::One(first) => (None, first.clone()),
            Shape::Two(first, second) => (Some(Self::one(second.clone())), first.clone()),
            Shape::Three(first, second, third) => (
                Some(Self::two(second.clone(), third.clone())),
                first.clone(),
            ),
            Shape::Four(first, second, third, fourth) => {
                let rest = Shape::Three(second.clone(), third.clone(), fourth.clone());
                (Some(Self::from_shape(rest)), first.clone())
            }
        }
    }

    /// Removes the last entry. The remainder is `None` for a one-entry digit.
    pub(crate) fn pop_back(&self) -> (Option<Self>, Entry<A, M>) {
        match &self.shape {
            Shape::One(first) => (None, first.clone()),
            Shape::Two(first, second) => (Some(Self::one(first.clone())), second.clone()),
            Shape::Three(first, second, third) => (
                Some(Self::two(first.clone(), second.clone())),
                third.clone(),
            ),
            Shape::Four(first, second, third, fourth) => {
                let rest = Shape::Three(first.clone(), second.clone(), third.clone());
                (Some(Self::from_shape(rest)), fourth.clone())
            }
        }
    }

    /// Pushes `entry` onto this digit as the left finger of a deep tree with
    /// the given middle and right finger.
    ///
    /// A full digit keeps the new entry and its old head, and sends its other
    /// three entries down into the middle tree as one node.
    pub(crate) fn prepend(
        &self,
        entry: Entry<A, M>,
        middle: &Tree<A, M>,
        right: &Self,
    ) -> Tree<A, M> {
        let grown = match &self.shape {
            Shape::One(first) => Shape::Two(entry, first.clone()),
            Shape::Two(first, second) => Shape::Three(entry, first.clone(), second.clone()),
            Shape::Three(first, second, third) => {
                Shape::Four(entry, first.clone(), second.clone(), third.clone())
            }
            Shape::Four(first, second, third, fourth) => {
                let overflow = Node::node3(second.clone(), third.clone(), fourth.clone());
                return Tree::deep(
                    Self::two(entry, first.clone()),
                    middle.push_front(overflow),
                    right.clone(),
                );
            }
        };
        Tree::deep(Self::from_shape(grown), middle.clone(), right.clone())
    }

    /// Mirror image of [`Digit::prepend`] for the right finger.
    pub(crate) fn append(
        &self,
        entry: Entry<A, M>,
        middle: &Tree<A, M>,
        left: &Self,
    ) -> Tree<A, M> {
        let grown = match &self.shape {
            Shape::One(first) => Shape::Two(first.clone(), entry),
            Shape::Two(first, second) => Shape::Three(first.clone(), second.clone(), entry),
            Shape::Three(first, second, third) => {
                Shape::Four(first.clone(), second.clone(), third.clone(), entry)
            }
            Shape::Four(first, second, third, fourth) => {
                let overflow = Node::node3(first.clone(), second.clone(), third.clone());
                return Tree::deep(
                    left.clone(),
                    middle.push_back(overflow),
                    Self::two(fourth.clone(), entry),
                );
            }
        };
        Tree::deep(left.clone(), middle.clone(), Self::from_shape(grown))
    }

    pub(crate) fn to_tree(&self) -> Tree<A, M> {
        match &self.shape {
            Shape::One(first) => Tree::Single(first.clone()),
            Shape::Two(first, second) => Tree::deep(
                Self::one(first.clone()),
                Tree::Empty,
                Self::one(second.clone()),
            ),
            Shape::Three(first, second, third) => Tree::deep(
                Self::two(first.clone(), second.clone()),
                Tree::Empty,
                Self::one(third.clone()),
            ),
            Shape::Four(first, second, third, fourth) => Tree::deep(
                Self::two(first.clone(), second.clone()),
                Tree::Empty,
                Self::two(third.clone(), fourth.clone()),
            ),
        }
    }

    pub(crate) fn reverse_with<F>(&self, leaf: &mut F) -> Self
    where
        F: FnMut(&ReferenceCounter<A>) -> ReferenceCounter<A>,
    {
        let shape = match &self.shape {
            Shape::One(first) => Shape::One(first.reverse_with(leaf)),
            Shape::Two(first, second) => {
                Shape::Two(second.reverse_with(leaf), first.reverse_with(leaf))
            }
            Shape::Three(first, second, third) => Shape::Three(
                third.reverse_with(leaf),
                second.reverse_with(leaf),
                first.reverse_with(leaf),
            ),
            Shape::Four(first, second, third, fourth) => Shape::Four(
                fourth.reverse_with(leaf),
                third.reverse_with(leaf),
                second.reverse_with(leaf),
                first.reverse_with(leaf),
            ),
        };
        Self::from_shape(shape)
    }

    pub(crate) fn map<B, N, F>(&self, function: &mut F) -> Digit<B, N>
    where
        N: Measured<B>,
        F: FnMut(&A) -> B,
    {
        let shape = match &self.shape {
            Shape::One(first) => Shape::One(first.map(function)),
            Shape::Two(first, second) => Shape::Two(first.map(function), second.map(function)),
            Shape::Three(first, second, third) => Shape::Three(
                first.map(function),
                second.map(function),
                third.map(function),
            ),
            Shape::Four(first, second, third, fourth) => Shape::Four(
                first.map(function),
                second.map(function),
                third.map(function),
                fourth.map(function),
            ),
        };
        Digit::from_shape(shape)
    }

    pub(crate) fn fold_left<B, F>(&self, accumulator: B, function: &mut F) -> B
    where
        F: FnMut(B, &A) -> B,
    {
        self.entries()
            .into_iter()
            .fold(accumulator, |accumulator, entry| {
                entry.fold_left(accumulator, function)
            })
    }

    pub(crate) fn fold_right<B, F>(&self, accumulator: B, function: &mut F) -> B
    where
        F: FnMut(&A, B) -> B,
    {
        self.entries()
            .into_iter()
            .rev()
            .fold(accumulator, |accumulator, entry| {
                entry.fold_right(accumulator, function)
            })
    }

    /// Splits around the first entry whose running annotation, starting from
    /// `accumulated`, satisfies `predicate`. The last entry is the pivot when
    /// no earlier one does.
    pub(crate) fn split<P>(
        &self,
        predicate: &P,
        accumulated: &M::Measure,
    ) -> Split<Option<Self>, Entry<A, M>>
    where
        P: Fn(&M::Measure) -> bool,
    {
        let entries = self.to_entries();
        let last = entries.len() - 1;
        let mut running = accumulated.clone();
        let mut pivot = last;
        for (position, entry) in entries.iter().enumerate().take(last) {
            running = running.combine(entry.measure());
            if predicate(&running) {
                pivot = position;
                break;
            }
        }
        Split {
            left: Self::from_slice(&entries[..pivot]),
            pivot: entries[pivot].clone(),
            right: Self::from_slice(&entries[pivot + 1..]),
        }
    }

    /// Borrowing counterpart of [`Digit::split`]: returns the pivot entry and
    /// the annotation of everything before it.
    pub(crate) fn locate<P>(
        &self,
        predicate: &P,
        accumulated: M::Measure,
    ) -> (M::Measure, &Entry<A, M>)
    where
        P: Fn(&M::Measure) -> bool,
    {
        locate_entry(self.entries(), predicate, accumulated)
    }
}
