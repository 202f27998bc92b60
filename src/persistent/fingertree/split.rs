//! Predicate-guided splitting.
//!
//! A split descends through cached annotations, keeping a running sum from
//! the left, and stops at the first entry whose inclusion makes the
//! predicate true. Digits emptied by the cut are refilled from the adjacent
//! middle tree by [`deep_left`] and [`deep_right`].

use super::digit::Digit;
use super::measured::Measured;
use super::node::Entry;
use super::tree::Tree;
use crate::typeclass::Semigroup;

/// A left part, the pivot, and a right part.
pub(crate) struct Split<T, E> {
    pub(crate) left: T,
    pub(crate) pivot: E,
    pub(crate) right: T,
}

/// Builds a deep tree whose left finger may be missing, borrowing the first
/// node of `middle` (or collapsing to `right` alone) when it is.
pub(crate) fn deep_left<A, M: Measured<A>>(
    left: Option<Digit<A, M>>,
    middle: Tree<A, M>,
    right: Digit<A, M>,
) -> Tree<A, M> {
    match left {
        Some(left) => Tree::deep(left, middle, right),
        None => match middle.view_left() {
            None => right.to_tree(),
            Some((node, rest)) => Tree::deep(node.as_node().to_digit(), rest, right),
        },
    }
}

/// Mirror image of [`deep_left`].
pub(crate) fn deep_right<A, M: Measured<A>>(
    left: Digit<A, M>,
    middle: Tree<A, M>,
    right: Option<Digit<A, M>>,
) -> Tree<A, M> {
    match right {
        Some(right) => Tree::deep(left, middle, right),
        None => match middle.view_right() {
            None => left.to_tree(),
            Some((node, rest)) => Tree::deep(left, rest, node.as_node().to_digit()),
        },
    }
}

fn digit_to_tree<A, M: Measured<A>>(digit: Option<&Digit<A, M>>) -> Tree<A, M> {
    digit.map_or(Tree::Empty, Digit::to_tree)
}

impl<A, M: Measured<A>> Tree<A, M> {
    /// Splits a non-empty tree around the entry at which `predicate`, applied
    /// to `accumulated` combined with the running annotation, first holds.
    /// The last entry is the pivot when the predicate never holds.
    pub(crate) fn split_tree<P>(
        &self,
        predicate: &P,
        accumulated: &M::Measure,
    ) -> Split<Self, Entry<A, M>>
    where
        P: Fn(&M::Measure) -> bool,
    {
        match self {
            Self::Empty => unreachable!("split of an empty tree level"),
            Self::Single(entry) => Split {
                left: Self::Empty,
                pivot: entry.clone(),
                right: Self::Empty,
            },
            Self::Deep(deep) => {
                let after_left = accumulated.clone().combine(deep.left.measure());
                if predicate(&after_left) {
                    let Split { left, pivot, right } = deep.left.split(predicate, accumulated);
                    return Split {
                        left: digit_to_tree(left.as_ref()),
                        pivot,
                        right: deep_left(right, deep.middle.clone(), deep.right.clone()),
                    };
                }

                let after_middle = after_left.clone().combine(deep.middle.measure());
                if predicate(&after_middle) {
                    let Split {
                        left: middle_left,
                        pivot: node,
                        right: middle_right,
                    } = deep.middle.split_tree(predicate, &after_left);
                    let before_node = after_left.combine(middle_left.measure());
                    let Split { left, pivot, right } =
                        node.as_node().to_digit().split(predicate, &before_node);
                    return Split {
                        left: deep_right(deep.left.clone(), middle_left, left),
                        pivot,
                        right: deep_left(right, middle_right, deep.right.clone()),
                    };
                }

                let Split { left, pivot, right } = deep.right.split(predicate, &after_middle);
                Split {
                    left: deep_right(deep.left.clone(), deep.middle.clone(), left),
                    pivot,
                    right: digit_to_tree(right.as_ref()),
                }
            }
        }
    }
}
