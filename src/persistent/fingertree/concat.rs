//! Concatenation.
//!
//! Appending two deep trees keeps the outer fingers and regroups the inner
//! fingers (plus any entries carried down from the level above) into 2-3
//! nodes, which are then threaded between the two middle trees one level
//! down. Each level carries at most four nodes, so the recursion depth is
//! bounded by the depth of the shallower tree.

use arrayvec::ArrayVec;

use super::measured::Measured;
use super::node::{Entry, Node};
use super::tree::Tree;

/// Two fingers of four entries plus four carried nodes.
const BOUNDARY_CAPACITY: usize = 12;

/// Regrouping at most twelve entries yields at most four nodes.
const CARRY_CAPACITY: usize = 4;

impl<A, M: Measured<A>> Tree<A, M> {
    /// Concatenates two trees of the same level.
    pub(crate) fn concat(&self, other: &Self) -> Self {
        concat_with(self, &[], other)
    }
}

/// Concatenates `left`, the loose entries in `carried`, and `right`.
fn concat_with<A, M: Measured<A>>(
    left: &Tree<A, M>,
    carried: &[Entry<A, M>],
    right: &Tree<A, M>,
) -> Tree<A, M> {
    match (left, right) {
        (Tree::Empty, _) => carried
            .iter()
            .rev()
            .fold(right.clone(), |tree, entry| tree.push_front(entry.clone())),
        (_, Tree::Empty) => carried
            .iter()
            .fold(left.clone(), |tree, entry| tree.push_back(entry.clone())),
        (Tree::Single(entry), _) => {
            let rest = concat_with(&Tree::Empty, carried, right);
            rest.push_front(entry.clone())
        }
        (_, Tree::Single(entry)) => {
            let rest = concat_with(left, carried, &Tree::Empty);
            rest.push_back(entry.clone())
        }
        (Tree::Deep(left), Tree::Deep(right)) => {
            let mut boundary: ArrayVec<Entry<A, M>, BOUNDARY_CAPACITY> = ArrayVec::new();
            boundary.extend(left.right.to_entries());
            boundary.extend(carried.iter().cloned());
            boundary.extend(right.left.to_entries());
            let nodes = regroup(&boundary);
            Tree::deep(
                left.left.clone(),
                concat_with(&left.middle, &nodes, &right.middle),
                right.right.clone(),
            )
        }
    }
}

/// Packs between two and twelve entries into 2-3 nodes, preferring nodes of
/// three and never leaving a lone entry.
fn regroup<A, M: Measured<A>>(entries: &[Entry<A, M>]) -> ArrayVec<Entry<A, M>, CARRY_CAPACITY> {
    let mut nodes = ArrayVec::new();
    let mut remaining = entries;
    loop {
        match remaining {
            [first, second] => {
                nodes.push(Node::node2(first.clone(), second.clone()));
                break;
            }
            [first, second, third] => {
                nodes.push(Node::node3(first.clone(), second.clone(), third.clone()));
                break;
            }
            [first, second, third, fourth] => {
                nodes.push(Node::node2(first.clone(), second.clone()));
                nodes.push(Node::node2(third.clone(), fourth.clone()));
                break;
            }
            [first, second, third, rest @ ..] => {
                nodes.push(Node::node3(first.clone(), second.clone(), third.clone()));
                remaining = rest;
            }
            _ => unreachable!("a concatenation boundary holds at least two entries"),
        }
    }
    nodes
}
