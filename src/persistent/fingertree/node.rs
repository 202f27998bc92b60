//! Entries and 2-3 nodes.
//!
//! Every level of a finger tree stores [`Entry`] values. The outermost level
//! holds only leaves; the middle tree one level down holds nodes grouping two
//! or three entries of the level above it, and so on. Keeping a single entry
//! type for all levels sidesteps the nested `FingerTree<Node<A>>` type that
//! Rust cannot monomorphise.

use arrayvec::ArrayVec;

use super::digit::{Digit, Shape};
use super::measured::Measured;
use crate::control::ConcurrentMemo;
use crate::persistent::ReferenceCounter;
use crate::typeclass::Semigroup;

/// A shared element or a shared node, depending on the tree level.
pub(crate) enum Entry<A, M: Measured<A>> {
    Leaf(ReferenceCounter<A>),
    Node(ReferenceCounter<Node<A, M>>),
}

impl<A, M: Measured<A>> Clone for Entry<A, M> {
    fn clone(&self) -> Self {
        match self {
            Self::Leaf(element) => Self::Leaf(element.clone()),
            Self::Node(node) => Self::Node(node.clone()),
        }
    }
}

impl<A, M: Measured<A>> Entry<A, M> {
    pub(crate) fn leaf(element: A) -> Self {
        Self::Leaf(ReferenceCounter::new(element))
    }

    /// Leaves are measured on demand; nodes return their cached annotation.
    pub(crate) fn measure(&self) -> M::Measure {
        match self {
            Self::Leaf(element) => M::measure(element),
            Self::Node(node) => node.measure(),
        }
    }

    pub(crate) fn as_element(&self) -> &A {
        match self {
            Self::Leaf(element) => element,
            Self::Node(_) => unreachable!("node found at the element level"),
        }
    }

    pub(crate) fn into_element(self) -> ReferenceCounter<A> {
        match self {
            Self::Leaf(element) => element,
            Self::Node(_) => unreachable!("node found at the element level"),
        }
    }

    pub(crate) fn as_node(&self) -> &Node<A, M> {
        match self {
            Self::Node(node) => node,
            Self::Leaf(_) => unreachable!("element found below the element level"),
        }
    }

    /// Reverses the children of every node below this entry and passes each
    /// leaf through `leaf`.
    pub(crate) fn reverse_with<F>(&self, leaf: &mut F) -> Self
    where
        F: FnMut(&ReferenceCounter<A>) -> ReferenceCounter<A>,
    {
        match self {
            Self::Leaf(element) => Self::Leaf(leaf(element)),
            Self::Node(node) => Self::Node(ReferenceCounter::new(node.reverse_with(leaf))),
        }
    }

    pub(crate) fn map<B, N, F>(&self, function: &mut F) -> Entry<B, N>
    where
        N: Measured<B>,
        F: FnMut(&A) -> B,
    {
        match self {
            Self::Leaf(element) => Entry::leaf(function(&**element)),
            Self::Node(node) => Entry::Node(ReferenceCounter::new(node.map(function))),
        }
    }

    pub(crate) fn fold_left<B, F>(&self, accumulator: B, function: &mut F) -> B
    where
        F: FnMut(B, &A) -> B,
    {
        match self {
            Self::Leaf(element) => function(accumulator, &**element),
            Self::Node(node) => node
                .children()
                .into_iter()
                .fold(accumulator, |accumulator, child| {
                    child.fold_left(accumulator, function)
                }),
        }
    }

    pub(crate) fn fold_right<B, F>(&self, accumulator: B, function: &mut F) -> B
    where
        F: FnMut(&A, B) -> B,
    {
        match self {
            Self::Leaf(element) => function(&**element, accumulator),
            Self::Node(node) => node
                .children()
                .into_iter()
                .rev()
                .fold(accumulator, |accumulator, child| {
                    child.fold_right(accumulator, function)
                }),
        }
    }
}

/// A group of two or three entries with a lazily cached annotation.
///
/// Nodes are only built when a digit overflows or when concatenation
/// regroups the entries between two trees.
pub(crate) enum Node<A, M: Measured<A>> {
    Node2 {
        measure: ConcurrentMemo<M::Measure>,
        first: Entry<A, M>,
        second: Entry<A, M>,
    },
    Node3 {
        measure: ConcurrentMemo<M::Measure>,
        first: Entry<A, M>,
        second: Entry<A, M>,
        third: Entry<A, M>,
    },
}

impl<A, M: Measured<A>> Node<A, M> {
    pub(crate) fn node2(first: Entry<A, M>, second: Entry<A, M>) -> Entry<A, M> {
        Entry::Node(ReferenceCounter::new(Self::Node2 {
            measure: ConcurrentMemo::new(),
            first,
            second,
        }))
    }

    pub(crate) fn node3(
        first: Entry<A, M>,
        second: Entry<A, M>,
        third: Entry<A, M>,
    ) -> Entry<A, M> {
        Entry::Node(ReferenceCounter::new(Self::Node3 {
            measure: ConcurrentMemo::new(),
            first,
            second,
            third,
        }))
    }

    pub(crate) fn measure(&self) -> M::Measure {
        match self {
            Self::Node2 {
                measure,
                first,
                second,
            } => measure
                .force_with(|| first.measure().combine(second.measure()))
                .clone(),
            Self::Node3 {
                measure,
                first,
                second,
                third,
            } => measure
                .force_with(|| {
                    first
                        .measure()
                        .combine(second.measure())
                        .combine(third.measure())
                })
                .clone(),
        }
    }

    pub(crate) fn children(&self) -> ArrayVec<&Entry<A, M>, 3> {
        let mut children = ArrayVec::new();
        match self {
            Self::Node2 { first, second, .. } => {
                children.push(first);
                children.push(second);
            }
            Self::Node3 {
                first,
                second,
                third,
                ..
            } => {
                children.push(first);
                children.push(second);
                children.push(third);
            }
        }
        children
    }

    pub(crate) fn locate<P>(
        &self,
        predicate: &P,
        accumulated: M::Measure,
    ) -> (M::Measure, &Entry<A, M>)
    where
        P: Fn(&M::Measure) -> bool,
    {
        locate_entry(self.children(), predicate, accumulated)
    }

    /// Expands the node into a digit of the same arity. A published node
    /// annotation carries over, since the digit covers the same entries.
    pub(crate) fn to_digit(&self) -> Digit<A, M> {
        match self {
            Self::Node2 {
                measure,
                first,
                second,
            } => Digit::from_parts(Shape::Two(first.clone(), second.clone()), measure.clone()),
            Self::Node3 {
                measure,
                first,
                second,
                third,
            } => Digit::from_parts(
                Shape::Three(first.clone(), second.clone(), third.clone()),
                measure.clone(),
            ),
        }
    }

    fn reverse_with<F>(&self, leaf: &mut F) -> Self
    where
        F: FnMut(&ReferenceCounter<A>) -> ReferenceCounter<A>,
    {
        match self {
            Self::Node2 { first, second, .. } => Self::Node2 {
                measure: ConcurrentMemo::new(),
                first: second.reverse_with(leaf),
                second: first.reverse_with(leaf),
            },
            Self::Node3 {
                first,
                second,
                third,
                ..
            } => Self::Node3 {
                measure: ConcurrentMemo::new(),
                first: third.reverse_with(leaf),
                second: second.reverse_with(leaf),
                third: first.reverse_with(leaf),
            },
        }
    }

    fn map<B, N, F>(&self, function: &mut F) -> Node<B, N>
    where
        N: Measured<B>,
        F: FnMut(&A) -> B,
    {
        match self {
            Self::Node2 { first, second, .. } => Node::Node2 {
                measure: ConcurrentMemo::new(),
                first: first.map(function),
                second: second.map(function),
            },
            Self::Node3 {
                first,
                second,
                third,
                ..
            } => Node::Node3 {
                measure: ConcurrentMemo::new(),
                first: first.map(function),
                second: second.map(function),
                third: third.map(function),
            },
        }
    }
}

/// Finds the first entry whose running annotation, starting from
/// `accumulated`, satisfies `predicate`, falling back to the last entry.
/// Returns the entry together with the annotation of the entries before it.
pub(crate) fn locate_entry<'a, A, M, P>(
    entries: impl IntoIterator<Item = &'a Entry<A, M>>,
    predicate: &P,
    accumulated: M::Measure,
) -> (M::Measure, &'a Entry<A, M>)
where
    A: 'a,
    M: Measured<A> + 'a,
    P: Fn(&M::Measure) -> bool,
{
    let mut entries = entries.into_iter().peekable();
    let mut running = accumulated;
    while let Some(entry) = entries.next() {
        if entries.peek().is_none() {
            return (running, entry);
        }
        let next = running.clone().combine(entry.measure());
        if predicate(&next) {
            return (running, entry);
        }
        running = next;
    }
    unreachable!("digits and nodes hold at least one entry")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistent::fingertree::measured::Size;
    use crate::typeclass::Sum;
    use rstest::rstest;

    fn leaves(elements: &[i32]) -> Vec<Entry<i32, Size>> {
        elements.iter().copied().map(Entry::leaf).collect()
    }

    fn collect(entry: &Entry<i32, Size>) -> Vec<i32> {
        entry.fold_left(Vec::new(), &mut |mut elements, element: &i32| {
            elements.push(*element);
            elements
        })
    }

    #[rstest]
    fn node3_measure_sums_children() {
        let inner = leaves(&[1, 2, 3]);
        let node = Node::node3(inner[0].clone(), inner[1].clone(), inner[2].clone());
        assert_eq!(node.measure(), Sum::new(3));
    }

    #[rstest]
    fn nested_node_measure_counts_leaves() {
        let inner = leaves(&[1, 2, 3, 4, 5]);
        let left = Node::node3(inner[0].clone(), inner[1].clone(), inner[2].clone());
        let right = Node::node2(inner[3].clone(), inner[4].clone());
        let outer = Node::node2(left, right);
        assert_eq!(outer.measure(), Sum::new(5));
        assert_eq!(collect(&outer), vec![1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn fold_right_visits_back_to_front() {
        let inner = leaves(&[1, 2, 3]);
        let node = Node::node3(inner[0].clone(), inner[1].clone(), inner[2].clone());
        let visited = node.fold_right(Vec::new(), &mut |element: &i32, mut elements: Vec<i32>| {
            elements.push(*element);
            elements
        });
        assert_eq!(visited, vec![3, 2, 1]);
    }

    #[rstest]
    fn reverse_with_reverses_nested_children() {
        let inner = leaves(&[1, 2, 3, 4, 5]);
        let outer = Node::node2(
            Node::node3(inner[0].clone(), inner[1].clone(), inner[2].clone()),
            Node::node2(inner[3].clone(), inner[4].clone()),
        );
        let reversed = outer.reverse_with(&mut |element: &ReferenceCounter<i32>| {
            ReferenceCounter::new(**element * 10)
        });
        assert_eq!(collect(&reversed), vec![50, 40, 30, 20, 10]);
    }

    #[rstest]
    fn to_digit_keeps_published_measure() {
        let inner = leaves(&[1, 2]);
        let entry = Node::node2(inner[0].clone(), inner[1].clone());
        let node = entry.as_node();
        let _ = node.measure();
        let digit = node.to_digit();
        assert_eq!(digit.len(), 2);
        assert!(digit.is_measured());
    }

    #[rstest]
    fn map_changes_element_type() {
        let inner = leaves(&[1, 2]);
        let entry = Node::node2(inner[0].clone(), inner[1].clone());
        let mapped: Entry<String, Size> = entry.map(&mut |element: &i32| element.to_string());
        let text = mapped.fold_left(String::new(), &mut |text: String, element: &String| {
            text + element
        });
        assert_eq!(text, "12");
        assert_eq!(mapped.measure(), Sum::new(2));
    }
}
