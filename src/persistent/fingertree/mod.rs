//! Persistent (immutable) 2-3 finger tree annotated with a monoidal
//! measurement.
//!
//! This module provides [`FingerTree`], the sequence structure described in
//! Hinze & Paterson's "Finger Trees: A Simple General-purpose Data Structure"
//! (2006), parameterised by a [`Measured`] strategy.
//!
//! # Overview
//!
//! `FingerTree<A, M>` stores elements of type `A` and annotates every part of
//! itself with the monoidal sum of `M::measure` over the elements it covers.
//! Choosing the measurement turns the same engine into different abstract
//! data types: counting elements gives an indexed sequence (see
//! [`Sequence`](crate::persistent::Sequence)), keeping the largest priority
//! gives a priority queue (see
//! [`PriorityQueue`](crate::persistent::PriorityQueue)).
//!
//! - O(1) amortized `push_front`, `push_back`, `view_left`, `view_right`
//! - O(1) `front`, `back`, `measure`
//! - O(log min(n1, n2)) `append`
//! - O(log n) `split` and `find`
//! - O(n) `reverse`, `map`, folds and iteration
//!
//! All operations return new trees without modifying the original, and
//! structural sharing ensures memory efficiency.
//!
//! # Finger Tree Structure
//!
//! A finger tree is one of:
//! - Empty: no elements
//! - Single: one element
//! - Deep: a left and a right "finger" (digits of one to four elements) and a
//!   middle finger tree whose elements are 2-3 nodes of the level above
//!
//! Digits, nodes and deep levels compute their annotation the first time it
//! is demanded and cache it. The cache is a compute-once cell, so several
//! threads may force the same annotation concurrently.
//!
//! # Split Predicates
//!
//! [`FingerTree::split`] and [`FingerTree::find`] take a predicate over the
//! running annotation, accumulated from the left. The predicate must be
//! monotonic: false on the identity annotation, true on the annotation of
//! the whole tree, and switching from false to true exactly once along the
//! way. Non-monotonic predicates are not detected and yield an unspecified
//! (but deterministic) cut.
//!
//! # Examples
//!
//! ```rust
//! use lambars_fingertree::persistent::{FingerTree, Size};
//! use lambars_fingertree::typeclass::Sum;
//!
//! let left: FingerTree<i32, Size> = (1..=5).collect();
//! let right: FingerTree<i32, Size> = (6..=10).collect();
//!
//! let joined = left.append(&right);
//! assert_eq!(joined.measure(), Sum::new(10));
//! assert_eq!(joined.iter().copied().collect::<Vec<_>>(), (1..=10).collect::<Vec<_>>());
//!
//! // Structural sharing: the operands are preserved
//! assert_eq!(left.measure(), Sum::new(5));
//! ```
//!
//! # References
//!
//! - Hinze & Paterson, "Finger Trees: A Simple General-purpose Data Structure" (2006)

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

mod concat;
mod digit;
mod error;
mod iter;
mod measured;
mod node;
mod split;
mod tree;
mod view;

pub use error::{FingerTreeError, Result};
pub use iter::{FingerTreeIntoIterator, FingerTreeIterator};
pub use measured::{Measured, Size, Unmeasured};
pub use view::{SplitPair, View};

use node::Entry;
use split::Split;
use tree::Tree;

use crate::persistent::ReferenceCounter;
use crate::typeclass::{Monoid, Semigroup};

/// A persistent sequence annotated with the measurement `M`.
///
/// # Time Complexity
///
/// | Operation                      | Complexity              |
/// |--------------------------------|-------------------------|
/// | `new`, `singleton`, `is_empty` | O(1)                    |
/// | `front`, `back`, `measure`     | O(1)                    |
/// | `push_front`, `push_back`      | O(1) amortized          |
/// | `view_left`, `view_right`      | O(1) amortized          |
/// | `head`, `tail`, `last`, `init` | O(1) amortized          |
/// | `append`                       | O(log min(n1, n2))      |
/// | `split`, `find`                | O(log n)                |
/// | `reverse`, `map`, folds        | O(n)                    |
///
/// # Examples
///
/// ```rust
/// use lambars_fingertree::persistent::{FingerTree, Size};
///
/// let tree: FingerTree<i32, Size> = FingerTree::new().push_back(2).push_front(1);
/// assert_eq!(tree.front(), Some(&1));
/// assert_eq!(tree.back(), Some(&2));
///
/// let extended = tree.push_back(3);
/// assert_eq!(tree.iter().count(), 2);     // Original unchanged
/// assert_eq!(extended.iter().count(), 3); // New tree
/// ```
pub struct FingerTree<A, M: Measured<A>> {
    root: Tree<A, M>,
}

impl<A, M: Measured<A>> Clone for FingerTree<A, M> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

impl<A, M: Measured<A>> FingerTree<A, M> {
    /// Creates a new empty tree.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { root: Tree::Empty }
    }

    /// Creates a tree containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: A) -> Self {
        Self::from_root(Tree::Single(Entry::leaf(element)))
    }

    pub(crate) const fn from_root(root: Tree<A, M>) -> Self {
        Self { root }
    }

    /// Returns `true` if the tree contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns the annotation of the whole tree: the monoidal sum of the
    /// measure of every element, in order.
    ///
    /// The value is cached after the first call.
    #[must_use]
    pub fn measure(&self) -> M::Measure {
        self.root.measure()
    }

    /// Returns a reference to the first element, if any.
    #[must_use]
    pub fn front(&self) -> Option<&A> {
        self.root.front().map(Entry::as_element)
    }

    /// Returns a reference to the last element, if any.
    #[must_use]
    pub fn back(&self) -> Option<&A> {
        self.root.back().map(Entry::as_element)
    }

    /// Prepends an element.
    #[must_use]
    pub fn push_front(&self, element: A) -> Self {
        Self::from_root(self.root.push_front(Entry::leaf(element)))
    }

    /// Appends an element.
    #[must_use]
    pub fn push_back(&self, element: A) -> Self {
        Self::from_root(self.root.push_back(Entry::leaf(element)))
    }

    /// Detaches the first element. Returns `None` for an empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_fingertree::persistent::{FingerTree, Size};
    ///
    /// let tree: FingerTree<char, Size> = "abc".chars().collect();
    /// let (head, rest) = tree.view_left().unwrap().into_parts();
    /// assert_eq!(*head, 'a');
    /// assert_eq!(rest.iter().collect::<String>(), "bc");
    /// ```
    #[must_use]
    pub fn view_left(&self) -> Option<View<'_, A, M>> {
        let head = self.front()?;
        let (_, rest) = self.root.view_left()?;
        Some(View {
            head,
            rest: Self::from_root(rest),
        })
    }

    /// Detaches the last element. Returns `None` for an empty tree.
    #[must_use]
    pub fn view_right(&self) -> Option<View<'_, A, M>> {
        let last = self.back()?;
        let (_, rest) = self.root.view_right()?;
        Some(View {
            head: last,
            rest: Self::from_root(rest),
        })
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`FingerTreeError::EmptyTree`] if the tree is empty.
    pub fn head(&self) -> Result<&A> {
        self.front()
            .ok_or(FingerTreeError::EmptyTree { operation: "head" })
    }

    /// Returns every element but the first.
    ///
    /// # Errors
    ///
    /// Returns [`FingerTreeError::EmptyTree`] if the tree is empty.
    pub fn tail(&self) -> Result<Self> {
        self.view_left()
            .map(|view| view.rest)
            .ok_or(FingerTreeError::EmptyTree { operation: "tail" })
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`FingerTreeError::EmptyTree`] if the tree is empty.
    pub fn last(&self) -> Result<&A> {
        self.back()
            .ok_or(FingerTreeError::EmptyTree { operation: "last" })
    }

    /// Returns every element but the last.
    ///
    /// # Errors
    ///
    /// Returns [`FingerTreeError::EmptyTree`] if the tree is empty.
    pub fn init(&self) -> Result<Self> {
        self.view_right()
            .map(|view| view.rest)
            .ok_or(FingerTreeError::EmptyTree { operation: "init" })
    }

    /// Concatenates this tree with another tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_fingertree::persistent::{FingerTree, Unmeasured};
    ///
    /// let left: FingerTree<i32, Unmeasured> = (1..=3).collect();
    /// let right: FingerTree<i32, Unmeasured> = (4..=6).collect();
    /// let joined = left.append(&right);
    /// assert_eq!(joined.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        tracing::trace!(
            left_depth = self.root.depth(),
            right_depth = other.root.depth(),
            "concatenating finger trees"
        );
        Self::from_root(self.root.concat(&other.root))
    }

    /// Splits the tree before the first element at which `predicate`, applied
    /// to the annotation accumulated from the left up to and including that
    /// element, holds.
    ///
    /// - An empty tree splits into two empty trees.
    /// - If `predicate` does not hold for the whole tree's annotation, `left`
    ///   is the whole tree and `right` is empty.
    ///
    /// `predicate` must be false on the identity annotation and switch from
    /// false to true at most once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_fingertree::persistent::{FingerTree, Size};
    ///
    /// let tree: FingerTree<i32, Size> = (0..10).collect();
    /// let (left, right) = tree.split(|size| 4 < size.0).into_parts();
    /// assert_eq!(left.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    /// assert_eq!(right.front(), Some(&4));
    /// ```
    #[must_use]
    pub fn split<P>(&self, predicate: P) -> SplitPair<A, M>
    where
        P: Fn(&M::Measure) -> bool,
    {
        if self.is_empty() {
            return SplitPair {
                left: Self::new(),
                right: Self::new(),
            };
        }
        if !predicate(&self.measure()) {
            tracing::trace!("split predicate never holds; keeping whole tree");
            return SplitPair {
                left: self.clone(),
                right: Self::new(),
            };
        }
        let Split { left, pivot, right } = self.root.split_tree(&predicate, &M::Measure::empty());
        tracing::trace!(
            left_depth = left.depth(),
            right_depth = right.depth(),
            "split finger tree"
        );
        SplitPair {
            left: Self::from_root(left),
            right: Self::from_root(right.push_front(pivot)),
        }
    }

    /// Returns the element [`split`](Self::split) would place first on the
    /// right, without building either half.
    ///
    /// Returns `None` for an empty tree or when `predicate` does not hold for
    /// the whole tree's annotation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_fingertree::persistent::{FingerTree, Size};
    ///
    /// let tree: FingerTree<&str, Size> = ["a", "b", "c"].into_iter().collect();
    /// assert_eq!(tree.find(|size| 1 < size.0), Some(&"b"));
    /// assert_eq!(tree.find(|size| 5 < size.0), None);
    /// ```
    #[must_use]
    pub fn find<P>(&self, predicate: P) -> Option<&A>
    where
        P: Fn(&M::Measure) -> bool,
    {
        if self.is_empty() || !predicate(&self.measure()) {
            return None;
        }
        self.root
            .locate(&predicate, M::Measure::empty())
            .map(|(_, entry)| entry.as_element())
    }

    /// Returns a tree with the elements in reverse order.
    ///
    /// Elements are shared with this tree, not copied.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self::from_root(self.root.reverse_with(&mut ReferenceCounter::clone))
    }

    /// Returns a tree with the elements in reverse order, each passed through
    /// `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_fingertree::persistent::{FingerTree, Size};
    ///
    /// let tree: FingerTree<i32, Size> = (1..=3).collect();
    /// let negated = tree.reverse_with(|element| -element);
    /// assert_eq!(negated.iter().copied().collect::<Vec<_>>(), vec![-3, -2, -1]);
    /// ```
    #[must_use]
    pub fn reverse_with<F>(&self, mut function: F) -> Self
    where
        F: FnMut(&A) -> A,
    {
        Self::from_root(
            self.root
                .reverse_with(&mut |element: &ReferenceCounter<A>| {
                    ReferenceCounter::new(function(&**element))
                }),
        )
    }

    /// Applies `function` to every element, keeping the measurement.
    #[must_use]
    pub fn map<B, F>(&self, function: F) -> FingerTree<B, M>
    where
        M: Measured<B>,
        F: FnMut(&A) -> B,
    {
        self.map_measured(function)
    }

    /// Applies `function` to every element and measures the results with `N`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_fingertree::persistent::{FingerTree, Measured, Size};
    /// use lambars_fingertree::typeclass::Sum;
    ///
    /// struct Length;
    ///
    /// impl Measured<String> for Length {
    ///     type Measure = Sum<usize>;
    ///
    ///     fn measure(element: &String) -> Sum<usize> {
    ///         Sum::new(element.len())
    ///     }
    /// }
    ///
    /// let numbers: FingerTree<u32, Size> = [1, 20, 300].into_iter().collect();
    /// let words: FingerTree<String, Length> = numbers.map_measured(u32::to_string);
    /// assert_eq!(words.measure(), Sum::new(6));
    /// ```
    #[must_use]
    pub fn map_measured<B, N, F>(&self, mut function: F) -> FingerTree<B, N>
    where
        N: Measured<B>,
        F: FnMut(&A) -> B,
    {
        FingerTree::from_root(self.root.map(&mut function))
    }

    /// Folds the elements from the front.
    pub fn fold_left<B, F>(&self, zero: B, mut function: F) -> B
    where
        F: FnMut(B, &A) -> B,
    {
        self.root.fold_left(zero, &mut function)
    }

    /// Folds the elements from the back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_fingertree::persistent::{FingerTree, Unmeasured};
    ///
    /// let tree: FingerTree<char, Unmeasured> = "abc".chars().collect();
    /// let reversed = tree.fold_right(String::new(), |element, mut text| {
    ///     text.push(*element);
    ///     text
    /// });
    /// assert_eq!(reversed, "cba");
    /// ```
    pub fn fold_right<B, F>(&self, zero: B, mut function: F) -> B
    where
        F: FnMut(&A, B) -> B,
    {
        self.root.fold_right(zero, &mut function)
    }

    /// Creates a double-ended iterator over references to the elements.
    #[must_use]
    pub fn iter(&self) -> FingerTreeIterator<'_, A, M> {
        FingerTreeIterator::new(&self.root)
    }
}

impl<A, M: Measured<A>> Default for FingerTree<A, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: PartialEq, M: Measured<A>> PartialEq for FingerTree<A, M> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<A: Eq, M: Measured<A>> Eq for FingerTree<A, M> {}

impl<A: fmt::Debug, M: Measured<A>> fmt::Debug for FingerTree<A, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<A: Hash, M: Measured<A>> Hash for FingerTree<A, M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut count = 0_usize;
        for element in self {
            element.hash(state);
            count += 1;
        }
        count.hash(state);
    }
}

impl<A, M: Measured<A>> FromIterator<A> for FingerTree<A, M> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |tree, element| tree.push_back(element))
    }
}

impl<'a, A, M: Measured<A>> IntoIterator for &'a FingerTree<A, M> {
    type Item = &'a A;
    type IntoIter = FingerTreeIterator<'a, A, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: Clone, M: Measured<A>> IntoIterator for FingerTree<A, M> {
    type Item = A;
    type IntoIter = FingerTreeIntoIterator<A, M>;

    fn into_iter(self) -> Self::IntoIter {
        FingerTreeIntoIterator::new(self)
    }
}

/// Concatenation.
impl<A, M: Measured<A>> Semigroup for FingerTree<A, M> {
    fn combine(self, other: Self) -> Self {
        self.append(&other)
    }
}

impl<A, M: Measured<A>> Monoid for FingerTree<A, M> {
    fn empty() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Max, Sum};
    use rstest::rstest;

    fn sized(range: std::ops::RangeInclusive<i32>) -> FingerTree<i32, Size> {
        range.collect()
    }

    fn elements(tree: &FingerTree<i32, Size>) -> Vec<i32> {
        tree.iter().copied().collect()
    }

    /// Keeps the largest element seen so far.
    struct Largest;

    impl Measured<u8> for Largest {
        type Measure = Max<u8>;

        fn measure(element: &u8) -> Max<u8> {
            Max::new(*element)
        }
    }

    mod basic {
        use super::*;

        #[rstest]
        fn new_tree_is_empty() {
            let tree: FingerTree<i32, Size> = FingerTree::new();
            assert!(tree.is_empty());
            assert_eq!(tree.measure(), Sum::new(0));
            assert_eq!(tree.front(), None);
        }

        #[rstest]
        fn push_onto_empty_gives_one_element() {
            let front: FingerTree<i32, Size> = FingerTree::new().push_front(1);
            let back: FingerTree<i32, Size> = FingerTree::new().push_back(1);
            assert_eq!(elements(&front), vec![1]);
            assert_eq!(front, back);
            assert_eq!(front, FingerTree::singleton(1));
        }

        #[rstest]
        fn push_front_reverses_insertion_order() {
            let tree = (1..=63).fold(FingerTree::<i32, Size>::new(), |tree, element| {
                tree.push_front(element)
            });
            assert_eq!(elements(&tree), (1..=63).rev().collect::<Vec<_>>());
        }

        #[rstest]
        fn push_leaves_original_untouched() {
            let tree = sized(1..=3);
            let extended = tree.push_back(4);
            assert_eq!(elements(&tree), vec![1, 2, 3]);
            assert_eq!(elements(&extended), vec![1, 2, 3, 4]);
        }
    }

    mod ends {
        use super::*;

        #[rstest]
        fn head_of_empty_fails() {
            let tree: FingerTree<i32, Size> = FingerTree::new();
            assert_eq!(
                tree.head(),
                Err(FingerTreeError::EmptyTree { operation: "head" })
            );
            assert_eq!(
                tree.last(),
                Err(FingerTreeError::EmptyTree { operation: "last" })
            );
            assert!(tree.tail().is_err());
            assert!(tree.init().is_err());
        }

        #[rstest]
        fn view_left_and_right_of_empty_are_none() {
            let tree: FingerTree<i32, Size> = FingerTree::new();
            assert!(tree.view_left().is_none());
            assert!(tree.view_right().is_none());
        }

        #[rstest]
        fn tail_and_init_drop_one_end() {
            let tree = sized(1..=10);
            assert_eq!(tree.head(), Ok(&1));
            assert_eq!(tree.last(), Ok(&10));
            let tail = tree.tail().unwrap();
            let init = tree.init().unwrap();
            assert_eq!(elements(&tail), (2..=10).collect::<Vec<_>>());
            assert_eq!(elements(&init), (1..=9).collect::<Vec<_>>());
        }

        #[rstest]
        fn view_right_borrows_last() {
            let tree = sized(1..=4);
            let view = tree.view_right().unwrap();
            assert_eq!(view.head, &4);
            assert_eq!(elements(&view.rest), vec![1, 2, 3]);
        }

        #[rstest]
        fn single_element_views_to_empty_rest() {
            let tree = FingerTree::<i32, Size>::singleton(7);
            let (head, rest) = tree.view_left().unwrap().into_parts();
            assert_eq!(head, &7);
            assert!(rest.is_empty());
        }
    }

    mod splitting {
        use super::*;

        #[rstest]
        fn split_of_empty_is_two_empties() {
            let tree: FingerTree<i32, Size> = FingerTree::new();
            let (left, right) = tree.split(|size| 0 < size.0).into_parts();
            assert!(left.is_empty());
            assert!(right.is_empty());
        }

        #[rstest]
        fn split_beyond_end_keeps_everything_left() {
            let tree = sized(1..=5);
            let (left, right) = tree.split(|size| 10 < size.0).into_parts();
            assert_eq!(elements(&left), vec![1, 2, 3, 4, 5]);
            assert!(right.is_empty());
        }

        #[rstest]
        #[case(0)]
        #[case(1)]
        #[case(31)]
        #[case(62)]
        fn split_puts_pivot_first_on_right(#[case] index: usize) {
            let tree = sized(1..=63);
            let (left, right) = tree.split(|size| index < size.0).into_parts();
            assert_eq!(left.measure(), Sum::new(index));
            assert_eq!(right.front(), Some(&(i32::try_from(index).unwrap() + 1)));
            assert_eq!(left.append(&right), tree);
        }

        #[rstest]
        fn find_matches_split() {
            let tree = sized(1..=100);
            for index in [0_usize, 7, 50, 99] {
                let expected = tree.split(|size| index < size.0).right.front().copied();
                assert_eq!(tree.find(|size| index < size.0).copied(), expected);
            }
        }

        #[rstest]
        fn split_by_running_maximum() {
            let tree: FingerTree<u8, Largest> = [3, 1, 4, 1, 5, 9, 2, 6].into_iter().collect();
            assert_eq!(tree.measure(), Max::new(9));
            let (left, right) = tree.split(|largest| largest.0 >= 5).into_parts();
            assert_eq!(left.iter().copied().collect::<Vec<_>>(), vec![3, 1, 4, 1]);
            assert_eq!(right.iter().copied().collect::<Vec<_>>(), vec![5, 9, 2, 6]);
        }
    }

    mod transforms {
        use super::*;

        #[rstest]
        fn reverse_is_an_involution() {
            let tree = sized(1..=40);
            let reversed = tree.reverse();
            assert_eq!(elements(&reversed), (1..=40).rev().collect::<Vec<_>>());
            assert_eq!(tree.reverse().reverse(), tree);
        }

        #[rstest]
        fn reverse_with_applies_function() {
            let tree = sized(1..=4);
            let reversed = tree.reverse_with(|element| element * 100);
            assert_eq!(elements(&reversed), vec![400, 300, 200, 100]);
        }

        #[rstest]
        fn map_keeps_measurement() {
            let tree = sized(1..=10);
            let doubled = tree.map(|element| element * 2);
            assert_eq!(doubled.measure(), Sum::new(10));
            let expected: Vec<i32> = (1..=10).map(|element| element * 2).collect();
            assert_eq!(elements(&doubled), expected);
        }

        #[rstest]
        fn map_measured_switches_measurement() {
            let tree = sized(1..=10);
            let bytes: FingerTree<u8, Largest> =
                tree.map_measured(|element| u8::try_from(*element).unwrap_or(u8::MAX));
            assert_eq!(bytes.measure(), Max::new(10));
        }

        #[rstest]
        fn folds_run_in_opposite_directions() {
            let tree = sized(1..=4);
            let left = tree.fold_left(String::new(), |text, element| format!("({text}{element})"));
            let right = tree.fold_right(String::new(), |element, text| {
                format!("({element}{text})")
            });
            assert_eq!(left, "((((1)2)3)4)");
            assert_eq!(right, "(1(2(3(4))))");
        }
    }

    mod traits {
        use super::*;
        use std::collections::hash_map::DefaultHasher;

        fn hash_of(tree: &FingerTree<i32, Size>) -> u64 {
            let mut hasher = DefaultHasher::new();
            tree.hash(&mut hasher);
            hasher.finish()
        }

        #[rstest]
        fn equal_contents_compare_equal_regardless_of_shape() {
            let pushed = sized(1..=20);
            let appended = sized(1..=7).append(&sized(8..=20));
            assert_eq!(pushed, appended);
            assert_eq!(hash_of(&pushed), hash_of(&appended));
        }

        #[rstest]
        fn different_lengths_are_not_equal() {
            assert_ne!(sized(1..=3), sized(1..=4));
        }

        #[rstest]
        fn debug_lists_elements() {
            assert_eq!(format!("{:?}", sized(1..=3)), "[1, 2, 3]");
        }

        #[rstest]
        fn semigroup_combine_appends() {
            let combined = sized(1..=3).combine(sized(4..=6));
            assert_eq!(elements(&combined), vec![1, 2, 3, 4, 5, 6]);
            assert!(FingerTree::<i32, Size>::empty().is_empty());
        }

        #[rstest]
        fn unmeasured_tree_is_plain_deque() {
            let tree: FingerTree<&str, Unmeasured> = ["x", "y"].into_iter().collect();
            assert_eq!(tree.back(), Some(&"y"));
        }
    }
}
