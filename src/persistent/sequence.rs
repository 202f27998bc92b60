//! Persistent (immutable) indexed sequence.
//!
//! This module provides [`Sequence`], a [`FingerTree`] measured by [`Size`].
//! Every annotation is an element count, so positions can be found by
//! splitting where the running count first exceeds an index.
//!
//! # Overview
//!
//! - O(1) `len`, `front`, `back`
//! - O(1) amortized `push_front`, `push_back`, `tail`, `init`
//! - O(log n) `at`, `insert`, `delete`, `update`, `take`, `drop`, `split_at`
//! - O(log min(n1, n2)) `append`
//!
//! # Examples
//!
//! ```rust
//! use lambars_fingertree::persistent::Sequence;
//!
//! let sequence: Sequence<i32> = (1..=63).collect();
//! assert_eq!(sequence.at(0), Ok(&1));
//! assert_eq!(sequence.at(32), Ok(&33));
//!
//! let (front, back) = sequence.split_at(10);
//! assert_eq!(front.len(), 10);
//! assert_eq!(back.front(), Some(&11));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};

use super::fingertree::{
    FingerTree, FingerTreeError, FingerTreeIntoIterator, FingerTreeIterator, Result, Size,
};
use crate::typeclass::{Monoid, Semigroup, Sum};

/// Predicate selecting the element at `index`: true once more than `index`
/// elements have been counted.
fn past(index: usize) -> impl Fn(&Sum<usize>) -> bool {
    move |count: &Sum<usize>| index < count.0
}

/// A persistent sequence with logarithmic positional access.
///
/// # Time Complexity
///
/// | Operation                        | Complexity         |
/// |----------------------------------|--------------------|
/// | `new`, `is_empty`, `len`         | O(1)               |
/// | `front`, `back`                  | O(1)               |
/// | `push_front`, `push_back`        | O(1) amortized     |
/// | `at`, `get`                      | O(log n)           |
/// | `insert`, `delete`, `update`     | O(log n)           |
/// | `take`, `drop`, `split_at`       | O(log n)           |
/// | `append`                         | O(log min(n1, n2)) |
/// | `reverse`, `map`, folds          | O(n)               |
///
/// # Examples
///
/// ```rust
/// use lambars_fingertree::persistent::Sequence;
///
/// let sequence = Sequence::new().push_back(1).push_back(2);
/// let inserted = sequence.insert(1, 3).unwrap();
///
/// assert_eq!(inserted.iter().copied().collect::<Vec<_>>(), vec![1, 3, 2]);
/// assert_eq!(sequence.len(), 2); // Original unchanged
/// ```
pub struct Sequence<A> {
    tree: FingerTree<A, Size>,
}

impl<A> Clone for Sequence<A> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<A> Sequence<A> {
    /// Creates a new empty sequence.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tree: FingerTree::new(),
        }
    }

    /// Creates a sequence containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: A) -> Self {
        Self {
            tree: FingerTree::singleton(element),
        }
    }

    /// Creates a sequence from a slice.
    #[must_use]
    pub fn from_slice(slice: &[A]) -> Self
    where
        A: Clone,
    {
        slice.iter().cloned().collect()
    }

    const fn from_tree(tree: FingerTree<A, Size>) -> Self {
        Self { tree }
    }

    /// Returns `true` if the sequence contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.measure().into_inner()
    }

    /// Returns the underlying finger tree.
    #[must_use]
    pub const fn as_finger_tree(&self) -> &FingerTree<A, Size> {
        &self.tree
    }

    /// Returns a reference to the first element, if any.
    #[must_use]
    pub fn front(&self) -> Option<&A> {
        self.tree.front()
    }

    /// Returns a reference to the last element, if any.
    #[must_use]
    pub fn back(&self) -> Option<&A> {
        self.tree.back()
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`FingerTreeError::EmptyTree`] if the sequence is empty.
    pub fn head(&self) -> Result<&A> {
        self.tree.head()
    }

    /// Returns every element but the first.
    ///
    /// # Errors
    ///
    /// Returns [`FingerTreeError::EmptyTree`] if the sequence is empty.
    pub fn tail(&self) -> Result<Self> {
        self.tree.tail().map(Self::from_tree)
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`FingerTreeError::EmptyTree`] if the sequence is empty.
    pub fn last(&self) -> Result<&A> {
        self.tree.last()
    }

    /// Returns every element but the last.
    ///
    /// # Errors
    ///
    /// Returns [`FingerTreeError::EmptyTree`] if the sequence is empty.
    pub fn init(&self) -> Result<Self> {
        self.tree.init().map(Self::from_tree)
    }

    /// Prepends an element.
    #[must_use]
    pub fn push_front(&self, element: A) -> Self {
        Self::from_tree(self.tree.push_front(element))
    }

    /// Appends an element.
    #[must_use]
    pub fn push_back(&self, element: A) -> Self {
        Self::from_tree(self.tree.push_back(element))
    }

    /// Concatenates this sequence with another sequence.
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        Self::from_tree(self.tree.append(&other.tree))
    }

    /// Returns the element at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&A> {
        self.tree.find(past(index))
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`FingerTreeError::IndexOutOfBounds`] if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&A> {
        self.get(index)
            .ok_or_else(|| FingerTreeError::IndexOutOfBounds {
                index,
                len: self.len(),
            })
    }

    /// Returns the elements before `index` and the elements from `index` on.
    /// An index past the end puts everything in the first half.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_fingertree::persistent::Sequence;
    ///
    /// let sequence: Sequence<char> = "abcde".chars().collect();
    /// let (front, back) = sequence.split_at(2);
    /// assert_eq!(front.iter().collect::<String>(), "ab");
    /// assert_eq!(back.iter().collect::<String>(), "cde");
    /// ```
    #[must_use]
    pub fn split_at(&self, index: usize) -> (Self, Self) {
        let (left, right) = self.tree.split(past(index)).into_parts();
        (Self::from_tree(left), Self::from_tree(right))
    }

    /// Returns the first `count` elements, or the whole sequence if it is
    /// shorter.
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        self.split_at(count).0
    }

    /// Returns the sequence without its first `count` elements, or an empty
    /// sequence if it is shorter.
    #[must_use]
    pub fn drop(&self, count: usize) -> Self {
        self.split_at(count).1
    }

    /// Inserts `element` so that it ends up at `index`. An index equal to the
    /// length appends.
    ///
    /// # Errors
    ///
    /// Returns [`FingerTreeError::IndexOutOfBounds`] if `index > len`.
    pub fn insert(&self, index: usize, element: A) -> Result<Self> {
        let len = self.len();
        if index > len {
            return Err(FingerTreeError::IndexOutOfBounds { index, len });
        }
        let (left, right) = self.split_at(index);
        Ok(left.push_back(element).append(&right))
    }

    /// Removes the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`FingerTreeError::IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_fingertree::persistent::Sequence;
    ///
    /// let sequence = Sequence::from_slice(&[1, 2, 3]);
    /// let deleted = sequence.delete(1).unwrap();
    /// assert_eq!(deleted.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    /// assert!(sequence.delete(3).is_err());
    /// ```
    pub fn delete(&self, index: usize) -> Result<Self> {
        let (left, right) = self.split_around(index)?;
        Ok(left.append(&right))
    }

    /// Replaces the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`FingerTreeError::IndexOutOfBounds`] if `index >= len`.
    pub fn update(&self, index: usize, element: A) -> Result<Self> {
        let (left, right) = self.split_around(index)?;
        Ok(left.push_back(element).append(&right))
    }

    /// Splits off the element at `index`, returning what lies on either side.
    fn split_around(&self, index: usize) -> Result<(Self, Self)> {
        let len = self.len();
        if index >= len {
            return Err(FingerTreeError::IndexOutOfBounds { index, len });
        }
        let (left, right) = self.split_at(index);
        Ok((left, right.tail()?))
    }

    /// Applies `function` to every element.
    #[must_use]
    pub fn map<B, F>(&self, function: F) -> Sequence<B>
    where
        F: FnMut(&A) -> B,
    {
        Sequence::from_tree(self.tree.map(function))
    }

    /// Folds the elements from the front.
    pub fn fold_left<B, F>(&self, zero: B, function: F) -> B
    where
        F: FnMut(B, &A) -> B,
    {
        self.tree.fold_left(zero, function)
    }

    /// Folds the elements from the back.
    pub fn fold_right<B, F>(&self, zero: B, function: F) -> B
    where
        F: FnMut(&A, B) -> B,
    {
        self.tree.fold_right(zero, function)
    }

    /// Returns a sequence with the elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self::from_tree(self.tree.reverse())
    }

    /// Creates a double-ended, exact-size iterator over references to the
    /// elements.
    #[must_use]
    pub fn iter(&self) -> SequenceIterator<'_, A> {
        SequenceIterator {
            inner: self.tree.iter(),
            remaining: self.len(),
        }
    }
}

impl<A> Default for Sequence<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: PartialEq> PartialEq for Sequence<A> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<A: Eq> Eq for Sequence<A> {}

impl<A: fmt::Debug> fmt::Debug for Sequence<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<A: Hash> Hash for Sequence<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tree.hash(state);
    }
}

impl<A> FromIterator<A> for Sequence<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self::from_tree(iter.into_iter().collect())
    }
}

impl<A> From<FingerTree<A, Size>> for Sequence<A> {
    fn from(tree: FingerTree<A, Size>) -> Self {
        Self::from_tree(tree)
    }
}

impl<'a, A> IntoIterator for &'a Sequence<A> {
    type Item = &'a A;
    type IntoIter = SequenceIterator<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: Clone> IntoIterator for Sequence<A> {
    type Item = A;
    type IntoIter = SequenceIntoIterator<A>;

    fn into_iter(self) -> Self::IntoIter {
        SequenceIntoIterator {
            remaining: self.len(),
            inner: self.tree.into_iter(),
        }
    }
}

impl<A> Semigroup for Sequence<A> {
    fn combine(self, other: Self) -> Self {
        self.append(&other)
    }
}

impl<A> Monoid for Sequence<A> {
    fn empty() -> Self {
        Self::new()
    }
}

/// A borrowing iterator over the elements of a [`Sequence`].
pub struct SequenceIterator<'a, A> {
    inner: FingerTreeIterator<'a, A, Size>,
    remaining: usize,
}

impl<A> Clone for SequenceIterator<'_, A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, A> Iterator for SequenceIterator<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.inner.next()?;
        self.remaining -= 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<A> DoubleEndedIterator for SequenceIterator<'_, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let element = self.inner.next_back()?;
        self.remaining -= 1;
        Some(element)
    }
}

impl<A> ExactSizeIterator for SequenceIterator<'_, A> {}

impl<A> FusedIterator for SequenceIterator<'_, A> {}

/// An owning iterator over the elements of a [`Sequence`].
pub struct SequenceIntoIterator<A> {
    inner: FingerTreeIntoIterator<A, Size>,
    remaining: usize,
}

impl<A: Clone> Iterator for SequenceIntoIterator<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.inner.next()?;
        self.remaining -= 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<A: Clone> DoubleEndedIterator for SequenceIntoIterator<A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let element = self.inner.next_back()?;
        self.remaining -= 1;
        Some(element)
    }
}

impl<A: Clone> ExactSizeIterator for SequenceIntoIterator<A> {}

impl<A: Clone> FusedIterator for SequenceIntoIterator<A> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn numbers(count: i32) -> Sequence<i32> {
        (1..=count).collect()
    }

    fn elements(sequence: &Sequence<i32>) -> Vec<i32> {
        sequence.iter().copied().collect()
    }

    mod construction {
        use super::*;

        #[rstest]
        fn new_sequence_is_empty() {
            let sequence: Sequence<i32> = Sequence::new();
            assert!(sequence.is_empty());
            assert_eq!(sequence.len(), 0);
            assert_eq!(sequence, Sequence::default());
        }

        #[rstest]
        fn singleton_has_one_element() {
            let sequence = Sequence::singleton("only");
            assert_eq!(sequence.len(), 1);
            assert_eq!(sequence.head(), Ok(&"only"));
        }

        #[rstest]
        fn from_slice_keeps_order() {
            let sequence = Sequence::from_slice(&[3, 1, 2]);
            assert_eq!(elements(&sequence), vec![3, 1, 2]);
        }

        #[rstest]
        fn from_finger_tree_shares_structure() {
            let tree: FingerTree<i32, Size> = (1..=4).collect();
            let sequence = Sequence::from(tree.clone());
            assert_eq!(sequence.as_finger_tree(), &tree);
        }
    }

    mod positions {
        use super::*;

        #[rstest]
        #[case(0, 1)]
        #[case(32, 33)]
        #[case(62, 63)]
        fn at_returns_indexed_element(#[case] index: usize, #[case] expected: i32) {
            assert_eq!(numbers(63).at(index), Ok(&expected));
        }

        #[rstest]
        fn at_past_end_is_an_error() {
            assert_eq!(
                numbers(3).at(3),
                Err(FingerTreeError::IndexOutOfBounds { index: 3, len: 3 })
            );
            assert_eq!(numbers(3).get(7), None);
        }

        #[rstest]
        #[case(0, vec![9, 1, 2, 3])]
        #[case(2, vec![1, 2, 9, 3])]
        #[case(3, vec![1, 2, 3, 9])]
        fn insert_places_element_at_index(#[case] index: usize, #[case] expected: Vec<i32>) {
            assert_eq!(elements(&numbers(3).insert(index, 9).unwrap()), expected);
        }

        #[rstest]
        fn insert_past_end_is_an_error() {
            assert_eq!(
                numbers(3).insert(4, 0),
                Err(FingerTreeError::IndexOutOfBounds { index: 4, len: 3 })
            );
        }

        #[rstest]
        #[case(0, vec![2, 3])]
        #[case(1, vec![1, 3])]
        #[case(2, vec![1, 2])]
        fn delete_removes_indexed_element(#[case] index: usize, #[case] expected: Vec<i32>) {
            assert_eq!(elements(&numbers(3).delete(index).unwrap()), expected);
        }

        #[rstest]
        fn delete_from_empty_is_an_error() {
            let sequence: Sequence<i32> = Sequence::new();
            assert_eq!(
                sequence.delete(0),
                Err(FingerTreeError::IndexOutOfBounds { index: 0, len: 0 })
            );
        }

        #[rstest]
        fn update_replaces_element() {
            let updated = numbers(5).update(4, 50).unwrap();
            assert_eq!(elements(&updated), vec![1, 2, 3, 4, 50]);
            assert!(numbers(5).update(5, 0).is_err());
        }

        #[rstest]
        #[case(0)]
        #[case(1)]
        #[case(20)]
        #[case(40)]
        #[case(41)]
        #[case(100)]
        fn take_and_drop_reassemble(#[case] count: usize) {
            let sequence = numbers(40);
            let taken = sequence.take(count);
            let dropped = sequence.drop(count);
            assert_eq!(taken.len(), count.min(40));
            assert_eq!(taken.append(&dropped), sequence);
        }
    }

    mod iteration {
        use super::*;

        #[rstest]
        fn iter_is_exact_size() {
            let sequence = numbers(12);
            let mut iterator = sequence.iter();
            assert_eq!(iterator.len(), 12);
            iterator.next();
            iterator.next_back();
            assert_eq!(iterator.len(), 10);
        }

        #[rstest]
        fn into_iter_yields_owned_elements() {
            let sequence: Sequence<String> = ["a", "b"].into_iter().map(String::from).collect();
            let iterator = sequence.into_iter();
            assert_eq!(iterator.len(), 2);
            assert_eq!(iterator.collect::<Vec<_>>(), vec!["a", "b"]);
        }

        #[rstest]
        fn map_and_folds() {
            let sequence = numbers(4);
            let squares = sequence.map(|element| element * element);
            assert_eq!(elements(&squares), vec![1, 4, 9, 16]);
            assert_eq!(sequence.fold_left(0, |total, element| total + element), 10);
            assert_eq!(
                sequence.fold_right(Vec::new(), |element, mut reversed| {
                    reversed.push(*element);
                    reversed
                }),
                vec![4, 3, 2, 1]
            );
        }

        #[rstest]
        fn reverse_reverses() {
            assert_eq!(elements(&numbers(5).reverse()), vec![5, 4, 3, 2, 1]);
        }

        #[rstest]
        fn combine_appends() {
            let combined = numbers(2).combine(Sequence::from_slice(&[3]));
            assert_eq!(elements(&combined), vec![1, 2, 3]);
            assert_eq!(format!("{combined:?}"), "[1, 2, 3]");
        }
    }

    mod traits {
        use super::*;
        use std::collections::hash_map::DefaultHasher;

        fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        #[rstest]
        #[case(0)]
        #[case(1)]
        #[case(40)]
        fn hash_agrees_with_underlying_tree(#[case] count: i32) {
            let sequence = numbers(count);
            assert_eq!(hash_of(&sequence), hash_of(sequence.as_finger_tree()));
        }

        #[rstest]
        fn hash_ignores_construction_history() {
            let appended = numbers(10).append(&Sequence::from_slice(&[11, 12]));
            assert_eq!(hash_of(&appended), hash_of(&numbers(12)));
            assert_ne!(hash_of(&numbers(11)), hash_of(&numbers(12)));
        }
    }
}
