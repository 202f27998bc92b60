//! Measurements: how a finger tree summarises its elements.

use crate::typeclass::{Monoid, Sum};

/// A measurement of elements of type `A` into a monoid.
///
/// A `Measured` implementation is a strategy chosen at the type level,
/// usually on a zero-sized marker type. Every digit, node and spine of a
/// `FingerTree<A, M>` is annotated with the monoidal sum of `M::measure`
/// over the elements it contains, in order.
///
/// # Contract
///
/// - `Self::Measure` must satisfy the [`Monoid`] laws. Nothing checks this;
///   a non-associative `combine` silently yields wrong annotations.
/// - `measure` must be deterministic. Annotations are cached the first time
///   they are demanded and never recomputed.
///
/// # Examples
///
/// ```rust
/// use lambars_fingertree::persistent::{FingerTree, Measured};
/// use lambars_fingertree::typeclass::Sum;
///
/// /// Measures words by their byte length.
/// struct ByteLength;
///
/// impl Measured<String> for ByteLength {
///     type Measure = Sum<usize>;
///
///     fn measure(element: &String) -> Sum<usize> {
///         Sum::new(element.len())
///     }
/// }
///
/// let words: FingerTree<String, ByteLength> =
///     ["finger", "tree"].into_iter().map(String::from).collect();
/// assert_eq!(words.measure(), Sum::new(10));
/// ```
pub trait Measured<A> {
    /// The annotation type.
    type Measure: Monoid + Clone;

    /// Measures a single element.
    fn measure(element: &A) -> Self::Measure;
}

/// Counts elements: every element measures `Sum(1)`.
///
/// The annotation of a tree measured by `Size` is its length, which is what
/// makes positional splitting possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size;

impl<A> Measured<A> for Size {
    type Measure = Sum<usize>;

    #[inline]
    fn measure(_element: &A) -> Sum<usize> {
        Sum::new(1)
    }
}

/// Measures nothing. A `FingerTree<A, Unmeasured>` is a plain catenable deque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unmeasured;

impl<A> Measured<A> for Unmeasured {
    type Measure = ();

    #[inline]
    fn measure(_element: &A) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-17)]
    fn size_measures_one(#[case] element: i32) {
        assert_eq!(<Size as Measured<i32>>::measure(&element), Sum::new(1));
    }

    #[rstest]
    fn unmeasured_measures_unit() {
        let () = <Unmeasured as Measured<&str>>::measure(&"anything");
    }
}
