//! Newtype wrappers selecting a particular monoid for a carrier type.
//!
//! The same carrier can summarise a sequence in more than one way: element
//! counts add up (`Sum`), priorities keep the largest (`Max`), and so on.
//! Wrapping the carrier picks the operation a finger tree annotation uses.
//!
//! # Available Wrappers
//!
//! - [`Sum`]: Addition-based semigroup/monoid (identity: 0)
//! - [`Product`]: Multiplication-based semigroup/monoid (identity: 1)
//! - [`Max`]: Maximum-based semigroup (identity: type minimum)
//! - [`Min`]: Minimum-based semigroup (identity: type maximum)
//!
//! `Max` and `Min` only have monoid instances for [`Bounded`] carriers. For
//! unbounded carriers, `Option<Max<A>>` is a monoid with `None` as identity.

macro_rules! numeric_wrapper {
    ($(#[$attribute:meta])* $name:ident) => {
        $(#[$attribute])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name<A>(pub A);

        impl<A> $name<A> {
            #[doc = concat!("Creates a new `", stringify!($name), "` wrapping the given value.")]
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            #[doc = concat!("Consumes the `", stringify!($name), "` and returns the inner value.")]
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Returns a reference to the inner value.
            #[inline]
            pub const fn as_inner(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $name<A> {
            fn from(value: A) -> Self {
                Self::new(value)
            }
        }
    };
}

numeric_wrapper!(
    /// The additive monoid.
    ///
    /// `Sum(a).combine(Sum(b))` equals `Sum(a + b)`; the identity is `Sum(0)`.
    /// `Sum<usize>` is the annotation of the size-counting measurement.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_fingertree::typeclass::{Monoid, Semigroup, Sum};
    ///
    /// assert_eq!(Sum::new(3).combine(Sum::new(5)), Sum::new(8));
    /// assert_eq!(Sum::<usize>::empty(), Sum::new(0));
    /// ```
    Sum
);

numeric_wrapper!(
    /// The multiplicative monoid.
    ///
    /// `Product(a).combine(Product(b))` equals `Product(a * b)`; the identity
    /// is `Product(1)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_fingertree::typeclass::{Monoid, Product, Semigroup};
    ///
    /// assert_eq!(Product::new(3).combine(Product::new(5)), Product::new(15));
    /// assert_eq!(Product::<i64>::empty(), Product::new(1));
    /// ```
    Product
);

numeric_wrapper!(
    /// The semigroup keeping the larger of two values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_fingertree::typeclass::{Max, Monoid, Semigroup};
    ///
    /// assert_eq!(Max::new(3).combine(Max::new(5)), Max::new(5));
    /// assert_eq!(Max::<u8>::empty(), Max::new(0));
    /// ```
    Max
);

numeric_wrapper!(
    /// The semigroup keeping the smaller of two values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_fingertree::typeclass::{Min, Monoid, Semigroup};
    ///
    /// assert_eq!(Min::new(3).combine(Min::new(5)), Min::new(3));
    /// assert_eq!(Min::<u8>::empty(), Min::new(255));
    /// ```
    Min
);

/// A trait for types that have minimum and maximum bounds.
///
/// This trait is used to provide identity elements for `Max` and `Min`
/// when used as monoids:
///
/// - `Max<A>` uses `A::MIN_VALUE` as its identity
/// - `Min<A>` uses `A::MAX_VALUE` as its identity
///
/// # Implementing Bounded
///
/// ```rust
/// use lambars_fingertree::typeclass::Bounded;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// struct Score(u8);
///
/// impl Bounded for Score {
///     const MIN_VALUE: Self = Score(0);
///     const MAX_VALUE: Self = Score(100);
/// }
///
/// assert_eq!(Score::MAX_VALUE.0, 100);
/// ```
pub trait Bounded {
    /// The minimum value of this type.
    const MIN_VALUE: Self;

    /// The maximum value of this type.
    const MAX_VALUE: Self;
}

macro_rules! bounded_by_constants {
    ($($carrier:ty),* $(,)?) => {
        $(
            impl Bounded for $carrier {
                const MIN_VALUE: Self = <$carrier>::MIN;
                const MAX_VALUE: Self = <$carrier>::MAX;
            }
        )*
    };
}

bounded_by_constants!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char
);

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}
