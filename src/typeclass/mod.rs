//! Algebraic type classes used to annotate finger trees.
//!
//! A finger tree caches, at every internal node, the monoidal sum of the
//! measurements of the elements below it. This module provides the algebra
//! for those annotations:
//!
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Foundation Types
//!
//! - [`Sum`], [`Product`]: Numeric wrappers for different monoid operations
//! - [`Max`], [`Min`]: Bounded numeric wrappers
//! - [`Bounded`]: Trait for types with minimum and maximum values
//!
//! # Examples
//!
//! ```rust
//! use lambars_fingertree::typeclass::{Max, Monoid, Semigroup, Sum};
//!
//! // Element counts combine by addition
//! let count = Sum::new(2_usize).combine(Sum::new(3));
//! assert_eq!(count, Sum::new(5));
//!
//! // Priorities combine by taking the maximum
//! let priority = Max::new(4).combine(Max::new(9));
//! assert_eq!(priority, Max::new(9));
//!
//! // Pairs of monoids are monoids
//! let empty: (Sum<usize>, Option<Max<i32>>) = Monoid::empty();
//! assert_eq!(empty, (Sum::new(0), None));
//! ```

mod monoid;
mod semigroup;
mod wrappers;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Bounded, Max, Min, Product, Sum};
