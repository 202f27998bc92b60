//! # lambars-fingertree
//!
//! Persistent 2-3 finger trees annotated with monoidal measurements.
//!
//! ## Overview
//!
//! A finger tree is an immutable sequence with amortized O(1) access to both
//! ends, O(log min(n1, n2)) concatenation and O(log n) splitting at the point
//! where a monotone predicate over accumulated measurements first holds. The
//! choice of measurement decides what the tree is good for:
//!
//! - **Type Classes**: [`Semigroup`](typeclass::Semigroup) and
//!   [`Monoid`](typeclass::Monoid), the algebra of annotations
//! - **Control Structures**: [`ConcurrentMemo`](control::ConcurrentMemo), a
//!   compute-once cell for cached annotations
//! - **Persistent Data Structures**: [`FingerTree`](persistent::FingerTree),
//!   the indexed [`Sequence`](persistent::Sequence) and the
//!   [`PriorityQueue`](persistent::PriorityQueue)
//!
//! ## Feature Flags
//!
//! - `typeclass`: Semigroup, Monoid and the numeric wrappers
//! - `control`: Compute-once memo cell
//! - `persistent`: Finger tree and its specializations
//! - `arc`: Share structure through `Arc` instead of `Rc`, making trees
//!   `Send + Sync` when their elements are
//!
//! ## Example
//!
//! ```rust
//! use lambars_fingertree::prelude::*;
//!
//! let sequence: Sequence<char> = "finger".chars().collect();
//! let (front, back) = sequence.split_at(3);
//!
//! assert_eq!(front.iter().collect::<String>(), "fin");
//! assert_eq!(back.iter().collect::<String>(), "ger");
//! assert_eq!(back.append(&front).at(0), Ok(&'g'));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lambars_fingertree::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(all(feature = "persistent", feature = "arc"))]
mod thread_safety {
    use crate::persistent::{FingerTree, PriorityQueue, Sequence, Size, Unmeasured};

    static_assertions::assert_impl_all!(FingerTree<i32, Size>: Send, Sync);
    static_assertions::assert_impl_all!(FingerTree<String, Unmeasured>: Send, Sync);
    static_assertions::assert_impl_all!(Sequence<String>: Send, Sync);
    static_assertions::assert_impl_all!(PriorityQueue<u32, String>: Send, Sync);
    static_assertions::assert_not_impl_any!(FingerTree<std::rc::Rc<i32>, Size>: Send, Sync);
}
