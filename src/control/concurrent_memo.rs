//! Thread-safe, compute-once memoisation cell.
//!
//! This module provides [`ConcurrentMemo<T>`], the cell every finger tree
//! node, digit and deep spine uses to cache its monoidal annotation. A cell
//! starts empty; the first call to [`ConcurrentMemo::force_with`] runs the
//! supplied evaluation closure and publishes its result, and every later
//! call returns the published value without running anything.
//!
//! The evaluation closure is supplied at force time, not at construction
//! time: an annotation is computed from the children of the structure that
//! owns the cell.
//!
//! # Guarantees
//!
//! When several threads force the same empty cell at once:
//!
//! - exactly one evaluation closure runs; the others block until it has
//!   published its value
//! - every thread observes the same value
//! - no thread ever observes a partially written value
//!
//! If the evaluation closure panics the cell stays empty and the panic
//! propagates to the forcing thread; a later force runs a fresh closure.
//!
//! # Examples
//!
//! ```rust
//! use lambars_fingertree::control::ConcurrentMemo;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let memo = Arc::new(ConcurrentMemo::new());
//!
//! let handles: Vec<_> = (0..10).map(|_| {
//!     let memo = Arc::clone(&memo);
//!     thread::spawn(move || *memo.force_with(|| 6 * 7))
//! }).collect();
//!
//! for handle in handles {
//!     assert_eq!(handle.join().unwrap(), 42);
//! }
//! ```

use std::fmt;

use once_cell::sync::OnceCell;

/// A thread-safe cell that memoises the first value computed for it.
///
/// # Thread Safety
///
/// `ConcurrentMemo<T>` is `Send + Sync` when `T: Send + Sync`. After the
/// value has been published, reading it is a single atomic load.
///
/// # Examples
///
/// ```rust
/// use lambars_fingertree::control::ConcurrentMemo;
///
/// let memo = ConcurrentMemo::new();
/// assert!(memo.get().is_none());
///
/// assert_eq!(*memo.force_with(|| 42), 42);
/// // The second closure never runs.
/// assert_eq!(*memo.force_with(|| unreachable!()), 42);
/// ```
pub struct ConcurrentMemo<T> {
    cell: OnceCell<T>,
}

impl<T> ConcurrentMemo<T> {
    /// Creates an empty cell.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Creates a cell that already holds `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_fingertree::control::ConcurrentMemo;
    ///
    /// let memo = ConcurrentMemo::with_value(7);
    /// assert!(memo.is_initialized());
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_value(value: T) -> Self {
        Self {
            cell: OnceCell::with_value(value),
        }
    }

    /// Returns the memoised value, running `evaluate` first if the cell is
    /// still empty.
    ///
    /// `evaluate` runs at most once per cell across all threads, unless it
    /// panics.
    pub fn force_with<F>(&self, evaluate: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.cell.get_or_init(evaluate)
    }

    /// Returns the memoised value without forcing it.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Returns whether a value has been published.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Consumes the cell and returns the memoised value, if any.
    #[inline]
    pub fn into_inner(self) -> Option<T> {
        self.cell.into_inner()
    }
}

impl<T> Default for ConcurrentMemo<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning copies a published value; an empty cell clones to an empty cell.
impl<T: Clone> Clone for ConcurrentMemo<T> {
    fn clone(&self) -> Self {
        self.get()
            .map_or_else(Self::new, |value| Self::with_value(value.clone()))
    }
}

impl<T: fmt::Debug> fmt::Debug for ConcurrentMemo<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => formatter
                .debug_tuple("ConcurrentMemo")
                .field(value)
                .finish(),
            None => formatter.write_str("ConcurrentMemo(<pending>)"),
        }
    }
}
