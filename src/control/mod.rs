//! Control structures shared by the persistent data structures.
//!
//! - [`ConcurrentMemo`]: Thread-safe compute-once cell, used to cache
//!   finger tree annotations

mod concurrent_memo;

pub use concurrent_memo::ConcurrentMemo;
