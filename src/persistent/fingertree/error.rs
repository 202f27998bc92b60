use thiserror::Error;

/// Errors raised by finger tree and sequence operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FingerTreeError {
    /// An operation that needs an element was called on an empty tree.
    #[error("`{operation}` called on an empty finger tree")]
    EmptyTree {
        /// Name of the failing operation.
        operation: &'static str,
    },
    /// A positional operation was given an index past the end.
    #[error("index {index} is out of bounds for a sequence of length {len}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },
}

/// Result alias for finger tree operations.
pub type Result<T> = std::result::Result<T, FingerTreeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_tree_message_names_operation() {
        let error = FingerTreeError::EmptyTree { operation: "head" };
        assert_eq!(error.to_string(), "`head` called on an empty finger tree");
    }

    #[rstest]
    fn index_message_reports_bounds() {
        let error = FingerTreeError::IndexOutOfBounds { index: 7, len: 3 };
        assert_eq!(
            error.to_string(),
            "index 7 is out of bounds for a sequence of length 3"
        );
    }
}
