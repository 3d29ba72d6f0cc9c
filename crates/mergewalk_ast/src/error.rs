//! Traversal error types.

use thiserror::Error;

/// Errors that can occur while traversing a tree.
///
/// Visitors return this type from their callbacks; the engine and any
/// composing visitor pass it through unchanged.
#[derive(Debug, Error)]
pub enum TraverseError {
    /// A visitor callback failed.
    #[error("Visitor error: {0}")]
    Visitor(String),

    /// A visitor callback failed with an underlying error.
    #[error(transparent)]
    Custom(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The tree is nested deeper than the configured limit.
    #[error("Traversal exceeded the maximum depth of {limit}")]
    DepthLimitExceeded {
        /// The configured depth limit.
        limit: usize,
    },

    /// A visitor asked to remove the root node.
    #[error("The root node cannot be removed")]
    RootRemoved,
}

impl TraverseError {
    /// Creates a visitor error from a message.
    pub fn visitor(message: impl Into<String>) -> Self {
        Self::Visitor(message.into())
    }

    /// Wraps an arbitrary error raised inside a visitor.
    pub fn custom<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Custom(Box::new(error))
    }
}
