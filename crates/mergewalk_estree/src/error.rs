//! ESTree loading error types.

use thiserror::Error;

/// Errors that can occur while loading an ESTree document.
#[derive(Debug, Error)]
pub enum EstreeError {
    /// The input is not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A value expected to be a node is not a JSON object.
    #[error("Expected an ESTree node object")]
    NotANode,

    /// A node object has no string `type` property.
    #[error("Node object has no string `type` property")]
    MissingType,

    /// The `type` property names a node kind that is not supported.
    #[error("Unknown node type: {0}")]
    UnknownNodeType(String),
}

impl EstreeError {
    /// Creates a new unknown node type error.
    pub fn unknown_node_type(node_type: impl Into<String>) -> Self {
        Self::UnknownNodeType(node_type.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_node_type_message() {
        let err = EstreeError::unknown_node_type("JSXElement");
        assert_eq!(err.to_string(), "Unknown node type: JSXElement");
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: EstreeError = json_err.into();
        assert!(err.to_string().starts_with("Invalid JSON:"));
    }
}
