//! Traversal configuration.

use serde::{Deserialize, Serialize};

/// Default nesting limit for [`TraverseOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options controlling the traversal engine.
///
/// Can be deserialized from JSON:
///
/// ```rust
/// use mergewalk_ast::visitor::TraverseOptions;
///
/// let options = TraverseOptions::from_json(r#"{ "maxDepth": 64 }"#).unwrap();
/// assert_eq!(options.max_depth, 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TraverseOptions {
    /// Maximum number of ancestors a visited node may have.
    ///
    /// The engine walks recursively; trees nested deeper than this fail
    /// with [`TraverseError::DepthLimitExceeded`](crate::TraverseError::DepthLimitExceeded)
    /// instead of exhausting the stack.
    pub max_depth: usize,
}

impl TraverseOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum traversal depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for TraverseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_options() {
        assert_eq!(TraverseOptions::new().max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let options = TraverseOptions::from_json("{}").unwrap();
        assert_eq!(options, TraverseOptions::default());
    }

    #[test]
    fn test_with_max_depth() {
        let options = TraverseOptions::new().with_max_depth(3);
        assert_eq!(options.max_depth, 3);
    }

    #[rstest]
    #[case::unknown_property(r#"{ "maxDepthh": 3 }"#, "unknown field")]
    #[case::type_mismatch(r#"{ "maxDepth": "deep" }"#, "invalid type")]
    #[case::negative(r#"{ "maxDepth": -1 }"#, "invalid value")]
    fn test_invalid_options(#[case] json: &str, #[case] expected_error_part: &str) {
        let result = TraverseOptions::from_json(json);
        assert!(result.is_err(), "Expected error for JSON: {}", json);
        let err = result.unwrap_err();
        assert!(
            err.to_string().contains(expected_error_part),
            "Error message '{}' should contain '{}'",
            err,
            expected_error_part
        );
    }
}
