//! # mergewalk_estree
//!
//! Loads ESTree-shaped JSON, as produced by acorn or espree, into a
//! [`mergewalk_ast`] arena tree.
//!
//! ## Example
//!
//! ```rust
//! use mergewalk_ast::{AstArena, NodeType};
//! use mergewalk_estree::parse_estree_json;
//!
//! let arena = AstArena::new();
//! let json = r#"{
//!     "type": "CallExpression",
//!     "start": 0,
//!     "end": 4,
//!     "callee": { "type": "Identifier", "start": 0, "end": 2, "name": "cb" },
//!     "arguments": []
//! }"#;
//!
//! let call = parse_estree_json(&arena, json).unwrap();
//! assert_eq!(call.node_type, NodeType::CallExpression);
//! assert_eq!(call.children()[0].name(), Some("cb"));
//! ```

mod convert;
mod error;

pub use convert::{convert_value, parse_estree_json};
pub use error::EstreeError;
