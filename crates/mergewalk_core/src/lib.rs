//! # mergewalk_core
//!
//! Composes several enter/leave visitors into one, so a tree is walked once
//! no matter how many visitors look at it.
//!
//! Each composed visitor keeps its own skip and break state. A visitor that
//! skips a subtree or breaks out of the traversal only silences itself; the
//! other visitors and the traversal engine are not affected.
//!
//! ## Example
//!
//! ```rust
//! use mergewalk_ast::visitor::{FnVisitor, VisitOption};
//! use mergewalk_ast::{AstArena, NodeType, Visitor};
//! use mergewalk_core::traverse_merged;
//! use mergewalk_estree::parse_estree_json;
//!
//! let arena = AstArena::new();
//! let root = parse_estree_json(
//!     &arena,
//!     r#"{ "type": "ExpressionStatement", "expression": {
//!         "type": "CallExpression",
//!         "callee": { "type": "Identifier", "name": "cb" },
//!         "arguments": [] } }"#,
//! )
//! .unwrap();
//!
//! let mut calls = 0;
//! let mut statements = 0;
//! let visitors: Vec<Box<dyn Visitor<'_> + '_>> = vec![
//!     Box::new(FnVisitor::new().on_enter(|_, node, _| {
//!         if node.node_type == NodeType::CallExpression {
//!             calls += 1;
//!         }
//!         Ok(VisitOption::Continue)
//!     })),
//!     Box::new(FnVisitor::new().on_leave(|_, node, _| {
//!         if node.node_type.is_statement() {
//!             statements += 1;
//!         }
//!         Ok(VisitOption::Continue)
//!     })),
//! ];
//! traverse_merged(root, visitors).unwrap();
//!
//! assert_eq!((calls, statements), (1, 1));
//! ```

mod merged;
mod scoped;
mod sub_visitor;

pub use merged::{MergedVisitor, compose, replace_merged, traverse_merged};
pub use sub_visitor::{Phase, SubVisitorState};
