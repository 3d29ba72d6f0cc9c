//! Visitor pattern for tree traversal.
//!
//! This module provides an estraverse-style enter/leave protocol.
//!
//! # Overview
//!
//! - [`Visitor`] - `enter`/`leave` callbacks, both defaulting to no-ops
//! - [`FnVisitor`] - a visitor assembled from optional closures
//! - [`Controller`] - per-call handle for introspection and control signals
//! - [`traverse`] - read-only traversal
//! - [`replace`] - traversal that applies replacements and removals
//!
//! # Control Flow
//!
//! A callback decides how traversal proceeds either by its return value or
//! by notifying the controller; the two channels are equivalent.
//!
//! - [`VisitOption::Skip`] / [`Controller::skip`] on `enter` - do not visit
//!   children; `leave` still fires for the node
//! - [`VisitOption::Break`] / [`Controller::stop`] - stop the traversal
//! - [`VisitOption::Replace`] on `leave` - substitute the node (replace mode)
//! - [`Controller::remove`] - remove the node from its parent (replace mode)
//!
//! # Examples
//!
//! ## Skipping Function Bodies
//!
//! ```rust
//! use mergewalk_ast::{AstArena, Node, NodeType, Span};
//! use mergewalk_ast::visitor::{FnVisitor, VisitOption, traverse};
//!
//! let arena = AstArena::new();
//! let inner = arena.alloc_node(Node::new_identifier(Span::new(9, 10), "x"));
//! let body = arena.alloc_node(Node::new_parent(
//!     NodeType::BlockStatement,
//!     Span::new(8, 12),
//!     arena.alloc_children(&[inner]),
//! ));
//! let func = arena.alloc_node(Node::new_parent(
//!     NodeType::FunctionExpression,
//!     Span::new(0, 12),
//!     arena.alloc_children(&[body]),
//! ));
//!
//! let mut seen = Vec::new();
//! let mut visitor = FnVisitor::new().on_enter(|_, node, _| {
//!     seen.push(node.node_type);
//!     if node.node_type == NodeType::BlockStatement {
//!         return Ok(VisitOption::Skip);
//!     }
//!     Ok(VisitOption::Continue)
//! });
//! traverse(func, &mut visitor).unwrap();
//! drop(visitor);
//!
//! assert_eq!(seen, vec![NodeType::FunctionExpression, NodeType::BlockStatement]);
//! ```

mod controller;
mod options;
mod visit;
mod walk;

pub use controller::{Controller, Signal};
pub use options::TraverseOptions;
pub use visit::{FnVisitor, VisitOption, VisitResult, Visitor};
pub use walk::{replace, replace_with, traverse, traverse_with};
