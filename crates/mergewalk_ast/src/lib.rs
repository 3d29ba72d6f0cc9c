//! # mergewalk_ast
//!
//! ESTree-shaped tree definitions and the traversal engine for mergewalk.
//!
//! ## Architecture
//!
//! - Uses `bumpalo` for Arena allocation (Oxc-like architecture)
//! - All nodes of one tree are allocated in a single arena
//! - Node identity is address identity, so nodes can be tracked across
//!   `enter` and `leave` without extra ids
//! - Child lists live in a `Cell`, which lets the engine replace or remove
//!   children in place while the parent keeps its identity
//!
//! ## Example
//!
//! ```rust
//! use mergewalk_ast::{AstArena, Node, NodeType, Span};
//! use mergewalk_ast::visitor::{FnVisitor, VisitOption, traverse};
//!
//! let arena = AstArena::new();
//! let callee = arena.alloc_node(Node::new_identifier(Span::new(0, 2), "cb"));
//! let call = arena.alloc_node(Node::new_parent(
//!     NodeType::CallExpression,
//!     Span::new(0, 4),
//!     arena.alloc_children(&[callee]),
//! ));
//!
//! let mut count = 0;
//! let mut counter = FnVisitor::new().on_enter(|_, _, _| {
//!     count += 1;
//!     Ok(VisitOption::Continue)
//! });
//! traverse(call, &mut counter).unwrap();
//! drop(counter);
//! assert_eq!(count, 2);
//! ```

mod arena;
mod error;
mod node;
mod node_type;
mod span;
pub mod visitor;

pub use arena::AstArena;
pub use error::TraverseError;
pub use node::{Node, NodeData};
pub use node_type::NodeType;
pub use span::Span;

// Re-export commonly used visitor items for convenience
pub use visitor::{Controller, Signal, VisitOption, VisitResult, Visitor};
