//! Arena allocator for tree nodes.
//!
//! Uses `bumpalo` for efficient bump allocation of nodes.
//! All nodes of a tree, including nodes created by visitors as
//! replacements, are allocated in the same arena and freed together.

use bumpalo::Bump;

use crate::Node;

/// Arena allocator for tree nodes.
///
/// This struct wraps `bumpalo::Bump` to provide arena allocation
/// for [`Node`]s. Using arena allocation:
///
/// - Minimizes allocation overhead
/// - Improves cache locality
/// - Gives every node a stable address, which is its identity
///
/// # Example
///
/// ```rust
/// use mergewalk_ast::{AstArena, Node, NodeType, Span};
///
/// let arena = AstArena::new();
///
/// let id = arena.alloc_node(Node::new_identifier(Span::new(0, 2), "cb"));
/// let children = arena.alloc_children(&[id]);
/// assert_eq!(children.len(), 1);
///
/// let s = arena.alloc_str("hello");
/// assert_eq!(s, "hello");
/// ```
pub struct AstArena {
    bump: Bump,
}

impl AstArena {
    /// Creates a new arena allocator.
    #[inline]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Creates a new arena with the specified initial capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// Allocates a value in the arena and returns a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Allocates a node in the arena.
    #[inline]
    pub fn alloc_node<'a>(&'a self, node: Node<'a>) -> &'a Node<'a> {
        self.bump.alloc(node)
    }

    /// Allocates a child list in the arena by copying the node references.
    #[inline]
    pub fn alloc_children<'a>(&'a self, children: &[&'a Node<'a>]) -> &'a [&'a Node<'a>] {
        self.bump.alloc_slice_copy(children)
    }

    /// Allocates a string slice in the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Returns the total bytes allocated in this arena.
    #[inline]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

impl Default for AstArena {
    fn default() -> Self {
        Self::new()
    }
}
