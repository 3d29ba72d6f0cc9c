//! Node definition.
//!
//! The tree node type traversed and rewritten by mergewalk visitors.

use std::cell::Cell;

use serde::Serialize;

use crate::{NodeType, Span};

/// A node in an ESTree-shaped tree.
///
/// Nodes are allocated in an [`AstArena`](crate::AstArena) and referenced
/// as `&'a Node<'a>`. A node's identity is its address: two references
/// denote the same node exactly when [`Node::ptr_eq`] holds.
///
/// The child list is held in a `Cell` so the traversal engine can splice
/// replacements into a parent without allocating a new parent. Children are
/// ordered as their ESTree properties are (e.g. a `CallExpression` lists its
/// callee before its arguments).
///
/// # Example
///
/// ```rust
/// use mergewalk_ast::{AstArena, Node, NodeType, Span};
///
/// let arena = AstArena::new();
///
/// // cb()
/// let callee = arena.alloc_node(Node::new_identifier(Span::new(0, 2), "cb"));
/// let call = arena.alloc_node(Node::new_parent(
///     NodeType::CallExpression,
///     Span::new(0, 4),
///     arena.alloc_children(&[callee]),
/// ));
///
/// assert_eq!(call.children().len(), 1);
/// assert_eq!(call.children()[0].name(), Some("cb"));
/// ```
#[derive(Debug)]
pub struct Node<'a> {
    /// The type of this node.
    pub node_type: NodeType,

    /// Byte span in the source text.
    pub span: Span,

    /// Node-specific scalar data.
    pub data: NodeData<'a>,

    children: Cell<&'a [&'a Node<'a>]>,
}

/// Scalar payload carried by some node types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NodeData<'a> {
    #[default]
    None,
    /// Identifier name.
    Name(&'a str),
    /// Literal source text, e.g. `10` or `'abc'`.
    Raw(&'a str),
    /// Operator of unary, binary, logical, assignment and update expressions.
    Operator(&'a str),
    /// `kind` of variable declarations, properties and method definitions.
    Kind(&'a str),
}

impl<'a> Serialize for Node<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let children = self.children();

        let mut len = 2; // type, range
        if !children.is_empty() {
            len += 1;
        }
        if self.data != NodeData::None {
            len += 1;
        }

        let mut state = serializer.serialize_struct("Node", len)?;

        state.serialize_field("type", &self.node_type)?;
        state.serialize_field("range", &[self.span.start, self.span.end])?;

        match self.data {
            NodeData::None => {}
            NodeData::Name(name) => state.serialize_field("name", name)?,
            NodeData::Raw(raw) => state.serialize_field("raw", raw)?,
            NodeData::Operator(op) => state.serialize_field("operator", op)?,
            NodeData::Kind(kind) => state.serialize_field("kind", kind)?,
        }

        if !children.is_empty() {
            state.serialize_field("children", children)?;
        }

        state.end()
    }
}

impl<'a> Node<'a> {
    /// Creates a new parent node with children.
    #[inline]
    pub const fn new_parent(
        node_type: NodeType,
        span: Span,
        children: &'a [&'a Node<'a>],
    ) -> Self {
        Self::with_parts(node_type, span, NodeData::None, children)
    }

    /// Creates a new leaf node (no children, no data).
    #[inline]
    pub const fn new_leaf(node_type: NodeType, span: Span) -> Self {
        Self::with_parts(node_type, span, NodeData::None, &[])
    }

    /// Creates a new `Identifier` node.
    #[inline]
    pub const fn new_identifier(span: Span, name: &'a str) -> Self {
        Self::with_parts(NodeType::Identifier, span, NodeData::Name(name), &[])
    }

    /// Creates a new `Literal` node from its raw source text.
    #[inline]
    pub const fn new_literal(span: Span, raw: &'a str) -> Self {
        Self::with_parts(NodeType::Literal, span, NodeData::Raw(raw), &[])
    }

    #[inline]
    const fn with_parts(
        node_type: NodeType,
        span: Span,
        data: NodeData<'a>,
        children: &'a [&'a Node<'a>],
    ) -> Self {
        Self {
            node_type,
            span,
            data,
            children: Cell::new(children),
        }
    }

    /// Returns this node with `data` attached.
    #[inline]
    pub fn with_data(mut self, data: NodeData<'a>) -> Self {
        self.data = data;
        self
    }

    /// Returns the current children of this node.
    #[inline]
    pub fn children(&self) -> &'a [&'a Node<'a>] {
        self.children.get()
    }

    /// Replaces the child list of this node in place.
    ///
    /// The node keeps its identity; only the list it points at changes.
    #[inline]
    pub fn set_children(&self, children: &'a [&'a Node<'a>]) {
        self.children.set(children);
    }

    /// Returns true if this node has children.
    #[inline]
    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    /// Returns the identifier name, if this node carries one.
    #[inline]
    pub fn name(&self) -> Option<&'a str> {
        match self.data {
            NodeData::Name(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the raw literal text, if this node carries one.
    #[inline]
    pub fn raw(&self) -> Option<&'a str> {
        match self.data {
            NodeData::Raw(raw) => Some(raw),
            _ => None,
        }
    }

    /// Returns true if `a` and `b` are the same node.
    #[inline]
    pub fn ptr_eq(a: &Node<'_>, b: &Node<'_>) -> bool {
        std::ptr::eq(a as *const Node<'_> as *const (), b as *const Node<'_> as *const ())
    }

    /// Compares two trees by type, data and children, ignoring spans.
    pub fn same_shape(&self, other: &Node<'_>) -> bool {
        if self.node_type != other.node_type || !same_data(self.data, other.data) {
            return false;
        }
        let (ours, theirs) = (self.children(), other.children());
        ours.len() == theirs.len()
            && ours
                .iter()
                .zip(theirs.iter())
                .all(|(left, right)| left.same_shape(right))
    }
}

fn same_data(left: NodeData<'_>, right: NodeData<'_>) -> bool {
    match (left, right) {
        (NodeData::None, NodeData::None) => true,
        (NodeData::Name(a), NodeData::Name(b))
        | (NodeData::Raw(a), NodeData::Raw(b))
        | (NodeData::Operator(a), NodeData::Operator(b))
        | (NodeData::Kind(a), NodeData::Kind(b)) => a == b,
        _ => false,
    }
}
