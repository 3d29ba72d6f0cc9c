//! Visitor trait and the closure-based visitor record.

use crate::{Node, TraverseError};

use super::controller::{Controller, Signal};

/// Decision returned from a visitor callback.
#[derive(Debug, Clone, Copy, Default)]
pub enum VisitOption<'a> {
    /// No decision; continue normally.
    #[default]
    Continue,

    /// Do not visit the children of this node. Inert when returned from `leave`.
    Skip,

    /// Stop the traversal.
    Break,

    /// Substitute this node with another one (replace mode).
    Replace(&'a Node<'a>),
}

impl<'a> VisitOption<'a> {
    /// Returns the control signal this option expresses, if any.
    ///
    /// `Continue` and `Replace` are not control signals.
    #[inline]
    pub fn signal(&self) -> Option<Signal> {
        match self {
            VisitOption::Skip => Some(Signal::Skip),
            VisitOption::Break => Some(Signal::Break),
            VisitOption::Continue | VisitOption::Replace(_) => None,
        }
    }

    /// Returns the replacement node, if this option carries one.
    #[inline]
    pub fn replacement(&self) -> Option<&'a Node<'a>> {
        match self {
            VisitOption::Replace(node) => Some(*node),
            _ => None,
        }
    }
}

/// Result type for visitor callbacks.
pub type VisitResult<'a> = Result<VisitOption<'a>, TraverseError>;

/// Visitor with `enter` and `leave` callbacks.
///
/// `enter` runs before a node's children are visited, `leave` after.
/// Both default to doing nothing, so implementors override only what they
/// need.
///
/// # Lifetime
///
/// The `'a` lifetime ties visited nodes to their arena allocator.
pub trait Visitor<'a> {
    /// Called before the children of `node` are visited.
    #[allow(unused_variables)]
    fn enter(
        &mut self,
        controller: &mut dyn Controller<'a>,
        node: &'a Node<'a>,
        parent: Option<&'a Node<'a>>,
    ) -> VisitResult<'a> {
        Ok(VisitOption::Continue)
    }

    /// Called after the children of `node` have been visited.
    #[allow(unused_variables)]
    fn leave(
        &mut self,
        controller: &mut dyn Controller<'a>,
        node: &'a Node<'a>,
        parent: Option<&'a Node<'a>>,
    ) -> VisitResult<'a> {
        Ok(VisitOption::Continue)
    }
}

impl<'a, V> Visitor<'a> for &mut V
where
    V: Visitor<'a> + ?Sized,
{
    #[inline]
    fn enter(
        &mut self,
        controller: &mut dyn Controller<'a>,
        node: &'a Node<'a>,
        parent: Option<&'a Node<'a>>,
    ) -> VisitResult<'a> {
        (**self).enter(controller, node, parent)
    }

    #[inline]
    fn leave(
        &mut self,
        controller: &mut dyn Controller<'a>,
        node: &'a Node<'a>,
        parent: Option<&'a Node<'a>>,
    ) -> VisitResult<'a> {
        (**self).leave(controller, node, parent)
    }
}

impl<'a, V> Visitor<'a> for Box<V>
where
    V: Visitor<'a> + ?Sized,
{
    #[inline]
    fn enter(
        &mut self,
        controller: &mut dyn Controller<'a>,
        node: &'a Node<'a>,
        parent: Option<&'a Node<'a>>,
    ) -> VisitResult<'a> {
        (**self).enter(controller, node, parent)
    }

    #[inline]
    fn leave(
        &mut self,
        controller: &mut dyn Controller<'a>,
        node: &'a Node<'a>,
        parent: Option<&'a Node<'a>>,
    ) -> VisitResult<'a> {
        (**self).leave(controller, node, parent)
    }
}

type Callback<'v, 'a> = Box<
    dyn FnMut(&mut dyn Controller<'a>, &'a Node<'a>, Option<&'a Node<'a>>) -> VisitResult<'a> + 'v,
>;

/// A visitor built from optional `enter` and `leave` closures.
///
/// A callback that is never set is a no-op; the choice is made once, when
/// the visitor is built, not on every dispatch.
///
/// # Example
///
/// ```rust
/// use mergewalk_ast::NodeType;
/// use mergewalk_ast::visitor::{Controller, FnVisitor, VisitOption};
///
/// let visitor = FnVisitor::new().on_enter(|controller, node, _| {
///     if node.node_type == NodeType::ForStatement {
///         controller.skip();
///     }
///     Ok(VisitOption::Continue)
/// });
/// # let _ = visitor;
/// ```
pub struct FnVisitor<'v, 'a> {
    enter: Callback<'v, 'a>,
    leave: Callback<'v, 'a>,
}

impl<'v, 'a> FnVisitor<'v, 'a> {
    /// Creates a visitor whose callbacks both do nothing.
    pub fn new() -> Self {
        Self {
            enter: noop(),
            leave: noop(),
        }
    }

    /// Sets the `enter` callback.
    pub fn on_enter<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut dyn Controller<'a>, &'a Node<'a>, Option<&'a Node<'a>>) -> VisitResult<'a>
            + 'v,
    {
        self.enter = Box::new(callback);
        self
    }

    /// Sets the `leave` callback.
    pub fn on_leave<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut dyn Controller<'a>, &'a Node<'a>, Option<&'a Node<'a>>) -> VisitResult<'a>
            + 'v,
    {
        self.leave = Box::new(callback);
        self
    }
}

impl Default for FnVisitor<'_, '_> {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FnVisitor<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnVisitor").finish_non_exhaustive()
    }
}

fn noop<'v, 'a>() -> Callback<'v, 'a> {
    Box::new(|_, _, _| Ok(VisitOption::Continue))
}

impl<'v, 'a> Visitor<'a> for FnVisitor<'v, 'a> {
    #[inline]
    fn enter(
        &mut self,
        controller: &mut dyn Controller<'a>,
        node: &'a Node<'a>,
        parent: Option<&'a Node<'a>>,
    ) -> VisitResult<'a> {
        (self.enter)(controller, node, parent)
    }

    #[inline]
    fn leave(
        &mut self,
        controller: &mut dyn Controller<'a>,
        node: &'a Node<'a>,
        parent: Option<&'a Node<'a>>,
    ) -> VisitResult<'a> {
        (self.leave)(controller, node, parent)
    }
}
