//! The merged visitor.

use mergewalk_ast::visitor::{replace, traverse};
use mergewalk_ast::{AstArena, Controller, Node, TraverseError, VisitOption, VisitResult, Visitor};
use tracing::debug;

use crate::scoped::ScopedController;
use crate::sub_visitor::{Phase, SubVisitorState};

/// A composed visitor and its state.
struct SubVisitor<'v, 'a> {
    visitor: Box<dyn Visitor<'a> + 'v>,
    state: SubVisitorState<'a>,
}

/// A single visitor that runs an ordered list of visitors in one pass.
///
/// - `enter` runs every visitor in list order, `leave` in reverse order.
/// - A visitor that skips a node stops receiving callbacks for that node's
///   descendants, but still gets `leave` for the node itself.
///   If another visitor removes that node on `enter`, the skip ends at the
///   next node outside the removed subtree.
/// - A visitor that breaks receives no more callbacks. The traversal and
///   the other visitors carry on.
/// - A replacement returned from `leave` is passed to the engine only when
///   exactly one visitor returned one for that node.
///
/// Skip and break state lives in the `MergedVisitor`, so a value is meant
/// for one traversal. [`traverse_merged`] and [`replace_merged`] build a
/// fresh one per call.
///
/// # Example
///
/// ```rust
/// use mergewalk_ast::visitor::{FnVisitor, VisitOption, traverse};
/// use mergewalk_ast::{AstArena, Node, NodeType, Span};
/// use mergewalk_core::MergedVisitor;
///
/// let arena = AstArena::new();
/// let callee = arena.alloc_node(Node::new_identifier(Span::new(0, 2), "cb"));
/// let call = arena.alloc_node(Node::new_parent(
///     NodeType::CallExpression,
///     Span::new(0, 4),
///     arena.alloc_children(&[callee]),
/// ));
///
/// let mut entered = 0;
/// let mut left = 0;
/// let mut merged = MergedVisitor::new()
///     .with(FnVisitor::new().on_enter(|_, _, _| {
///         entered += 1;
///         Ok(VisitOption::Continue)
///     }))
///     .with(FnVisitor::new().on_leave(|_, _, _| {
///         left += 1;
///         Ok(VisitOption::Continue)
///     }));
/// traverse(call, &mut merged).unwrap();
/// drop(merged);
///
/// assert_eq!((entered, left), (2, 2));
/// ```
#[derive(Default)]
pub struct MergedVisitor<'v, 'a> {
    visitors: Vec<SubVisitor<'v, 'a>>,
}

impl<'v, 'a> MergedVisitor<'v, 'a> {
    /// Creates a merged visitor with no visitors.
    pub fn new() -> Self {
        Self {
            visitors: Vec::new(),
        }
    }

    /// Appends a visitor and returns `self`.
    pub fn with<V>(mut self, visitor: V) -> Self
    where
        V: Visitor<'a> + 'v,
    {
        self.push(visitor);
        self
    }

    /// Appends a visitor.
    pub fn push<V>(&mut self, visitor: V)
    where
        V: Visitor<'a> + 'v,
    {
        self.push_boxed(Box::new(visitor));
    }

    fn push_boxed(&mut self, visitor: Box<dyn Visitor<'a> + 'v>) {
        let state = SubVisitorState::new(self.visitors.len());
        self.visitors.push(SubVisitor { visitor, state });
    }

    /// Returns the number of composed visitors.
    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    /// Returns true if no visitor has been composed.
    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }

    /// Returns the state of the visitor at `index`.
    pub fn state(&self, index: usize) -> Option<&SubVisitorState<'a>> {
        self.visitors.get(index).map(|sub| &sub.state)
    }
}

impl<'v, 'a> FromIterator<Box<dyn Visitor<'a> + 'v>> for MergedVisitor<'v, 'a> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Visitor<'a> + 'v>>,
    {
        let mut merged = Self::new();
        for visitor in iter {
            merged.push_boxed(visitor);
        }
        merged
    }
}

impl std::fmt::Debug for MergedVisitor<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MergedVisitor")
            .field(
                "states",
                &self.visitors.iter().map(|sub| &sub.state).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Composes `visitors`, in order, into one visitor.
pub fn compose<'v, 'a, I>(visitors: I) -> MergedVisitor<'v, 'a>
where
    I: IntoIterator<Item = Box<dyn Visitor<'a> + 'v>>,
{
    visitors.into_iter().collect()
}

/// Traverses `root` once with all `visitors`.
pub fn traverse_merged<'v, 'a, I>(root: &'a Node<'a>, visitors: I) -> Result<(), TraverseError>
where
    I: IntoIterator<Item = Box<dyn Visitor<'a> + 'v>>,
{
    let mut merged = compose(visitors);
    traverse(root, &mut merged)
}

/// Traverses `root` once with all `visitors`, applying replacements.
///
/// Returns the root of the resulting tree.
pub fn replace_merged<'v, 'a, I>(
    arena: &'a AstArena,
    root: &'a Node<'a>,
    visitors: I,
) -> Result<&'a Node<'a>, TraverseError>
where
    I: IntoIterator<Item = Box<dyn Visitor<'a> + 'v>>,
{
    let mut merged = compose(visitors);
    replace(arena, root, &mut merged)
}

impl<'v, 'a> Visitor<'a> for MergedVisitor<'v, 'a> {
    fn enter(
        &mut self,
        controller: &mut dyn Controller<'a>,
        node: &'a Node<'a>,
        parent: Option<&'a Node<'a>>,
    ) -> VisitResult<'a> {
        for SubVisitor { visitor, state } in self.visitors.iter_mut() {
            state.release_stale_skip(node, controller.parents());
            if !state.is_active(node) {
                continue;
            }

            let option = {
                let mut scoped = ScopedController::new(&mut *controller, state, Phase::Enter);
                visitor.enter(&mut scoped, node, parent)?
            };
            // A replacement from enter is not a decision of the composition.
            if let Some(signal) = option.signal() {
                state.on_control_signal(signal, Phase::Enter, node);
            }
        }
        Ok(VisitOption::Continue)
    }

    fn leave(
        &mut self,
        controller: &mut dyn Controller<'a>,
        node: &'a Node<'a>,
        parent: Option<&'a Node<'a>>,
    ) -> VisitResult<'a> {
        let mut candidates: Vec<&'a Node<'a>> = Vec::new();

        for SubVisitor { visitor, state } in self.visitors.iter_mut().rev() {
            if state.is_broken() {
                continue;
            }
            state.release_stale_skip(node, controller.parents());
            if !state.is_active(node) {
                continue;
            }
            state.on_leave_entry(node);

            let option = {
                let mut scoped = ScopedController::new(&mut *controller, state, Phase::Leave);
                visitor.leave(&mut scoped, node, parent)?
            };
            match option {
                VisitOption::Replace(replacement) => candidates.push(replacement),
                other => {
                    if let Some(signal) = other.signal() {
                        state.on_control_signal(signal, Phase::Leave, node);
                    }
                }
            }
        }

        match candidates.as_slice() {
            [] => Ok(VisitOption::Continue),
            [replacement] => Ok(VisitOption::Replace(*replacement)),
            conflicting => {
                debug!(
                    "Discarding {} conflicting replacements for {}",
                    conflicting.len(),
                    node.node_type
                );
                Ok(VisitOption::Continue)
            }
        }
    }
}
