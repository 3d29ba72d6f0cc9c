//! Walk functions for tree traversal.
//!
//! The traversal order is depth-first:
//!
//! - **Pre-order**: `enter` is called before descending into children
//! - **Post-order**: `leave` is called after all children have been visited
//! - **List order**: children are visited in the order of [`Node::children`]
//!
//! [`traverse`] only observes the tree. [`replace`] additionally applies
//! [`VisitOption::Replace`] and [`Signal::Remove`], splicing the result into
//! the parent's child list in place.

use std::ops::ControlFlow;

use tracing::{debug, trace};

use crate::{AstArena, Node, TraverseError};

use super::controller::{HostController, Signal};
use super::options::TraverseOptions;
use super::visit::{VisitOption, Visitor};

/// Traverses `root` with default options.
///
/// Replacements and removals requested by the visitor are ignored.
pub fn traverse<'a, V>(root: &'a Node<'a>, visitor: &mut V) -> Result<(), TraverseError>
where
    V: Visitor<'a> + ?Sized,
{
    traverse_with(root, visitor, &TraverseOptions::default())
}

/// Traverses `root` with the given options.
pub fn traverse_with<'a, V>(
    root: &'a Node<'a>,
    visitor: &mut V,
    options: &TraverseOptions,
) -> Result<(), TraverseError>
where
    V: Visitor<'a> + ?Sized,
{
    let mut walker = Walker::new(None, options);
    walker.walk_node(visitor, root, None)?;
    Ok(())
}

/// Traverses `root` with default options, applying replacements.
///
/// Returns the root of the resulting tree, which is `root` itself unless
/// the root node was replaced.
pub fn replace<'a, V>(
    arena: &'a AstArena,
    root: &'a Node<'a>,
    visitor: &mut V,
) -> Result<&'a Node<'a>, TraverseError>
where
    V: Visitor<'a> + ?Sized,
{
    replace_with(arena, root, visitor, &TraverseOptions::default())
}

/// Traverses `root` with the given options, applying replacements.
///
/// - `Replace(n)` from `leave` puts `n` in place of the node; `n` is not visited.
/// - `Replace(n)` from `enter` puts `n` in place of the node and walks `n`'s
///   children instead; `leave` is called with `n`.
/// - `Remove` drops the node from its parent's child list. Notified from
///   `enter`, the node's children and `leave` are not visited.
///
/// Replacements applied before a `Break` are kept.
pub fn replace_with<'a, V>(
    arena: &'a AstArena,
    root: &'a Node<'a>,
    visitor: &mut V,
    options: &TraverseOptions,
) -> Result<&'a Node<'a>, TraverseError>
where
    V: Visitor<'a> + ?Sized,
{
    let mut walker = Walker::new(Some(arena), options);
    match walker.walk_node(visitor, root, None)? {
        Outcome::Keep => Ok(root),
        Outcome::Replace(node) | Outcome::Break(node) => Ok(node),
        Outcome::Remove => Err(TraverseError::RootRemoved),
    }
}

/// What happened to a node slot after walking it.
enum Outcome<'a> {
    Keep,
    Replace(&'a Node<'a>),
    Remove,
    /// Traversal stopped; the slot holds the given node.
    Break(&'a Node<'a>),
}

#[derive(Clone, Copy)]
enum Phase {
    Enter,
    Leave,
}

struct Walker<'a, 'o> {
    /// Present in replace mode.
    arena: Option<&'a AstArena>,
    options: &'o TraverseOptions,
    /// Ancestors of the node being visited, root first.
    path: Vec<&'a Node<'a>>,
}

impl<'a, 'o> Walker<'a, 'o> {
    fn new(arena: Option<&'a AstArena>, options: &'o TraverseOptions) -> Self {
        Self {
            arena,
            options,
            path: Vec::new(),
        }
    }

    #[inline]
    fn replacing(&self) -> bool {
        self.arena.is_some()
    }

    fn execute<V>(
        &self,
        visitor: &mut V,
        phase: Phase,
        node: &'a Node<'a>,
        parent: Option<&'a Node<'a>>,
    ) -> Result<(VisitOption<'a>, Option<Signal>), TraverseError>
    where
        V: Visitor<'a> + ?Sized,
    {
        let mut controller = HostController::new(node, &self.path);
        let option = match phase {
            Phase::Enter => visitor.enter(&mut controller, node, parent)?,
            Phase::Leave => visitor.leave(&mut controller, node, parent)?,
        };
        Ok((option, controller.signal()))
    }

    fn walk_node<V>(
        &mut self,
        visitor: &mut V,
        original: &'a Node<'a>,
        parent: Option<&'a Node<'a>>,
    ) -> Result<Outcome<'a>, TraverseError>
    where
        V: Visitor<'a> + ?Sized,
    {
        if self.path.len() >= self.options.max_depth {
            return Err(TraverseError::DepthLimitExceeded {
                limit: self.options.max_depth,
            });
        }

        // Enter hook
        let (option, signal) = self.execute(visitor, Phase::Enter, original, parent)?;
        if matches!(option, VisitOption::Break) || signal == Some(Signal::Break) {
            debug!("Traversal stopped on entering {}", original.node_type);
            return Ok(Outcome::Break(original));
        }

        let mut node = original;
        if self.replacing() {
            if signal == Some(Signal::Remove) {
                trace!("Removing {} on enter", original.node_type);
                return Ok(Outcome::Remove);
            }
            if let VisitOption::Replace(replacement) = option {
                trace!(
                    "Replacing {} with {} on enter",
                    original.node_type, replacement.node_type
                );
                node = replacement;
            }
        }

        let skip = matches!(option, VisitOption::Skip) || signal == Some(Signal::Skip);
        if !skip && self.walk_children(visitor, node)?.is_break() {
            return Ok(Outcome::Break(node));
        }

        // Leave hook
        let (option, signal) = self.execute(visitor, Phase::Leave, node, parent)?;
        if matches!(option, VisitOption::Break) || signal == Some(Signal::Break) {
            debug!("Traversal stopped on leaving {}", node.node_type);
            return Ok(Outcome::Break(node));
        }

        if self.replacing() {
            if signal == Some(Signal::Remove) {
                trace!("Removing {} on leave", node.node_type);
                return Ok(Outcome::Remove);
            }
            if let VisitOption::Replace(replacement) = option {
                trace!(
                    "Replacing {} with {} on leave",
                    node.node_type, replacement.node_type
                );
                return Ok(Outcome::Replace(replacement));
            }
        }

        if Node::ptr_eq(node, original) {
            Ok(Outcome::Keep)
        } else {
            Ok(Outcome::Replace(node))
        }
    }

    fn walk_children<V>(
        &mut self,
        visitor: &mut V,
        node: &'a Node<'a>,
    ) -> Result<ControlFlow<()>, TraverseError>
    where
        V: Visitor<'a> + ?Sized,
    {
        let children = node.children();
        // Built lazily, on the first child that changes.
        let mut rebuilt: Option<Vec<&'a Node<'a>>> = None;
        let mut flow = ControlFlow::Continue(());

        self.path.push(node);
        for (index, &child) in children.iter().enumerate() {
            match self.walk_node(visitor, child, Some(node))? {
                Outcome::Keep => {
                    if let Some(list) = rebuilt.as_mut() {
                        list.push(child);
                    }
                }
                Outcome::Replace(replacement) => {
                    rebuilt
                        .get_or_insert_with(|| children[..index].to_vec())
                        .push(replacement);
                }
                Outcome::Remove => {
                    rebuilt.get_or_insert_with(|| children[..index].to_vec());
                }
                Outcome::Break(current) => {
                    if !Node::ptr_eq(current, child) || rebuilt.is_some() {
                        let list = rebuilt.get_or_insert_with(|| children[..index].to_vec());
                        list.push(current);
                        list.extend_from_slice(&children[index + 1..]);
                    }
                    flow = ControlFlow::Break(());
                    break;
                }
            }
        }
        self.path.pop();

        if let (Some(list), Some(arena)) = (rebuilt, self.arena) {
            node.set_children(arena.alloc_children(&list));
        }
        Ok(flow)
    }
}
