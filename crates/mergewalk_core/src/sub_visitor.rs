//! Per-visitor bookkeeping.

use mergewalk_ast::{Node, Signal};
use tracing::debug;

/// Which callback of a visitor is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Enter,
    Leave,
}

/// Traversal state of one visitor inside a [`MergedVisitor`](crate::MergedVisitor).
///
/// A visitor is either running normally, skipping the subtree rooted at
/// `skip_from`, or broken. Broken is final for the rest of the traversal.
#[derive(Debug, Clone)]
pub struct SubVisitorState<'a> {
    /// Position of the visitor in the composition, used in log output.
    index: usize,
    skip_from: Option<&'a Node<'a>>,
    broken: bool,
}

impl<'a> SubVisitorState<'a> {
    /// Creates the state of a visitor that has not seen any node yet.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            skip_from: None,
            broken: false,
        }
    }

    /// Returns true once the visitor has asked to break.
    #[inline]
    pub fn is_broken(&self) -> bool {
        self.broken
    }

    /// Returns the node whose subtree the visitor is skipping.
    #[inline]
    pub fn skip_from(&self) -> Option<&'a Node<'a>> {
        self.skip_from
    }

    /// Returns true if the visitor's callbacks should run for `node`.
    ///
    /// While skipping, only the node the skip started from is active, so
    /// that its `leave` still runs.
    pub fn is_active(&self, node: &Node<'_>) -> bool {
        if self.broken {
            return false;
        }
        match self.skip_from {
            Some(from) => Node::ptr_eq(from, node),
            None => true,
        }
    }

    /// Applies a control signal raised by the visitor while visiting `node`.
    ///
    /// `Skip` only takes effect during `enter`; during `leave` the subtree
    /// is already done. Signals other than `Skip` and `Break` do not concern
    /// this state.
    pub fn on_control_signal(&mut self, signal: Signal, phase: Phase, node: &'a Node<'a>) {
        match (signal, phase) {
            (Signal::Skip, Phase::Enter) => {
                debug!("Visitor #{} skipping children of {}", self.index, node.node_type);
                self.skip_from = Some(node);
            }
            (Signal::Skip, Phase::Leave) => {}
            (Signal::Break, _) => {
                debug!("Visitor #{} broke on {}", self.index, node.node_type);
                self.broken = true;
            }
            (Signal::Remove, _) => {}
        }
    }

    /// Ends a skip whose start node is neither `node` nor one of its
    /// `ancestors`.
    ///
    /// That happens when the start node was removed from the tree after the
    /// skip began: its `leave` never runs, so [`on_leave_entry`](Self::on_leave_entry)
    /// cannot end the skip.
    pub fn release_stale_skip(&mut self, node: &Node<'_>, ancestors: &[&'a Node<'a>]) {
        let Some(from) = self.skip_from else {
            return;
        };
        if Node::ptr_eq(from, node) || ancestors.iter().any(|a| Node::ptr_eq(from, a)) {
            return;
        }
        debug!(
            "Visitor #{} resuming at {}, {} is no longer in the tree",
            self.index, node.node_type, from.node_type
        );
        self.skip_from = None;
    }

    /// Ends a skip that started at `node`. Called before `node`'s `leave`.
    pub fn on_leave_entry(&mut self, node: &Node<'_>) {
        if self.skip_from.is_some_and(|from| Node::ptr_eq(from, node)) {
            debug!("Visitor #{} resuming after {}", self.index, node.node_type);
            self.skip_from = None;
        }
    }
}
