//! Controller handed to visitor callbacks.

use crate::{Node, NodeType};

/// Control notification sent through [`Controller::notify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// Do not visit the children of the current node.
    ///
    /// Only meaningful during `enter`; during `leave` there is nothing
    /// left to skip and the signal has no effect.
    Skip,

    /// Stop the traversal.
    Break,

    /// Remove the current node from its parent (replace mode only).
    Remove,
}

/// Per-call handle passed to [`Visitor`](super::Visitor) callbacks.
///
/// The handle exposes where the traversal currently is and accepts control
/// notifications. Only [`current`](Controller::current),
/// [`parents`](Controller::parents) and [`notify`](Controller::notify) are
/// required; every other method is expressed through them, so a wrapper
/// that intercepts `notify` automatically intercepts `skip`, `stop` and
/// `remove` too.
pub trait Controller<'a> {
    /// Returns the node whose callback is running.
    fn current(&self) -> &'a Node<'a>;

    /// Returns the ancestors of the current node, root first.
    fn parents(&self) -> &[&'a Node<'a>];

    /// Sends a control notification for the current node.
    fn notify(&mut self, signal: Signal);

    /// Returns the direct parent of the current node.
    #[inline]
    fn parent(&self) -> Option<&'a Node<'a>> {
        self.parents().last().copied()
    }

    /// Returns the type of the current node.
    #[inline]
    fn node_type(&self) -> NodeType {
        self.current().node_type
    }

    /// Returns the number of ancestors of the current node.
    #[inline]
    fn depth(&self) -> usize {
        self.parents().len()
    }

    /// Notifies [`Signal::Skip`].
    #[inline]
    fn skip(&mut self) {
        self.notify(Signal::Skip);
    }

    /// Notifies [`Signal::Break`].
    #[inline]
    fn stop(&mut self) {
        self.notify(Signal::Break);
    }

    /// Notifies [`Signal::Remove`].
    #[inline]
    fn remove(&mut self) {
        self.notify(Signal::Remove);
    }
}

/// Controller used by the engine itself.
///
/// Records the last notified signal so the walker can act on it once the
/// callback returns.
#[derive(Debug)]
pub(crate) struct HostController<'c, 'a> {
    current: &'a Node<'a>,
    parents: &'c [&'a Node<'a>],
    signal: Option<Signal>,
}

impl<'c, 'a> HostController<'c, 'a> {
    pub(crate) fn new(current: &'a Node<'a>, parents: &'c [&'a Node<'a>]) -> Self {
        Self {
            current,
            parents,
            signal: None,
        }
    }

    pub(crate) fn signal(&self) -> Option<Signal> {
        self.signal
    }
}

impl<'c, 'a> Controller<'a> for HostController<'c, 'a> {
    fn current(&self) -> &'a Node<'a> {
        self.current
    }

    fn parents(&self) -> &[&'a Node<'a>] {
        self.parents
    }

    fn notify(&mut self, signal: Signal) {
        self.signal = Some(signal);
    }
}
