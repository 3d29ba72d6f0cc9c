//! Controller handed to each composed visitor.

use mergewalk_ast::{Controller, Node, Signal};

use crate::sub_visitor::{Phase, SubVisitorState};

/// Wraps the engine's controller for one composed visitor.
///
/// `Skip` and `Break` are kept inside the visitor's own state, so one
/// visitor skipping or breaking never affects the others or the engine.
/// Every other signal goes to the engine unchanged, as do `current` and
/// `parents`.
pub(crate) struct ScopedController<'c, 'a, C>
where
    C: Controller<'a> + ?Sized,
{
    host: &'c mut C,
    state: &'c mut SubVisitorState<'a>,
    phase: Phase,
}

impl<'c, 'a, C> ScopedController<'c, 'a, C>
where
    C: Controller<'a> + ?Sized,
{
    pub(crate) fn new(host: &'c mut C, state: &'c mut SubVisitorState<'a>, phase: Phase) -> Self {
        Self { host, state, phase }
    }
}

impl<'c, 'a, C> Controller<'a> for ScopedController<'c, 'a, C>
where
    C: Controller<'a> + ?Sized,
{
    fn current(&self) -> &'a Node<'a> {
        self.host.current()
    }

    fn parents(&self) -> &[&'a Node<'a>] {
        self.host.parents()
    }

    fn notify(&mut self, signal: Signal) {
        match signal {
            Signal::Skip | Signal::Break => {
                let current = self.host.current();
                self.state.on_control_signal(signal, self.phase, current);
            }
            other => self.host.notify(other),
        }
    }
}
