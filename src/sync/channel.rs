//! Outbound side of the shared goto channel.

use super::event::GotoEvent;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Fire-and-forget sink for goto announcements.
///
/// The inbound side is the embedding layer's job: every message received
/// from the transport is handed to [`Synchronizer::on_goto`].
///
/// Any `FnMut(&GotoEvent)` closure is a channel.
///
/// [`Synchronizer::on_goto`]: crate::sync::Synchronizer::on_goto
pub trait GotoChannel {
    fn emit_goto(&mut self, event: &GotoEvent);
}

impl<F> GotoChannel for F
where
    F: FnMut(&GotoEvent),
{
    fn emit_goto(&mut self, event: &GotoEvent) {
        self(event)
    }
}

/// In-process channel that queues every emitted event.
///
/// Clones share the same queue. Draining the queue and handing the events
/// to [`Synchronizer::on_goto`] on each linked viewer plays the part of a
/// broadcasting server, including the echo back to the sender.
///
/// # Example
///
/// ```rust
/// use stepsync::sync::{GotoChannel, GotoEvent, MemoryChannel};
///
/// let channel = MemoryChannel::new();
/// let mut sender = channel.clone();
///
/// sender.emit_goto(&GotoEvent::new("b", None));
///
/// assert_eq!(channel.pending(), 1);
/// let events = channel.drain();
/// assert_eq!(events[0].step, "b");
/// assert_eq!(channel.pending(), 0);
/// ```
///
/// [`Synchronizer::on_goto`]: crate::sync::Synchronizer::on_goto
#[derive(Clone, Debug, Default)]
pub struct MemoryChannel {
    queue: Rc<RefCell<VecDeque<GotoEvent>>>,
}

impl MemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every queued event, oldest first.
    pub fn drain(&self) -> Vec<GotoEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }

    /// Take the oldest queued event.
    pub fn pop(&self) -> Option<GotoEvent> {
        self.queue.borrow_mut().pop_front()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl GotoChannel for MemoryChannel {
    fn emit_goto(&mut self, event: &GotoEvent) {
        tracing::trace!(step = %event.step, "queued goto event");
        self.queue.borrow_mut().push_back(event.clone());
    }
}
