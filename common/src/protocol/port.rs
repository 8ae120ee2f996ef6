use std::cell::RefCell;
use std::rc::Rc;

use tokio::sync::mpsc::UnboundedSender;

use super::events::Event;
use crate::log_warn;

/// One-way event sink. Sending takes ownership of the event, never blocks
/// and never reports failure to the sender.
pub trait Port {
    fn send(&self, event: Event);
}

impl<P: Port + ?Sized> Port for &P {
    fn send(&self, event: Event) {
        (**self).send(event)
    }
}

impl<P: Port + ?Sized> Port for Rc<P> {
    fn send(&self, event: Event) {
        (**self).send(event)
    }
}

impl<P: Port + ?Sized> Port for Box<P> {
    fn send(&self, event: Event) {
        (**self).send(event)
    }
}

/// Adapts any `Fn(Event)` into a port.
pub struct FnPort<F>(pub F);

impl<F: Fn(Event)> Port for FnPort<F> {
    fn send(&self, event: Event) {
        (self.0)(event)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NullPort;

impl Port for NullPort {
    fn send(&self, _event: Event) {}
}

/// Keeps every event in arrival order.
#[derive(Debug, Default)]
pub struct RecordingPort {
    events: RefCell<Vec<Event>>,
}

impl RecordingPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn take(&self) -> Vec<Event> {
        self.events.borrow_mut().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl Port for RecordingPort {
    fn send(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

/// Forwards events into an unbounded tokio channel.
#[derive(Clone, Debug)]
pub struct ChannelPort {
    name: &'static str,
    sender: UnboundedSender<Event>,
}

impl ChannelPort {
    pub fn new(name: &'static str, sender: UnboundedSender<Event>) -> Self {
        Self { name, sender }
    }
}

impl Port for ChannelPort {
    fn send(&self, event: Event) {
        if let Err(err) = self.sender.send(event) {
            log_warn!(
                "{} port closed, dropping {}",
                self.name,
                err.0.name()
            );
        }
    }
}
