use strum::{EnumDiscriminants, IntoStaticStr, VariantArray};

use crate::scanner::Match;

/// Notifications sent by a [`Board`](crate::Board) to its listeners.
///
/// Each event's [`BoardEventKind`] is available through `BoardEventKind::from(&event)`.
#[derive(Clone, Debug, EnumDiscriminants, Eq, PartialEq)]
#[strum_discriminants(name(BoardEventKind), derive(Hash, IntoStaticStr, VariantArray))]
pub enum BoardEvent<T> {
    /// Reserved; never sent.
    Move,
    /// Reserved; never sent.
    Swap,
    /// A match exists on the board after a move, or would exist after a one row fall.
    Match(Match<T>),
    /// A move produced no cascade; whatever clears and refills the board may do so now.
    Refill,
}

/// Receiver of [`BoardEvent`]s. Any `FnMut(&BoardEvent<T>)` closure is a listener.
pub trait Listener<T> {
    /// Called synchronously for every event, in the order events are produced.
    fn notify(&mut self, event: &BoardEvent<T>);
}

impl<T, F> Listener<T> for F
where
    F: FnMut(&BoardEvent<T>),
{
    fn notify(&mut self, event: &BoardEvent<T>) {
        self(event)
    }
}

/// Listeners in registration order.
pub(crate) struct Listeners<T> {
    registered: Vec<Box<dyn Listener<T>>>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self { registered: Vec::new() }
    }
}

impl<T> Listeners<T> {
    pub(crate) fn add(&mut self, listener: Box<dyn Listener<T>>) {
        self.registered.push(listener)
    }

    /// Deliver each event to every listener before moving on to the next event.
    pub(crate) fn broadcast<'e>(&mut self, events: impl IntoIterator<Item = &'e BoardEvent<T>>)
    where
        T: 'e,
    {
        for event in events {
            self.registered.iter_mut().for_each(|listener| listener.notify(event));
        }
    }
}
