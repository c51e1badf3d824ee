//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to dispatch actions that should re-enter the middleware
//! chain, it uses the Dispatcher. Actions are queued on a channel and drained by
//! the `Store` once the current action has been handled.
//!
//! Deferred actions go through the same channel; the store schedules them on
//! its clock and dispatches them from `Store::tick`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use crate::actions::Action;
use crate::scheduler::Ticket;

/// What the store receives from the dispatcher
#[derive(Debug)]
pub enum Envelope {
    /// Dispatch as soon as the current action is done
    Now(Action),
    /// Dispatch once `delay` has passed on the store clock
    After {
        delay: Duration,
        ticket: Ticket,
        action: Action,
    },
}

/// Dispatcher for sending actions through the middleware chain
#[derive(Clone)]
pub struct Dispatcher {
    tx: Sender<Envelope>,
    next_ticket: Arc<AtomicU64>,
}

impl Dispatcher {
    pub fn new(tx: Sender<Envelope>) -> Self {
        Self {
            tx,
            next_ticket: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Dispatch an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.tx.send(Envelope::Now(action)) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }

    /// Dispatch an action after a fixed delay
    ///
    /// Returns immediately with the ticket of the pending action. The action is
    /// always delivered, there is no cancellation.
    pub fn dispatch_after(&self, delay: Duration, action: Action) -> Ticket {
        let ticket = Ticket(self.next_ticket.fetch_add(1, Ordering::Relaxed));
        if let Err(e) = self.tx.send(Envelope::After {
            delay,
            ticket,
            action,
        }) {
            log::error!("Dispatcher: failed to schedule action: {}", e);
        }
        ticket
    }
}
