use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

use crate::actions::Action;
use crate::dispatcher::{Dispatcher, Envelope};
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::scheduler::{to_time_delta, Clock, DeferredQueue};
use crate::state::AppState;

/// Store - holds application state and manages the Redux loop
///
/// All state changes go through `dispatch`. Deferred actions wait in the
/// store's queue until `tick` finds them due on the store clock.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    inbox: Receiver<Envelope>,
    deferred: DeferredQueue,
    clock: Arc<dyn Clock>,
}

impl Store {
    pub fn new(initial_state: AppState, clock: Arc<dyn Clock>) -> Self {
        let (tx, inbox) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(tx),
            inbox,
            deferred: DeferredQueue::new(),
            clock,
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Number of deferred actions still waiting
    pub fn pending(&self) -> usize {
        self.deferred.len()
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&mut self, action: Action) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, send to reducer
        if should_reduce {
            self.state = reduce(self.state.clone(), &action);
        }

        // Process any actions dispatched by middleware
        self.drain();
    }

    /// Dispatch every deferred action that is due, returns how many ran
    pub fn tick(&mut self) -> usize {
        let due = self.deferred.take_due(self.clock.now());
        let count = due.len();
        for action in due {
            self.dispatch(action);
        }
        count
    }

    fn drain(&mut self) {
        while let Ok(envelope) = self.inbox.try_recv() {
            match envelope {
                Envelope::Now(action) => self.dispatch(action),
                Envelope::After {
                    delay,
                    ticket,
                    action,
                } => {
                    let due = self.clock.now() + to_time_delta(delay);
                    self.deferred.schedule(ticket, due, action);
                }
            }
        }
    }
}
