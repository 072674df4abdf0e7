use crate::actions::Action;
use crate::dispatcher::{Dispatcher, Envelope};
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Store - holds application state and manages the Redux loop
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: UnboundedReceiver<Envelope>,
    in_flight: Arc<AtomicUsize>,
}

impl Store {
    /// Create a store whose effects run on `runtime`
    pub fn new(initial_state: AppState, runtime: Handle) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let in_flight = Arc::new(AtomicUsize::new(0));
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx, runtime, Arc::clone(&in_flight)),
            action_rx,
            in_flight,
        }
    }

    /// Add middleware to the store (runs in insertion order)
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Effects that have not settled yet
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Process an action, then everything middleware dispatched because of it
    pub fn dispatch(&mut self, action: Action) {
        self.process(action);
        self.drain();
    }

    /// Process every action that is already waiting in the channel
    ///
    /// Called once per frame by the UI loop to pick up settled effects.
    pub fn drain(&mut self) {
        while let Ok(envelope) = self.action_rx.try_recv() {
            self.receive(envelope);
        }
    }

    /// Wait until no effect is in flight, processing results as they arrive
    #[cfg(test)]
    pub async fn settle(&mut self) {
        loop {
            self.drain();
            if self.in_flight() == 0 {
                break;
            }
            match self.action_rx.recv().await {
                Some(envelope) => self.receive(envelope),
                None => break,
            }
        }
    }

    fn receive(&mut self, envelope: Envelope) {
        if envelope.settles_effect {
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
        }
        if !matches!(envelope.action, Action::None) {
            self.process(envelope.action);
        }
    }

    /// Run the middleware chain and, unless consumed, the reducer
    fn process(&mut self, action: Action) {
        let mut should_reduce = true;

        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        if should_reduce {
            let state = std::mem::take(&mut self.state);
            self.state = reduce(state, &action);
        }
    }
}
