//! Dispatcher for middleware action dispatch
//!
//! Actions dispatched through the Dispatcher re-enter the middleware chain
//! from the beginning. The store drains them right after the action that
//! caused them, so a `Pending` phase dispatched by middleware is reduced
//! before `Store::dispatch` returns.
//!
//! Middleware also uses the Dispatcher to spawn effects: async tasks that
//! settle into exactly one action. The store counts effects in flight so
//! callers can wait for all of them (`Store::settle`).

use crate::actions::Action;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

/// An action on its way back to the store
#[derive(Debug)]
pub struct Envelope {
    pub action: Action,
    /// Sent by an effect as its final result
    pub settles_effect: bool,
}

/// Dispatcher for sending actions through the middleware chain
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: UnboundedSender<Envelope>,
    runtime: Handle,
    in_flight: Arc<AtomicUsize>,
}

impl Dispatcher {
    pub fn new(
        action_tx: UnboundedSender<Envelope>,
        runtime: Handle,
        in_flight: Arc<AtomicUsize>,
    ) -> Self {
        Self {
            action_tx,
            runtime,
            in_flight,
        }
    }

    /// Dispatch an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(Envelope {
            action,
            settles_effect: false,
        }) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }

    /// Run an effect on the runtime; its output is dispatched when it settles
    ///
    /// The effect counts as in flight from this call until the store has
    /// received its result. An effect that panics or is dropped settles
    /// with `Action::None`.
    pub fn spawn<F>(&self, effect: F)
    where
        F: Future<Output = Action> + Send + 'static,
    {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let guard = EffectGuard {
            action_tx: self.action_tx.clone(),
            settled: false,
        };
        self.runtime.spawn(async move {
            let mut guard = guard;
            let action = effect.await;
            guard.settle(action);
        });
    }
}

/// Makes sure every spawned effect sends exactly one settling message
struct EffectGuard {
    action_tx: UnboundedSender<Envelope>,
    settled: bool,
}

impl EffectGuard {
    fn settle(&mut self, action: Action) {
        self.settled = true;
        if self
            .action_tx
            .send(Envelope {
                action,
                settles_effect: true,
            })
            .is_err()
        {
            log::warn!("Dispatcher: store is gone, dropping effect result");
        }
    }
}

impl Drop for EffectGuard {
    fn drop(&mut self) {
        if !self.settled {
            log::error!("Effect ended without a result");
            self.settle(Action::None);
        }
    }
}
