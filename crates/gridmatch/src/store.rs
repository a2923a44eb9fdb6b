//! The process-wide match store.
//!
//! One mutable cell holds the current [`MatchState`]; every dispatched
//! action runs the pure reducer against it serially under the lock, so
//! a transition fully completes before the next caller observes state.

use gridmatch_engine::{apply, Action, MatchState, Transition};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Observer called with each newly applied state.
pub type Observer = Box<dyn Fn(&MatchState) + Send>;

/// Holds the single live match state and replays actions against it.
#[derive(Clone)]
pub struct MatchStore {
    state: Arc<Mutex<MatchState>>,
    observers: Arc<Mutex<Vec<Observer>>>,
}

impl MatchStore {
    /// Creates a store seeded with the given state.
    #[instrument(skip(state))]
    pub fn new(state: MatchState) -> Self {
        info!("Creating match store");
        Self {
            state: Arc::new(Mutex::new(state)),
            observers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Dispatches an action through the reducer.
    ///
    /// On `Applied`, the store's state is replaced and observers are
    /// notified with the new value. On `Rejected`, the state is left
    /// untouched. Either way the outcome is returned so callers can
    /// distinguish "nothing happened" from "something happened".
    #[instrument(skip(self, action), fields(action = ?action))]
    pub fn dispatch(&self, action: Action) -> Transition {
        let mut state = self.state.lock().expect("store lock poisoned");
        let outcome = apply(&state, &action);

        match &outcome {
            Transition::Applied(next) => {
                *state = next.clone();
                debug!("Action applied");
                drop(state);
                self.notify(next);
            }
            Transition::Rejected(reason) => {
                warn!(%reason, "Action rejected");
            }
        }

        outcome
    }

    /// Registers an observer for applied transitions.
    #[instrument(skip(self, observer))]
    pub fn subscribe(&self, observer: impl Fn(&MatchState) + Send + 'static) {
        self.observers
            .lock()
            .expect("observer lock poisoned")
            .push(Box::new(observer));
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> MatchState {
        self.state.lock().expect("store lock poisoned").clone()
    }

    /// Replaces the state wholesale, bypassing the reducer.
    ///
    /// Used to hydrate from a persisted snapshot on startup.
    #[instrument(skip(self, state))]
    pub fn hydrate(&self, state: MatchState) {
        debug!("Hydrating store");
        *self.state.lock().expect("store lock poisoned") = state;
    }

    fn notify(&self, state: &MatchState) {
        for observer in self.observers.lock().expect("observer lock poisoned").iter() {
            observer(state);
        }
    }
}

impl std::fmt::Debug for MatchStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let observers = self
            .observers
            .lock()
            .map(|list| list.len())
            .unwrap_or_default();
        f.debug_struct("MatchStore")
            .field("state", &self.snapshot())
            .field("observers", &observers)
            .finish()
    }
}

impl Default for MatchStore {
    fn default() -> Self {
        Self::new(MatchState::default())
    }
}
