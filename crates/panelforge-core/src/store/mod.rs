//! Reactive parameter store.
//!
//! Holds the single `PanelParams` record and notifies subscribers
//! synchronously whenever a mutation is committed. There is exactly one
//! logical writer (the UI thread), so no locking discipline is needed; the
//! store exists so the parameter record is explicitly owned and flows
//! store -> derived view instead of living in ambient shared state.

use crate::params::PanelParams;

type Observer = Box<dyn FnMut(&PanelParams)>;

pub struct ParameterStore {
    params: PanelParams,
    observers: Vec<Observer>,
    revision: u64,
}

impl ParameterStore {
    pub fn new(params: PanelParams) -> Self {
        Self {
            params,
            observers: Vec::new(),
            revision: 0,
        }
    }

    /// The latest committed parameter values.
    pub fn get(&self) -> PanelParams {
        self.params.clone()
    }

    pub fn params(&self) -> &PanelParams {
        &self.params
    }

    /// Bumped on every commit; consumers polling for changes compare this
    /// against the revision they last derived from.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Register an observer called synchronously with every committed value.
    /// Subscriptions live for the session; there is no unsubscribe.
    pub fn subscribe(&mut self, observer: impl FnMut(&PanelParams) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Apply a mutation and notify all observers with the committed value.
    pub fn update(&mut self, mutate: impl FnOnce(&mut PanelParams)) {
        mutate(&mut self.params);
        self.revision += 1;
        for observer in &mut self.observers {
            observer(&self.params);
        }
    }

    /// Replace the record wholesale if it differs from the current value.
    /// Returns whether a commit happened.
    pub fn set(&mut self, params: PanelParams) -> bool {
        if params == self.params {
            return false;
        }
        self.update(|current| *current = params);
        true
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new(PanelParams::default())
    }
}
