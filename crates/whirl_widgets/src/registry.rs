//! Explicit spinner registration
//!
//! Hosts enumerate their spinner elements and register one controller per
//! element. Every operation is addressable by the returned id, so the host's
//! input and transition-end handlers only need to carry a `SpinnerId`.
//! Registration is explicit; nothing scans the host environment on startup.

use slotmap::{new_key_type, SlotMap};

use crate::spinner::Spinner;

new_key_type! {
    /// Handle to a registered spinner
    pub struct SpinnerId;
}

/// Registry of live spinner instances
#[derive(Default)]
pub struct SpinnerRegistry {
    spinners: SlotMap<SpinnerId, Spinner>,
}

impl SpinnerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a spinner and get its id
    pub fn register(&mut self, spinner: Spinner) -> SpinnerId {
        let id = self.spinners.insert(spinner);
        tracing::debug!(?id, "spinner registered");
        id
    }

    /// Remove a spinner, returning it if it was registered.
    ///
    /// Removal while a spin is in flight cancels it: the completion callback
    /// for that spin will never fire.
    pub fn remove(&mut self, id: SpinnerId) -> Option<Spinner> {
        let removed = self.spinners.remove(id);
        if removed.is_some() {
            tracing::debug!(?id, "spinner removed");
        }
        removed
    }

    /// Look up a spinner
    pub fn get(&self, id: SpinnerId) -> Option<&Spinner> {
        self.spinners.get(id)
    }

    /// Look up a spinner mutably
    pub fn get_mut(&mut self, id: SpinnerId) -> Option<&mut Spinner> {
        self.spinners.get_mut(id)
    }

    /// Spin a registered spinner.
    ///
    /// Returns `false` for unknown ids and for spinners with a transition
    /// already in flight.
    pub fn spin(&mut self, id: SpinnerId) -> bool {
        match self.spinners.get_mut(id) {
            Some(spinner) => spinner.spin(),
            None => false,
        }
    }

    /// Deliver the embedding's transition-end signal to a spinner
    pub fn finish_transition(&mut self, id: SpinnerId) {
        if let Some(spinner) = self.spinners.get_mut(id) {
            spinner.finish_transition();
        }
    }

    /// Number of registered spinners
    pub fn len(&self) -> usize {
        self.spinners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spinners.is_empty()
    }

    /// Iterate over registered spinners
    pub fn iter(&self) -> impl Iterator<Item = (SpinnerId, &Spinner)> {
        self.spinners.iter()
    }
}
