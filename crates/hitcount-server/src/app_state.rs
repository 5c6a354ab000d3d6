//! Shared application state.
//!
//! The counter store is a process-wide resource created once at startup and
//! injected here, so handlers receive it as an explicit dependency rather
//! than reaching for a global.

use std::sync::Arc;

use hitcount_core::CounterStore;

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn CounterStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn CounterStore {
        self.store.as_ref()
    }
}
