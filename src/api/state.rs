use std::sync::Arc;

use crate::services::Engine;

/// Shared application state
///
/// The engine is immutable after startup, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
}

impl AppState {
    /// Wraps a fully built engine
    pub fn new(engine: Engine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
