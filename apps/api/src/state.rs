use std::sync::Arc;

use crate::assessment::store::SessionStore;
use crate::llm_client::GuidanceGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// In-memory session registry; all state is lost on restart.
    pub sessions: SessionStore,
    /// Pluggable guidance generator. Production: `GeminiClient`. Tests swap
    /// in a scripted generator.
    pub generator: Arc<dyn GuidanceGenerator>,
}
