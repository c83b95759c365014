use std::sync::Arc;

use crate::catalog::CardRecord;
use crate::config::Config;
use crate::llm_client::TextCompletion;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Card catalog, loaded once at startup and never mutated.
    pub catalog: Arc<Vec<CardRecord>>,
    /// Pluggable completion backend. Default: `GeminiClient`; tests swap in stubs.
    pub llm: Arc<dyn TextCompletion>,
    #[allow(dead_code)]
    pub config: Config,
}
