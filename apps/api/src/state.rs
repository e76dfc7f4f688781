use std::sync::Arc;

use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no API key is configured; parse requests then fail with
    /// a configuration error instead of the process refusing to start.
    pub completion: Option<Arc<dyn CompletionService>>,
}
