use std::sync::Arc;

use crate::llm_client::ModelProvider;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Model provider used for resume extraction. Default: `GeminiClient`.
    pub provider: Arc<dyn ModelProvider>,
}
