use std::sync::Arc;

use crate::llm_client::CompletionProvider;
use crate::scholarships::ScholarshipCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Completion transport. `LlmClient` in production; swapped for a scripted
    /// provider in router tests.
    pub llm: Arc<dyn CompletionProvider>,
    pub catalog: Arc<ScholarshipCatalog>,
}
