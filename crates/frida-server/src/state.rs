use frida::providers::llm::LlmProvider;
use std::sync::Arc;

/// Shared application state: one reusable provider behind all requests.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<LlmProvider>,
}
