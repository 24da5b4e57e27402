//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use sitelens_core::AnalysisSession;
use sitelens_llm::OllamaClient;

/// Shared handler state. The session lock is held for the whole request
/// cycle, which is what enforces "one analysis in flight".
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<OllamaClient>,
    pub session: Arc<RwLock<AnalysisSession>>,
}

impl AppState {
    pub fn new(client: OllamaClient) -> Self {
        Self {
            client: Arc::new(client),
            session: Arc::new(RwLock::new(AnalysisSession::new())),
        }
    }
}
