use crate::config::Config;
use crate::interview::orchestrator::InterviewOrchestrator;
use crate::interview::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Wraps the `Arc<dyn TextGenerator>`; a scripted generator is swapped in for tests.
    pub orchestrator: InterviewOrchestrator,
    pub config: Config,
}
