use std::sync::Arc;

use crate::clues::ClueStore;
use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no API key is configured — topic word lists then come from
    /// the offline sets only.
    pub llm: Option<LlmClient>,
    /// Pluggable clue store. Default: in-memory with TTL. Swap via CLUE_STORE env.
    pub clue_store: Arc<dyn ClueStore>,
    pub config: Config,
}
