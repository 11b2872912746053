use std::sync::Arc;

use crate::config::Config;
use crate::knowledge::{Embedder, TextSplitter};
use crate::llm_client::Generator;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation service. Default: `LlmClient` against an OpenAI-compatible API.
    pub llm: Arc<dyn Generator>,
    /// Embedding service. Default: `EmbeddingClient`.
    pub embedder: Arc<dyn Embedder>,
    pub sessions: SessionStore,
    /// Chunking used for every knowledge base (500 chars, 50 overlap).
    pub splitter: TextSplitter,
    pub config: Config,
}
