//! Application state.

use std::sync::Arc;

use shopgraph_core::ServerConfig;
use shopgraph_graph::RecommendationSource;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn RecommendationSource>,
    pub server: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(source: Arc<dyn RecommendationSource>, server: ServerConfig) -> Self {
        Self {
            source,
            server: Arc::new(server),
        }
    }

    /// Resolve the `limit` query parameter.
    pub fn limit(&self, requested: Option<i64>) -> usize {
        self.server.clamp_limit(requested)
    }
}
