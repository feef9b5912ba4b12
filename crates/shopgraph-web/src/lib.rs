//! Shopgraph Web Server
//!
//! Axum-based REST API serving fixed recommendation queries from the graph.

pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::{routing::get, Router};
use shopgraph_core::ServerConfig;
use shopgraph_graph::RecommendationSource;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health))
        .route("/recommendations/{customer_id}", get(routes::recommendations::recommend))
        .route("/also-viewed/{product_id}", get(routes::recommendations::also_viewed))
        .route("/customers/{customer_id}/orders", get(routes::customers::purchase_history))
        .route("/categories/{category_id}/bestsellers", get(routes::categories::bestsellers))
        .route("/graph/stats", get(routes::graph::stats))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server until Ctrl+C.
pub async fn run_server(source: Arc<dyn RecommendationSource>, config: ServerConfig) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(source, config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Web server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
