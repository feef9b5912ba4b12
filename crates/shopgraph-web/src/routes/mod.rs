//! Route handlers.

pub mod categories;
pub mod customers;
pub mod graph;
pub mod health;
pub mod recommendations;

use axum::http::StatusCode;
use serde::Deserialize;
use shopgraph_core::ShopError;

/// `?limit=N` on ranked endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

/// Handler error: status plus plain-text message.
pub type ApiError = (StatusCode, String);

pub(crate) fn internal(err: anyhow::Error) -> ApiError {
    tracing::error!(error = %format!("{err:#}"), "Graph query failed");
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

pub(crate) fn not_found(err: ShopError) -> ApiError {
    (StatusCode::NOT_FOUND, err.to_string())
}
