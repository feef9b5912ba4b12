//! Graph statistics.

use axum::{extract::State, Json};
use shopgraph_core::model::GraphCounts;

use super::{internal, ApiError};
use crate::state::AppState;

pub async fn stats(State(state): State<AppState>) -> Result<Json<GraphCounts>, ApiError> {
    let counts = state.source.counts().await.map_err(internal)?;
    Ok(Json(counts))
}
