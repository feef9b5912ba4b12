//! Category route handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use shopgraph_core::{model::Recommendation, ShopError};

use super::{internal, not_found, ApiError, LimitParams};
use crate::state::AppState;

pub async fn bestsellers(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    Query(params): Query<LimitParams>,
) -> Result<Json<Vec<Recommendation>>, ApiError> {
    let limit = state.limit(params.limit);

    let items = state
        .source
        .category_bestsellers(&category_id, limit)
        .await
        .map_err(internal)?
        .ok_or_else(|| not_found(ShopError::CategoryNotFound(category_id.clone())))?;

    Ok(Json(items))
}
