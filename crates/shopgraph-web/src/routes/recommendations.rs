//! Product recommendation handlers.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderName, HeaderValue},
    Json,
};
use shopgraph_core::model::Recommendation;

use super::{internal, ApiError, LimitParams};
use crate::state::AppState;

/// Response header naming the query that produced the list.
pub const STRATEGY_HEADER: HeaderName = HeaderName::from_static("x-recommendation-strategy");

pub async fn recommend(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
    Query(params): Query<LimitParams>,
) -> Result<([(HeaderName, HeaderValue); 1], Json<Vec<Recommendation>>), ApiError> {
    let limit = state.limit(params.limit);

    let set = shopgraph_graph::recommend(state.source.as_ref(), &customer_id, limit)
        .await
        .map_err(internal)?;

    tracing::debug!(customer_id = %customer_id, strategy = %set.strategy, count = set.items.len(), "Recommendations served");

    let header = HeaderValue::from_static(set.strategy.as_str());
    Ok(([(STRATEGY_HEADER, header)], Json(set.items)))
}

pub async fn also_viewed(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Query(params): Query<LimitParams>,
) -> Result<Json<Vec<Recommendation>>, ApiError> {
    let limit = state.limit(params.limit);

    let items = state
        .source
        .also_viewed(&product_id, limit)
        .await
        .map_err(internal)?;

    Ok(Json(items))
}
