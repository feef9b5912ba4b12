//! Customer route handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use shopgraph_core::{model::OrderSummary, ShopError};

use super::{internal, not_found, ApiError};
use crate::state::AppState;

pub async fn purchase_history(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<Vec<OrderSummary>>, ApiError> {
    let orders = state
        .source
        .purchase_history(&customer_id)
        .await
        .map_err(internal)?
        .ok_or_else(|| not_found(ShopError::CustomerNotFound(customer_id.clone())))?;

    Ok(Json(orders))
}
