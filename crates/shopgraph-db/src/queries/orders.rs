//! Order and order line table scans.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::pool::{DbError, DbPool, DbResult};

pub(crate) const SELECT_ORDERS: &str =
    "SELECT id::text AS id, customer_id::text AS customer_id, ts::timestamptz AS ts FROM orders";

pub(crate) const SELECT_ORDER_ITEMS: &str =
    "SELECT order_id::text AS order_id, product_id::text AS product_id, quantity::int8 AS quantity
     FROM order_items";

/// Order row from database.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct OrderRow {
    pub id: String,
    pub customer_id: Option<String>,
    pub ts: Option<DateTime<Utc>>,
}

/// Order line row from database. Both keys are nullable in the source.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct OrderItemRow {
    pub order_id: Option<String>,
    pub product_id: Option<String>,
    pub quantity: Option<i64>,
}

/// Read every order.
pub async fn list_orders(pool: &DbPool) -> DbResult<Vec<OrderRow>> {
    let rows = sqlx::query_as::<_, OrderRow>(SELECT_ORDERS)
        .fetch_all(pool)
        .await
        .map_err(DbError::scan("orders"))?;

    debug!(rows = rows.len(), "Scanned orders");
    Ok(rows)
}

/// Read every order line.
pub async fn list_order_items(pool: &DbPool) -> DbResult<Vec<OrderItemRow>> {
    let rows = sqlx::query_as::<_, OrderItemRow>(SELECT_ORDER_ITEMS)
        .fetch_all(pool)
        .await
        .map_err(DbError::scan("order_items"))?;

    debug!(rows = rows.len(), "Scanned order items");
    Ok(rows)
}
