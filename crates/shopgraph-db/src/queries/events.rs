//! Customer behaviour event table scan.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::pool::{DbError, DbPool, DbResult};

pub(crate) const SELECT_EVENTS: &str =
    "SELECT id::text AS id, customer_id::text AS customer_id, product_id::text AS product_id,
            event_type, ts::timestamptz AS ts
     FROM events";

/// Event row from database (views, cart adds and similar interactions).
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct EventRow {
    pub id: String,
    pub customer_id: Option<String>,
    pub product_id: Option<String>,
    pub event_type: Option<String>,
    pub ts: Option<DateTime<Utc>>,
}

/// Read every event.
pub async fn list_events(pool: &DbPool) -> DbResult<Vec<EventRow>> {
    let rows = sqlx::query_as::<_, EventRow>(SELECT_EVENTS)
        .fetch_all(pool)
        .await
        .map_err(DbError::scan("events"))?;

    debug!(rows = rows.len(), "Scanned events");
    Ok(rows)
}
