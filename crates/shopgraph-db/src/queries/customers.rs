//! Customer table scan.

use chrono::NaiveDate;
use tracing::debug;

use crate::pool::{DbError, DbPool, DbResult};

pub(crate) const SELECT_CUSTOMERS: &str =
    "SELECT id::text AS id, name, join_date::date AS join_date FROM customers";

/// Customer row from database.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct CustomerRow {
    pub id: String,
    pub name: Option<String>,
    pub join_date: Option<NaiveDate>,
}

/// Read every customer.
pub async fn list_customers(pool: &DbPool) -> DbResult<Vec<CustomerRow>> {
    let rows = sqlx::query_as::<_, CustomerRow>(SELECT_CUSTOMERS)
        .fetch_all(pool)
        .await
        .map_err(DbError::scan("customers"))?;

    debug!(rows = rows.len(), "Scanned customers");
    Ok(rows)
}
