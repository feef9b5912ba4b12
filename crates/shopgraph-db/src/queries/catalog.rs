//! Category and product table scans.

use tracing::debug;

use crate::pool::{DbError, DbPool, DbResult};

pub(crate) const SELECT_CATEGORIES: &str = "SELECT id::text AS id, name FROM categories";

pub(crate) const SELECT_PRODUCTS: &str =
    "SELECT id::text AS id, name, price::float8 AS price, category_id::text AS category_id
     FROM products";

/// Category row from database.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct CategoryRow {
    pub id: String,
    pub name: Option<String>,
}

/// Product row from database.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ProductRow {
    pub id: String,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<String>,
}

/// Read every category.
pub async fn list_categories(pool: &DbPool) -> DbResult<Vec<CategoryRow>> {
    let rows = sqlx::query_as::<_, CategoryRow>(SELECT_CATEGORIES)
        .fetch_all(pool)
        .await
        .map_err(DbError::scan("categories"))?;

    debug!(rows = rows.len(), "Scanned categories");
    Ok(rows)
}

/// Read every product.
pub async fn list_products(pool: &DbPool) -> DbResult<Vec<ProductRow>> {
    let rows = sqlx::query_as::<_, ProductRow>(SELECT_PRODUCTS)
        .fetch_all(pool)
        .await
        .map_err(DbError::scan("products"))?;

    debug!(rows = rows.len(), "Scanned products");
    Ok(rows)
}
