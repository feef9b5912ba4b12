//! Integration tests against a live PostgreSQL source.
//!
//! Run with `DATABASE_URL=postgresql://... cargo test -p shopgraph-db -- --ignored`.

use anyhow::Result;
use shopgraph_core::PostgresConfig;
use shopgraph_db::{init_pool, load_tables};

fn database_url() -> Option<String> {
    std::env::var("DATABASE_URL").ok()
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a seeded shop database"]
async fn test_load_tables_reads_every_table() -> Result<()> {
    let Some(url) = database_url() else {
        return Ok(());
    };
    let pool = init_pool(&PostgresConfig { url, max_connections: 2 }).await?;

    let tables = load_tables(&pool).await?;

    assert!(!tables.customers.is_empty(), "seed data should contain customers");
    assert!(!tables.products.is_empty(), "seed data should contain products");
    for item in &tables.order_items {
        assert!(
            tables.orders.iter().any(|o| item.order_id.as_deref() == Some(o.id.as_str())),
            "order item {:?} references unknown order",
            item.order_id
        );
    }
    Ok(())
}
