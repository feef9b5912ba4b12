//! # Shopgraph DB
//!
//! Read side of the ETL: a PostgreSQL pool and one full scan per source table.

pub mod pool;
pub mod queries;
pub mod tables;

pub use pool::{init_pool, DbError, DbPool, DbResult};
pub use queries::{
    catalog::{CategoryRow, ProductRow},
    customers::CustomerRow,
    events::EventRow,
    orders::{OrderItemRow, OrderRow},
};
pub use tables::{load_tables, SourceTables, TableCounts};
