//! Snapshot of all source tables.

use tracing::info;

use crate::pool::{DbPool, DbResult};
use crate::queries::{
    catalog::{self, CategoryRow, ProductRow},
    customers::{self, CustomerRow},
    events::{self, EventRow},
    orders::{self, OrderItemRow, OrderRow},
};

/// Every row the ETL copies, read in one pass.
#[derive(Debug, Clone, Default)]
pub struct SourceTables {
    pub customers: Vec<CustomerRow>,
    pub categories: Vec<CategoryRow>,
    pub products: Vec<ProductRow>,
    pub orders: Vec<OrderRow>,
    pub order_items: Vec<OrderItemRow>,
    pub events: Vec<EventRow>,
}

/// Row counts per source table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub customers: usize,
    pub categories: usize,
    pub products: usize,
    pub orders: usize,
    pub order_items: usize,
    pub events: usize,
}

impl TableCounts {
    pub fn total(&self) -> usize {
        self.customers + self.categories + self.products + self.orders + self.order_items + self.events
    }
}

impl SourceTables {
    pub fn counts(&self) -> TableCounts {
        TableCounts {
            customers: self.customers.len(),
            categories: self.categories.len(),
            products: self.products.len(),
            orders: self.orders.len(),
            order_items: self.order_items.len(),
            events: self.events.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts().total() == 0
    }
}

/// Scan all six tables.
pub async fn load_tables(pool: &DbPool) -> DbResult<SourceTables> {
    let tables = SourceTables {
        customers: customers::list_customers(pool).await?,
        categories: catalog::list_categories(pool).await?,
        products: catalog::list_products(pool).await?,
        orders: orders::list_orders(pool).await?,
        order_items: orders::list_order_items(pool).await?,
        events: events::list_events(pool).await?,
    };

    let counts = tables.counts();
    info!(
        customers = counts.customers,
        categories = counts.categories,
        products = counts.products,
        orders = counts.orders,
        order_items = counts.order_items,
        events = counts.events,
        "Source tables loaded"
    );

    Ok(tables)
}
