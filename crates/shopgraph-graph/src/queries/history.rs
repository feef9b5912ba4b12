//! A customer's purchase history.

use anyhow::Result;
use neo4rs::Query;
use shopgraph_core::model::{LineItem, OrderSummary};

use crate::GraphClient;

/// One row per (order, line item), newest order first with undated orders
/// last. A known customer without orders yields a single all-null row; an
/// unknown customer yields no rows.
pub const PURCHASE_HISTORY: &str = "MATCH (u:Customer {id: $cid})
OPTIONAL MATCH (u)-[:PLACED]->(o:Order)
OPTIONAL MATCH (o)-[li:LINE_ITEM]->(p:Product)
RETURN o.id AS order_id, toString(o.ts) AS ts,
       p.id AS product_id, p.name AS product_name, li.quantity AS quantity
ORDER BY ts IS NULL, ts DESC, order_id ASC, product_name ASC";

/// Flat history row as returned by [`PURCHASE_HISTORY`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryRow {
    pub order_id: Option<String>,
    pub ts: Option<String>,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub quantity: Option<i64>,
}

impl HistoryRow {
    fn from_row(row: &neo4rs::Row) -> Result<Self> {
        let field = |name: &str| -> Result<Option<String>> {
            row.get(name)
                .map_err(|e| anyhow::anyhow!("Failed to get field '{}': {:?}", name, e))
        };
        Ok(Self {
            order_id: field("order_id")?,
            ts: field("ts")?,
            product_id: field("product_id")?,
            product_name: field("product_name")?,
            quantity: row
                .get("quantity")
                .map_err(|e| anyhow::anyhow!("Failed to get field 'quantity': {:?}", e))?,
        })
    }
}

/// Fold flat rows into orders, keeping the order rows arrive in.
///
/// Rows of one order must be adjacent, which the `ORDER BY` guarantees.
pub fn group_orders(rows: Vec<HistoryRow>) -> Vec<OrderSummary> {
    let mut orders: Vec<OrderSummary> = Vec::new();

    for row in rows {
        let Some(order_id) = row.order_id else {
            continue;
        };

        if orders.last().map_or(true, |o| o.order_id != order_id) {
            orders.push(OrderSummary {
                order_id,
                ts: row.ts,
                items: Vec::new(),
            });
        }

        if let (Some(product_id), Some(order)) = (row.product_id, orders.last_mut()) {
            order.items.push(LineItem {
                product_id,
                product_name: row.product_name.unwrap_or_default(),
                quantity: row.quantity.unwrap_or(1),
            });
        }
    }

    orders
}

/// Returns `None` when the customer is not in the graph.
pub async fn purchase_history(client: &GraphClient, customer_id: &str) -> Result<Option<Vec<OrderSummary>>> {
    let query = Query::new(PURCHASE_HISTORY.to_string()).param("cid", customer_id);
    let rows = client.query(query).await?;

    if rows.is_empty() {
        return Ok(None);
    }

    let rows = rows.iter().map(HistoryRow::from_row).collect::<Result<Vec<_>>>()?;
    Ok(Some(group_orders(rows)))
}
