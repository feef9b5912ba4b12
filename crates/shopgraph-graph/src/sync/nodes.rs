//! Node upserts: (:Category), (:Product), (:Customer), (:Order).

use shopgraph_db::SourceTables;

use super::rows::to_bolt_rows;
use super::{StepKind, SyncStep};

pub const MERGE_CATEGORIES: &str = "UNWIND $rows AS r
MERGE (c:Category {id: r.id})
SET c.name = r.name
RETURN count(*) AS written";

pub const MERGE_PRODUCTS: &str = "UNWIND $rows AS r
MERGE (p:Product {id: r.id})
SET p.name = r.name, p.price = toFloat(r.price)
RETURN count(*) AS written";

pub const MERGE_CUSTOMERS: &str = "UNWIND $rows AS r
MERGE (u:Customer {id: r.id})
SET u.name = r.name, u.join_date = date(r.join_date)
RETURN count(*) AS written";

pub const MERGE_ORDERS: &str = "UNWIND $rows AS r
MERGE (o:Order {id: r.id})
SET o.ts = datetime(r.ts)
RETURN count(*) AS written";

/// Node steps in dependency order.
pub fn node_steps(tables: &SourceTables) -> Vec<SyncStep> {
    vec![
        SyncStep::new("categories", StepKind::Nodes, MERGE_CATEGORIES, to_bolt_rows(&tables.categories)),
        SyncStep::new("products", StepKind::Nodes, MERGE_PRODUCTS, to_bolt_rows(&tables.products)),
        SyncStep::new("customers", StepKind::Nodes, MERGE_CUSTOMERS, to_bolt_rows(&tables.customers)),
        SyncStep::new("orders", StepKind::Nodes, MERGE_ORDERS, to_bolt_rows(&tables.orders)),
    ]
}
