//! Relationship upserts.
//!
//! Each statement MATCHes both endpoints first, so a row whose endpoint was
//! never loaded produces no relationship.

use shopgraph_db::SourceTables;

use super::rows::to_bolt_rows;
use super::{StepKind, SyncStep};

pub const MERGE_IN_CATEGORY: &str = "UNWIND $rows AS r
MATCH (p:Product {id: r.id}), (c:Category {id: r.category_id})
MERGE (p)-[:IN_CATEGORY]->(c)
RETURN count(*) AS written";

pub const MERGE_LINE_ITEMS: &str = "UNWIND $rows AS r
MATCH (o:Order {id: r.order_id}), (p:Product {id: r.product_id})
MERGE (o)-[li:LINE_ITEM]->(p)
SET li.quantity = toInteger(r.quantity)
RETURN count(*) AS written";

pub const MERGE_PLACED: &str = "UNWIND $rows AS r
MATCH (o:Order {id: r.id}), (u:Customer {id: r.customer_id})
MERGE (u)-[:PLACED]->(o)
RETURN count(*) AS written";

pub const MERGE_EVENTS: &str = "UNWIND $rows AS r
MATCH (u:Customer {id: r.customer_id}), (p:Product {id: r.product_id})
MERGE (u)-[e:EVENT {id: r.id}]->(p)
SET e.type = r.event_type, e.ts = datetime(r.ts)
RETURN count(*) AS written";

/// Relationship steps. Must run after every node step.
pub fn relationship_steps(tables: &SourceTables) -> Vec<SyncStep> {
    vec![
        SyncStep::new(
            "in_category",
            StepKind::Relationships,
            MERGE_IN_CATEGORY,
            to_bolt_rows(&tables.products),
        ),
        SyncStep::new(
            "line_items",
            StepKind::Relationships,
            MERGE_LINE_ITEMS,
            to_bolt_rows(&tables.order_items),
        ),
        SyncStep::new("placed", StepKind::Relationships, MERGE_PLACED, to_bolt_rows(&tables.orders)),
        SyncStep::new("events", StepKind::Relationships, MERGE_EVENTS, to_bolt_rows(&tables.events)),
    ]
}
