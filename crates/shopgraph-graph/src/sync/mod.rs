//! PostgreSQL to Neo4j load pipeline.
//!
//! The source snapshot is turned into an ordered list of [`SyncStep`]s, one
//! fixed `UNWIND $rows ... MERGE` statement each. Every step runs in its own
//! transaction with its rows split into batches. Each statement returns the
//! number of rows it merged, so the result reports what was written rather
//! than what was sent. All MERGEs are keyed on id, so re-running the load is
//! idempotent.

pub mod nodes;
pub mod relationships;
pub mod rows;

use anyhow::{Context, Result};
use neo4rs::{BoltMap, BoltType, Query};
use shopgraph_db::SourceTables;
use tracing::{debug, info};

use crate::GraphClient;

/// What a step writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Nodes,
    Relationships,
}

/// One parameterized upsert statement with the rows it is applied to.
#[derive(Debug, Clone)]
pub struct SyncStep {
    pub name: &'static str,
    pub kind: StepKind,
    pub cypher: &'static str,
    pub rows: Vec<BoltMap>,
}

impl SyncStep {
    pub fn new(name: &'static str, kind: StepKind, cypher: &'static str, rows: Vec<BoltMap>) -> Self {
        Self { name, kind, cypher, rows }
    }

    /// Build one `$rows` query per batch.
    pub fn queries(&self, batch_size: usize) -> Vec<Query> {
        batches(&self.rows, batch_size)
            .map(|chunk| {
                let rows: Vec<BoltType> = chunk.iter().cloned().map(BoltType::Map).collect();
                Query::new(self.cypher.to_string()).param("rows", rows)
            })
            .collect()
    }
}

/// Split rows into chunks of at most `batch_size` (a size of 0 is treated as 1).
pub fn batches<T>(rows: &[T], batch_size: usize) -> std::slice::Chunks<'_, T> {
    rows.chunks(batch_size.max(1))
}

/// Column every upsert statement returns with the number of rows it merged.
pub const WRITTEN_FIELD: &str = "written";

/// Result of a sync operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncResult {
    /// Nodes merged (created or updated).
    pub nodes: usize,
    /// Relationships merged. Rows with a missing endpoint are not counted.
    pub relationships: usize,
    /// Source rows sent, including skipped ones.
    pub rows: usize,
    pub batches: usize,
    pub steps: usize,
}

impl SyncResult {
    fn record(&mut self, step: &SyncStep, batches: usize, written: usize) {
        match step.kind {
            StepKind::Nodes => self.nodes += written,
            StepKind::Relationships => self.relationships += written,
        }
        self.rows += step.rows.len();
        self.batches += batches;
        self.steps += 1;
    }

    /// Rows that matched no endpoint and wrote nothing.
    pub fn skipped(&self) -> usize {
        self.rows.saturating_sub(self.nodes + self.relationships)
    }
}

/// All steps in execution order: nodes first, then relationships.
pub fn plan(tables: &SourceTables) -> Vec<SyncStep> {
    let mut steps = nodes::node_steps(tables);
    steps.extend(relationships::relationship_steps(tables));
    steps
}

/// Load a source snapshot into Neo4j.
pub async fn run_full_sync(client: &GraphClient, tables: &SourceTables, batch_size: usize) -> Result<SyncResult> {
    info!(batch_size, "Starting full graph sync");

    let mut total = SyncResult::default();

    for step in plan(tables) {
        if step.rows.is_empty() {
            debug!(step = step.name, "No rows, skipping");
            continue;
        }

        let queries = step.queries(batch_size);
        let batch_count = queries.len();

        let written = client
            .run_in_transaction(queries, WRITTEN_FIELD)
            .await
            .with_context(|| format!("Failed to sync {}", step.name))?;
        let written = usize::try_from(written).unwrap_or(0);

        info!(step = step.name, rows = step.rows.len(), written, batches = batch_count, "Step synced");
        total.record(&step, batch_count, written);
    }

    info!(
        nodes = total.nodes,
        relationships = total.relationships,
        skipped = total.skipped(),
        batches = total.batches,
        "Full sync complete"
    );

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopgraph_db::{CategoryRow, CustomerRow, EventRow, OrderItemRow, OrderRow, ProductRow};

    fn sample_tables() -> SourceTables {
        SourceTables {
            customers: vec![CustomerRow { id: "u1".into(), name: Some("Ada".into()), join_date: None }],
            categories: vec![CategoryRow { id: "c1".into(), name: Some("Kitchen".into()) }],
            products: vec![
                ProductRow { id: "p1".into(), name: Some("Kettle".into()), price: Some(20.0), category_id: Some("c1".into()) },
                ProductRow { id: "p2".into(), name: Some("Toaster".into()), price: Some(35.0), category_id: Some("c1".into()) },
            ],
            orders: vec![OrderRow { id: "o1".into(), customer_id: Some("u1".into()), ts: None }],
            order_items: vec![
                OrderItemRow { order_id: Some("o1".into()), product_id: Some("p1".into()), quantity: Some(1) },
                OrderItemRow { order_id: Some("o1".into()), product_id: Some("p2".into()), quantity: Some(2) },
            ],
            events: vec![EventRow {
                id: "e1".into(),
                customer_id: Some("u1".into()),
                product_id: Some("p2".into()),
                event_type: Some("view".into()),
                ts: None,
            }],
        }
    }

    #[test]
    fn test_plan_orders_nodes_before_relationships() {
        let steps = plan(&sample_tables());
        let names: Vec<_> = steps.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec!["categories", "products", "customers", "orders", "in_category", "line_items", "placed", "events"]
        );
        let first_rel = steps.iter().position(|s| s.kind == StepKind::Relationships).unwrap();
        assert!(steps[first_rel..].iter().all(|s| s.kind == StepKind::Relationships));
    }

    #[test]
    fn test_plan_row_counts_follow_tables() {
        let steps = plan(&sample_tables());
        let rows = |name: &str| steps.iter().find(|s| s.name == name).unwrap().rows.len();
        assert_eq!(rows("products"), 2);
        assert_eq!(rows("in_category"), 2);
        assert_eq!(rows("line_items"), 2);
        assert_eq!(rows("placed"), 1);
        assert_eq!(rows("events"), 1);
    }

    #[test]
    fn test_every_statement_is_a_batched_merge() {
        for step in plan(&sample_tables()) {
            assert!(step.cypher.starts_with("UNWIND $rows AS r"), "{}", step.name);
            assert!(step.cypher.contains("MERGE"), "{}", step.name);
        }
    }

    #[test]
    fn test_relationship_steps_match_endpoints_before_merge() {
        for step in relationships::relationship_steps(&sample_tables()) {
            let match_at = step.cypher.find("MATCH").unwrap();
            let merge_at = step.cypher.find("MERGE").unwrap();
            assert!(match_at < merge_at, "{}", step.name);
        }
    }

    #[test]
    fn test_batches_split_evenly_with_remainder() {
        let rows: Vec<u32> = (0..2500).collect();
        let sizes: Vec<usize> = batches(&rows, 1000).map(|c| c.len()).collect();
        assert_eq!(sizes, vec![1000, 1000, 500]);
    }

    #[test]
    fn test_zero_batch_size_is_one() {
        let rows = [1, 2, 3];
        assert_eq!(batches(&rows, 0).count(), 3);
    }

    #[test]
    fn test_step_queries_one_per_batch() {
        let tables = sample_tables();
        let step = nodes::node_steps(&tables).into_iter().find(|s| s.name == "products").unwrap();
        assert_eq!(step.queries(1).len(), 2);
        assert_eq!(step.queries(10).len(), 1);
        assert!(SyncStep::new("empty", StepKind::Nodes, nodes::MERGE_ORDERS, Vec::new()).queries(10).is_empty());
    }

    #[test]
    fn test_every_statement_reports_rows_written() {
        for step in plan(&sample_tables()) {
            assert!(
                step.cypher.trim_end().ends_with(&format!("RETURN count(*) AS {WRITTEN_FIELD}")),
                "{}",
                step.name
            );
        }
    }

    #[test]
    fn test_result_record() {
        let tables = sample_tables();
        let mut result = SyncResult::default();
        for step in plan(&tables) {
            let written = step.rows.len();
            result.record(&step, 1, written);
        }
        assert_eq!(result.nodes, 1 + 2 + 1 + 1);
        assert_eq!(result.relationships, 2 + 2 + 1 + 1);
        assert_eq!(result.rows, 11);
        assert_eq!(result.skipped(), 0);
        assert_eq!(result.batches, 8);
        assert_eq!(result.steps, 8);
    }

    #[test]
    fn test_result_counts_written_not_sent() {
        let tables = SourceTables {
            products: vec![ProductRow { id: "p1".into(), name: None, price: None, category_id: None }],
            ..Default::default()
        };
        let mut result = SyncResult::default();
        for step in plan(&tables).into_iter().filter(|s| !s.rows.is_empty()) {
            // the product node merges, the IN_CATEGORY row matches no category
            let written = if step.kind == StepKind::Nodes { step.rows.len() } else { 0 };
            result.record(&step, 1, written);
        }
        assert_eq!(result.nodes, 1);
        assert_eq!(result.relationships, 0);
        assert_eq!(result.rows, 2);
        assert_eq!(result.skipped(), 1);
    }
}
