//! Neo4j connection client.

use std::time::Duration;

use anyhow::{Context, Result};
use neo4rs::{ConfigBuilder, Graph, Query, Txn};
use serde::de::DeserializeOwned;
use shopgraph_core::model::GraphCounts;
use tracing::debug;

pub use shopgraph_core::GraphConfig;

/// Client for Neo4j graph operations.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Create a new GraphClient from config.
    ///
    /// `Graph::connect` only builds a lazy pool, so a `RETURN 1` ping runs
    /// straight away to force a bolt handshake. Callers bound the whole
    /// thing with [`GraphClient::connect_with_timeout`].
    pub async fn connect(config: &GraphConfig) -> Result<Self> {
        let neo4j_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .db(config.database.as_str())
            .max_connections(config.max_connections)
            .fetch_size(200)
            .build()
            .context("Failed to build Neo4j config")?;

        let graph = Graph::connect(neo4j_config)
            .await
            .context("Failed to create Neo4j connection pool")?;

        graph
            .run(Query::new("RETURN 1".to_string()))
            .await
            .context("Neo4j is not responding to queries")?;

        debug!(uri = %config.uri, database = %config.database, "Connected to Neo4j");
        Ok(Self { graph })
    }

    /// Connect, failing if the handshake takes longer than the configured timeout.
    pub async fn connect_with_timeout(config: &GraphConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.connect_timeout_secs);
        tokio::time::timeout(timeout, Self::connect(config))
            .await
            .with_context(|| format!("Timed out connecting to Neo4j at {} after {:?}", config.uri, timeout))?
    }

    /// Execute a Cypher query that returns no results.
    pub async fn execute(&self, query: Query) -> Result<()> {
        self.graph.run(query).await.context("Neo4j query execution failed")?;
        Ok(())
    }

    /// Run several write queries in a single transaction and sum the integer
    /// column `count_field` over every row they return.
    ///
    /// Rolls back and returns the first error if any query fails.
    pub async fn run_in_transaction(&self, queries: Vec<Query>, count_field: &str) -> Result<i64> {
        let mut txn = self
            .graph
            .start_txn()
            .await
            .context("Failed to start Neo4j transaction")?;

        let total = match Self::sum_in_txn(&mut txn, queries, count_field).await {
            Ok(total) => total,
            Err(e) => {
                if let Err(rollback) = txn.rollback().await {
                    tracing::warn!(error = %rollback, "Neo4j rollback failed");
                }
                return Err(e);
            }
        };

        txn.commit().await.context("Failed to commit Neo4j transaction")?;
        Ok(total)
    }

    async fn sum_in_txn(txn: &mut Txn, queries: Vec<Query>, count_field: &str) -> Result<i64> {
        let mut total = 0;
        for query in queries {
            let mut stream = txn.execute(query).await.context("Neo4j batch write failed")?;
            while let Some(row) = stream
                .next(txn.handle())
                .await
                .context("Failed to read Neo4j batch result")?
            {
                let count: i64 = row
                    .get(count_field)
                    .map_err(|e| anyhow::anyhow!("Failed to get field '{}': {:?}", count_field, e))?;
                total += count;
            }
        }
        Ok(total)
    }

    /// Execute a Cypher query and return results as rows.
    pub async fn query(&self, query: Query) -> Result<Vec<neo4rs::Row>> {
        let mut result = self.graph.execute(query).await.context("Neo4j query failed")?;

        let mut rows = Vec::new();
        while let Some(row) = result.next().await.context("Failed to read Neo4j result row")? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Execute a Cypher query and return a single scalar value.
    pub async fn query_scalar<T: DeserializeOwned>(&self, query: Query, field: &str) -> Result<Option<T>> {
        let rows = self.query(query).await?;
        if let Some(row) = rows.into_iter().next() {
            let val: T = row
                .get(field)
                .map_err(|e| anyhow::anyhow!("Failed to get field '{}': {:?}", field, e))?;
            Ok(Some(val))
        } else {
            Ok(None)
        }
    }

    /// Get node and relationship counts for status display.
    pub async fn get_counts(&self) -> Result<GraphCounts> {
        let node_query = Query::new("MATCH (n) RETURN count(n) as count".to_string());
        let rel_query = Query::new("MATCH ()-[r]->() RETURN count(r) as count".to_string());

        let node_count: i64 = self.query_scalar(node_query, "count").await?.unwrap_or(0);
        let rel_count: i64 = self.query_scalar(rel_query, "count").await?.unwrap_or(0);

        Ok(GraphCounts {
            nodes: node_count as usize,
            relationships: rel_count as usize,
        })
    }
}
