//! "Customers who viewed this also viewed" over EVENT relationships.

use anyhow::Result;
use neo4rs::Query;
use shopgraph_core::model::Recommendation;

use super::parse_recommendations;
use crate::GraphClient;

pub const ALSO_VIEWED: &str = "MATCH (:Product {id: $pid})<-[e1:EVENT]-(:Customer)-[e2:EVENT]->(p:Product)
WHERE p.id <> $pid
RETURN p.id AS product_id, p.name AS product_name, count(e2) AS score
ORDER BY score DESC, product_name ASC
LIMIT $limit";

pub async fn also_viewed(client: &GraphClient, product_id: &str, limit: usize) -> Result<Vec<Recommendation>> {
    let query = Query::new(ALSO_VIEWED.to_string())
        .param("pid", product_id)
        .param("limit", limit as i64);

    parse_recommendations(client.query(query).await?)
}
