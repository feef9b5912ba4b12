//! Bestsellers within a category.

use anyhow::Result;
use neo4rs::Query;
use shopgraph_core::model::Recommendation;

use super::parse_recommendations;
use crate::GraphClient;

pub const CATEGORY_EXISTS: &str = "MATCH (c:Category {id: $cat}) RETURN count(c) AS count";

/// Ranked by total purchased quantity. A line item without a quantity counts once.
pub const CATEGORY_BESTSELLERS: &str = "MATCH (:Category {id: $cat})<-[:IN_CATEGORY]-(p:Product)<-[li:LINE_ITEM]-(:Order)
RETURN p.id AS product_id, p.name AS product_name, sum(coalesce(li.quantity, 1)) AS score
ORDER BY score DESC, product_name ASC
LIMIT $limit";

/// Returns `None` when the category is not in the graph.
pub async fn category_bestsellers(
    client: &GraphClient,
    category_id: &str,
    limit: usize,
) -> Result<Option<Vec<Recommendation>>> {
    let exists = Query::new(CATEGORY_EXISTS.to_string()).param("cat", category_id);
    let count: i64 = client.query_scalar(exists, "count").await?.unwrap_or(0);
    if count == 0 {
        return Ok(None);
    }

    let query = Query::new(CATEGORY_BESTSELLERS.to_string())
        .param("cat", category_id)
        .param("limit", limit as i64);

    parse_recommendations(client.query(query).await?).map(Some)
}
