//! Customer recommendations: co-purchase with a popularity fallback.

use anyhow::Result;
use neo4rs::Query;
use shopgraph_core::model::Recommendation;

use super::parse_recommendations;
use crate::GraphClient;

/// Products bought by customers who share at least one purchased product with
/// this customer. Score is the number of connecting purchase paths.
pub const CO_PURCHASE: &str = "MATCH (u:Customer {id: $cid})-[:PLACED]->(:Order)-[:LINE_ITEM]->(p:Product)
WITH u, collect(DISTINCT p) AS myProducts
MATCH (u)-[:PLACED]->(:Order)-[:LINE_ITEM]->(pCommon:Product)
MATCH (:Customer)-[:PLACED]->(:Order)-[:LINE_ITEM]->(pCommon)
      <-[:LINE_ITEM]-(:Order)-[:LINE_ITEM]->(rec:Product)
WHERE NOT rec IN myProducts
RETURN rec.id AS product_id, rec.name AS product_name, count(*) AS score
ORDER BY score DESC, product_name ASC
LIMIT $limit";

/// Store-wide bestsellers by line-item count, minus what the customer already
/// bought. Returns nothing when the customer is unknown.
pub const POPULAR_EXCLUDING: &str = "MATCH (u:Customer {id: $cid})
OPTIONAL MATCH (u)-[:PLACED]->(:Order)-[:LINE_ITEM]->(pBought:Product)
WITH u, collect(DISTINCT pBought) AS myProducts
MATCH (:Order)-[li:LINE_ITEM]->(p:Product)
WHERE NOT p IN myProducts
RETURN p.id AS product_id, p.name AS product_name, count(li) AS score
ORDER BY score DESC, product_name ASC
LIMIT $limit";

pub async fn co_purchase(client: &GraphClient, customer_id: &str, limit: usize) -> Result<Vec<Recommendation>> {
    let query = Query::new(CO_PURCHASE.to_string())
        .param("cid", customer_id)
        .param("limit", limit as i64);

    parse_recommendations(client.query(query).await?)
}

pub async fn popular_excluding(client: &GraphClient, customer_id: &str, limit: usize) -> Result<Vec<Recommendation>> {
    let query = Query::new(POPULAR_EXCLUDING.to_string())
        .param("cid", customer_id)
        .param("limit", limit as i64);

    parse_recommendations(client.query(query).await?)
}
