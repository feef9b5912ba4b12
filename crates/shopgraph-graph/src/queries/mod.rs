//! Fixed read queries served by the HTTP API.
//!
//! Every query is a constant Cypher statement with bound parameters; ranking
//! and filtering happen inside Neo4j.

pub mod also_viewed;
pub mod category;
pub mod history;
pub mod recommend;

use anyhow::Result;
use async_trait::async_trait;
use shopgraph_core::model::{GraphCounts, OrderSummary, Recommendation, RecommendationSet, RecommendationStrategy};
use tracing::debug;

use crate::GraphClient;

/// Read access to the recommendation graph.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn co_purchase(&self, customer_id: &str, limit: usize) -> Result<Vec<Recommendation>>;

    async fn popular_excluding(&self, customer_id: &str, limit: usize) -> Result<Vec<Recommendation>>;

    async fn also_viewed(&self, product_id: &str, limit: usize) -> Result<Vec<Recommendation>>;

    /// `None` when the customer is unknown.
    async fn purchase_history(&self, customer_id: &str) -> Result<Option<Vec<OrderSummary>>>;

    /// `None` when the category is unknown.
    async fn category_bestsellers(&self, category_id: &str, limit: usize) -> Result<Option<Vec<Recommendation>>>;

    async fn counts(&self) -> Result<GraphCounts>;
}

#[async_trait]
impl RecommendationSource for GraphClient {
    async fn co_purchase(&self, customer_id: &str, limit: usize) -> Result<Vec<Recommendation>> {
        recommend::co_purchase(self, customer_id, limit).await
    }

    async fn popular_excluding(&self, customer_id: &str, limit: usize) -> Result<Vec<Recommendation>> {
        recommend::popular_excluding(self, customer_id, limit).await
    }

    async fn also_viewed(&self, product_id: &str, limit: usize) -> Result<Vec<Recommendation>> {
        also_viewed::also_viewed(self, product_id, limit).await
    }

    async fn purchase_history(&self, customer_id: &str) -> Result<Option<Vec<OrderSummary>>> {
        history::purchase_history(self, customer_id).await
    }

    async fn category_bestsellers(&self, category_id: &str, limit: usize) -> Result<Option<Vec<Recommendation>>> {
        category::category_bestsellers(self, category_id, limit).await
    }

    async fn counts(&self) -> Result<GraphCounts> {
        self.get_counts().await
    }
}

/// Recommend products for a customer.
///
/// Co-purchase neighbours come first; a customer with none (new, or only
/// unique purchases) gets store-wide bestsellers instead.
pub async fn recommend(
    source: &dyn RecommendationSource,
    customer_id: &str,
    limit: usize,
) -> Result<RecommendationSet> {
    let items = source.co_purchase(customer_id, limit).await?;
    if !items.is_empty() {
        return Ok(RecommendationSet {
            strategy: RecommendationStrategy::CoPurchase,
            items,
        });
    }

    debug!(customer_id, "No co-purchase matches, falling back to popularity");
    let items = source.popular_excluding(customer_id, limit).await?;
    Ok(RecommendationSet {
        strategy: RecommendationStrategy::Popularity,
        items,
    })
}

/// Parse rows shaped `(product_id, product_name, score)`.
pub(crate) fn parse_recommendations(rows: Vec<neo4rs::Row>) -> Result<Vec<Recommendation>> {
    let mut results = Vec::with_capacity(rows.len());

    for row in rows {
        let product_id: String = row
            .get("product_id")
            .map_err(|e| anyhow::anyhow!("Failed to get field 'product_id': {:?}", e))?;
        let product_name: Option<String> = row
            .get("product_name")
            .map_err(|e| anyhow::anyhow!("Failed to get field 'product_name': {:?}", e))?;
        let score: i64 = row
            .get("score")
            .map_err(|e| anyhow::anyhow!("Failed to get field 'score': {:?}", e))?;

        results.push(Recommendation {
            product_id,
            product_name: product_name.unwrap_or_default(),
            score,
        });
    }

    Ok(results)
}
