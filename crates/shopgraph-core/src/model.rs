//! Response models returned by the graph read queries.

use serde::{Deserialize, Serialize};

/// A ranked product suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub product_id: String,
    pub product_name: String,
    pub score: i64,
}

/// Which query produced a list of recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationStrategy {
    /// Products bought alongside the customer's own purchases.
    CoPurchase,
    /// Store-wide bestsellers the customer has not bought yet.
    Popularity,
}

impl RecommendationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CoPurchase => "co-purchase",
            Self::Popularity => "popularity",
        }
    }
}

impl std::fmt::Display for RecommendationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recommendations together with the strategy that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationSet {
    pub strategy: RecommendationStrategy,
    pub items: Vec<Recommendation>,
}

/// One product line on a past order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
}

/// A customer's order with its line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: String,
    /// ISO-8601 timestamp, absent when the source row had none.
    pub ts: Option<String>,
    pub items: Vec<LineItem>,
}

/// Node and relationship counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphCounts {
    pub nodes: usize,
    pub relationships: usize,
}
