//! # Shopgraph Graph
//!
//! Neo4j side of shopgraph.
//!
//! Loads the relational snapshot into a property graph with batched
//! merge-by-id upserts, and runs the fixed recommendation queries.

pub mod client;
pub mod queries;
pub mod schema;
pub mod sync;

pub use client::{GraphClient, GraphConfig};
pub use queries::{recommend, RecommendationSource};
pub use sync::{run_full_sync, SyncResult};
