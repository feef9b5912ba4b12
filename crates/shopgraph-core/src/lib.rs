//! # Shopgraph Core
//!
//! Configuration, error types and the response models shared by the
//! ETL job and the recommendation API.

pub mod config;
pub mod error;
pub mod model;

pub use config::{AppConfig, EtlConfig, GraphConfig, PostgresConfig, ServerConfig};
pub use error::{ShopError, ShopResult};
