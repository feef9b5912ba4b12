//! Graph status command.

use anyhow::Result;
use shopgraph_core::AppConfig;
use shopgraph_graph::GraphClient;

use crate::output;

/// Show graph status (node/relationship counts).
pub async fn execute(config: AppConfig) -> Result<()> {
    let client = GraphClient::connect_with_timeout(&config.graph).await?;
    let counts = client.get_counts().await?;
    output::print_graph_counts(&config.graph.uri, &counts);
    Ok(())
}
