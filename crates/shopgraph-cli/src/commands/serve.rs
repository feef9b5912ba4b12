//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

use shopgraph_core::AppConfig;
use shopgraph_graph::GraphClient;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on (overrides config)
    #[arg(long)]
    pub port: Option<u16>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (default: ./shopgraph-serve.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, mut config: AppConfig) -> Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let client = GraphClient::connect_with_timeout(&config.graph).await?;

    println!();
    println!("  {} {}", "Shopgraph".cyan().bold(), "Recommendation API".bold());
    println!();
    println!(
        "  {}  http://{}:{}",
        "API".green(),
        config.server.host,
        config.server.port
    );
    println!("  {}  {}", "Graph".green(), config.graph.uri);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    shopgraph_web::run_server(Arc::new(client), config.server).await?;

    Ok(())
}
