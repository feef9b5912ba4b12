//! Batch load command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use shopgraph_core::AppConfig;
use shopgraph_graph::{schema, GraphClient};

use crate::output;

#[derive(Args)]
pub struct EtlArgs {
    /// Rows per UNWIND batch (overrides config)
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Do not create uniqueness constraints before loading
    #[arg(long)]
    pub skip_schema: bool,
}

pub async fn execute(args: EtlArgs, mut config: AppConfig) -> Result<()> {
    if let Some(batch_size) = args.batch_size {
        config.etl.batch_size = batch_size.max(1);
    }
    if args.skip_schema {
        config.etl.init_schema = false;
    }

    println!("{}", "Reading source tables...".bold());
    let pool = shopgraph_db::init_pool(&config.postgres)
        .await
        .context("Failed to connect to PostgreSQL")?;
    let tables = shopgraph_db::load_tables(&pool).await?;
    pool.close().await;
    output::print_table_counts(&tables.counts());

    println!("\n{}", "Loading into the graph...".bold());
    let client = GraphClient::connect_with_timeout(&config.graph).await?;

    if config.etl.init_schema {
        schema::initialize_schema(&client).await?;
    }

    let result = shopgraph_graph::run_full_sync(&client, &tables, config.etl.batch_size).await?;
    output::print_sync_result(&result);

    println!("\n{}", "ETL complete.".green().bold());
    Ok(())
}
