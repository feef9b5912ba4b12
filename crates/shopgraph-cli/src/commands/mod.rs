//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use shopgraph_core::AppConfig;

pub mod etl;
pub mod serve;
pub mod status;

/// Shopgraph - relational to graph ETL and recommendation API
#[derive(Parser)]
#[command(name = "shopgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML config file
    #[arg(short, long, global = true, env = "SHOPGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Copy the relational tables into the graph
    Etl(etl::EtlArgs),

    /// Start the recommendation API
    Serve(serve::ServeArgs),

    /// Show graph node and relationship counts
    Status,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = AppConfig::load(self.config.as_deref())?;

        match self.command {
            Commands::Etl(args) => etl::execute(args, config).await,
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Status => status::execute(config).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_etl_flags() {
        let cli = Cli::try_parse_from(["shopgraph", "etl", "--batch-size", "50", "--skip-schema"]).unwrap();
        match cli.command {
            Commands::Etl(args) => {
                assert_eq!(args.batch_size, Some(50));
                assert!(args.skip_schema);
            }
            _ => panic!("expected etl"),
        }
    }

    #[test]
    fn test_parse_serve_with_global_config() {
        let cli = Cli::try_parse_from(["shopgraph", "serve", "--port", "9000", "--config", "prod.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("prod.toml")));
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, Some(9000));
                assert!(args.host.is_none());
            }
            _ => panic!("expected serve"),
        }
    }
}
