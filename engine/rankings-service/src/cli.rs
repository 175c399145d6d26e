//! # Command Line Interface

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::config::ServiceConfig;
use crate::pipeline::{compute_rankings, LeagueSnapshot, LeagueSource, MflSource, StaticSource};
use crate::render::{render, OutputFormat};
use crate::rest_api;

/// Power rankings for a MyFantasyLeague league
#[derive(Debug, Parser)]
#[command(name = "rankings-service", version)]
#[command(about = "Composite power rankings for a MyFantasyLeague league")]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Rank a saved league snapshot instead of fetching from MFL
    #[arg(long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP service
    Serve,
    /// Rank the league once and print the result
    Print {
        /// Print the JSON payload instead of the table
        #[arg(long)]
        json: bool,
        /// Show team IDs instead of team and owner names
        #[arg(long)]
        hide_names: bool,
    },
    /// Fetch league data and save it as a snapshot
    Snapshot {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Build the league source selected on the command line
pub fn league_source(cli: &Cli, config: &ServiceConfig) -> Result<Arc<dyn LeagueSource>> {
    match &cli.snapshot {
        Some(path) => {
            info!("Using league snapshot {:?}", path);
            Ok(Arc::new(StaticSource::new(LeagueSnapshot::from_file(path)?)))
        }
        None => Ok(Arc::new(MflSource::new(config.mfl.clone())?)),
    }
}

/// Run one CLI command to completion
pub async fn run(cli: Cli, config: ServiceConfig) -> Result<()> {
    let source = league_source(&cli, &config)?;

    match cli.command {
        Commands::Serve => {
            rest_api::serve(&config.server, config.render.clone(), source).await?;
        }
        Commands::Print { json, hide_names } => {
            let teams = compute_rankings(source.as_ref()).await?;
            let format = if json { OutputFormat::Json } else { OutputFormat::Table };
            let hide_names = hide_names || config.render.hide_team_names;
            println!("{}", render(&teams, format, hide_names)?);
        }
        Commands::Snapshot { output } => {
            let snapshot = source.snapshot().await?;
            let json = serde_json::to_string_pretty(&snapshot)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write snapshot to {:?}", path))?;
                    info!("Saved snapshot of {} franchises to {:?}", snapshot.roster.len(), path);
                }
                None => println!("{json}"),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::tests::sample_snapshot;

    #[test]
    fn test_parse_print() {
        let cli = Cli::try_parse_from([
            "rankings-service",
            "print",
            "--json",
            "--config",
            "rankings.toml",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("rankings.toml")));
        assert!(matches!(cli.command, Commands::Print { json: true, hide_names: false }));
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["rankings-service", "--snapshot", "week9.json", "serve"])
            .unwrap();

        assert_eq!(cli.snapshot, Some(PathBuf::from("week9.json")));
        assert!(matches!(cli.command, Commands::Serve));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["rankings-service"]).is_err());
    }

    #[tokio::test]
    async fn test_snapshot_round_trip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.json");
        let output = dir.path().join("output.json");
        std::fs::write(&input, serde_json::to_string(&sample_snapshot()).unwrap()).unwrap();

        let cli = Cli {
            config: None,
            snapshot: Some(input),
            command: Commands::Snapshot { output: Some(output.clone()) },
        };
        run(cli, ServiceConfig::default()).await.unwrap();

        assert_eq!(LeagueSnapshot::from_file(&output).unwrap(), sample_snapshot());
    }

    #[test]
    fn test_missing_snapshot_file() {
        let cli = Cli {
            config: None,
            snapshot: Some(PathBuf::from("/nonexistent/snapshot.json")),
            command: Commands::Serve,
        };
        assert!(league_source(&cli, &ServiceConfig::default()).is_err());
    }
}
