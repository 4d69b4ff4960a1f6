use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{OutputFormat, serve, snapshot};

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "plantmon")]
#[command(about = "Plant monitoring dashboard with simulated temperature readings and forecast")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080).
        /// Overrides `server.bind_address` from the configuration.
        #[arg(short, long, env = "BIND_ADDRESS")]
        bind_address: Option<String>,

        /// Fixed random seed, so every session sees the same readings
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Render one dashboard and print it to stdout
    ///
    /// Shows the ten most recent readings, the statistics over all readings
    /// and the forecast for the next five intervals.
    Snapshot {
        /// Fixed random seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut settings = Settings::load()?;

        match self.command {
            Commands::Serve { bind_address, seed } => {
                if let Some(bind_address) = bind_address {
                    settings.server.bind_address = bind_address;
                }
                if seed.is_some() {
                    settings.generator.seed = seed;
                }
                serve(&settings).await?;
            }
            Commands::Snapshot { seed, format } => {
                let seed = seed.or(settings.generator.seed);
                snapshot(seed, format)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_serve_flags() {
        let cli = Cli::try_parse_from(["plantmon", "serve", "--bind-address", "127.0.0.1:9000", "--seed", "7"])
            .unwrap();

        match cli.command {
            Commands::Serve { bind_address, seed } => {
                assert_eq!(bind_address.as_deref(), Some("127.0.0.1:9000"));
                assert_eq!(seed, Some(7));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn snapshot_defaults_to_table() {
        let cli = Cli::try_parse_from(["plantmon", "snapshot"]).unwrap();

        match cli.command {
            Commands::Snapshot { seed, format } => {
                assert_eq!(seed, None);
                assert_eq!(format, OutputFormat::Table);
            }
            _ => panic!("expected snapshot"),
        }
    }

    #[test]
    fn snapshot_accepts_json() {
        let cli = Cli::try_parse_from(["plantmon", "snapshot", "-f", "json", "-s", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Snapshot {
                seed: Some(3),
                format: OutputFormat::Json
            }
        ));
    }
}
