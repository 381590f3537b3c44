//! Main entry point for the Emporium API server

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use emporium_api::{
    config::ApiConfig,
    errors::ConfigError,
    schema::export_schema_sdl,
    start_server,
};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// emporium-api: GraphQL API for customer accounts, baskets and reviews
#[derive(Debug, Parser)]
#[command(name = "emporium-api", about = "GraphQL API for customer accounts, baskets and reviews", version)]
struct Args {
    /// Increase output verbosity (-v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Optional path to a configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Command to execute, defaults to `serve`
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the GraphQL API
    Serve,
    /// Export GraphQL schema to a file in SDL format
    ExportSchema {
        /// Output file path (defaults to stdout if not specified)
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

impl Args {
    /// Loads the configuration file specified by `config` command line argument.
    ///
    /// If no configuration file is specified,
    /// the default configuration is loaded if `use_default` is set.
    fn load_config(&self, use_default: bool) -> Result<ApiConfig, ConfigError> {
        if use_default && self.config.is_none() {
            warn!("no configuration file specified; using default configuration");
            return Ok(ApiConfig::default());
        }

        ApiConfig::from_file(self.config.as_ref().ok_or(ConfigError::NoConfiguration)?)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber. Precedence: RUST_LOG env > -v flag > default info
    let env_filter = if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() {
        EnvFilter::from_default_env()
    } else {
        match args.verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .compact()
        .init();

    match args.command {
        Some(Command::ExportSchema { ref output }) => {
            let schema_sdl = export_schema_sdl();
            if let Some(output_path) = output {
                std::fs::write(output_path, schema_sdl)?;
                eprintln!("GraphQL schema exported to: {}", output_path.display());
            } else {
                println!("{}", schema_sdl);
            }
        }
        Some(Command::Serve) | None => {
            info!(
                verbosity = args.verbose,
                config = args.config.as_ref().map(|p| p.display().to_string()).as_deref(),
                "emporium-api starting"
            );
            let config = args.load_config(true)?;
            start_server(config).await?;
        }
    }

    Ok(())
}
