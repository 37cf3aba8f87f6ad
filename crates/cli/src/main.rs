mod cmd;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

/// cfgen - render Cloud Foundry deployment manifests from a system config
#[derive(Parser)]
#[command(name = "cfgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Render the core deployment manifest into the system's deployments directory
  Render {
    /// Path to the system config file
    #[arg(default_value = "system_config.yml")]
    config: String,

    /// UUID of the director the manifest targets
    #[arg(long, env = "CFGEN_DIRECTOR_UUID")]
    director_uuid: String,
  },

  /// Print the manifest that would be rendered, without writing it
  Plan {
    /// Path to the system config file
    #[arg(default_value = "system_config.yml")]
    config: String,

    /// UUID of the director the manifest targets
    #[arg(long, env = "CFGEN_DIRECTOR_UUID")]
    director_uuid: String,
  },

  /// Check a system config for missing fields and an unsupported provider
  Validate {
    /// Path to the system config file
    #[arg(default_value = "system_config.yml")]
    config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_filter = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match cli.command {
    Commands::Render { config, director_uuid } => cmd::cmd_render(&config, &director_uuid),
    Commands::Plan { config, director_uuid } => cmd::cmd_plan(&config, &director_uuid),
    Commands::Validate { config, output } => cmd::cmd_validate(&config, output),
  }
}
