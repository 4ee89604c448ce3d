//! cicsdeploy CLI tool.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::args::DeployArgs;

#[derive(Parser)]
#[command(name = "cicsdeploy")]
#[command(about = "Deploy CICS bundles through the CICS bundle deployment API", long_about = None)]
struct Cli {
    /// Settings file holding server profiles [default: ~/.cicsdeploy/settings.kdl]
    #[arg(long, env = "CICSDEPLOY_SETTINGS", global = true)]
    settings: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deploy a bundle to a CICS region
    Deploy(DeployArgs),
    /// Resolve and validate a deployment without deploying
    Check {
        #[command(flatten)]
        args: DeployArgs,
        /// Print the resolved deployment as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the server profiles in the settings file
    Servers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = commands::load_settings(cli.settings.as_deref())?;

    match cli.command {
        Commands::Deploy(args) => {
            commands::deploy::run(&settings, &args).await?;
        }
        Commands::Check { args, json } => {
            commands::deploy::check(&settings, &args, json)?;
        }
        Commands::Servers => {
            commands::servers::list(&settings);
        }
    }

    Ok(())
}
