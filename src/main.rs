use anyhow::Result;
use clap::{Parser, Subcommand};

/// bindisa - Bindisa Agritech website
#[derive(Parser)]
#[command(name = "bindisa")]
#[command(about = "Bindisa Agritech contact page server", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = bindisa::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    bindisa::observability::init_observability(
        "bindisa",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let result = match cli.command {
        Commands::Serve { host, port } => bindisa::cli::serve(config, host, port).await,
    };

    bindisa::observability::shutdown_observability();

    result
}
