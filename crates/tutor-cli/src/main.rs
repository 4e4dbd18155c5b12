mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tutor_core::config::ClientConfig;

#[derive(Parser)]
#[command(name = "tutor", about = "GRE tutor command-line client")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Client config file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Hostname used to pick the server origin (overrides the config)
    #[arg(long, global = true)]
    host: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single question, optionally about an image
    Ask(commands::ask::AskArgs),
    /// Interactive conversation with follow-ups and feedback
    Chat(commands::chat::ChatArgs),
    /// Show the resolved server URLs
    Endpoint,
    /// Print or save the default client config
    Config(commands::config::ConfigArgs),
    /// Show the server's OCR engine version
    ServerInfo,
}

fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = match cli.config {
        Some(ref path) => ClientConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ClientConfig::default(),
    };
    if let Some(ref host) = cli.host {
        config.hostname = host.clone();
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Ask(args) => commands::ask::run(args, &config),
        Commands::Chat(args) => commands::chat::run(args, &config),
        Commands::Endpoint => commands::endpoint::run(&config),
        Commands::Config(args) => commands::config::run(args, &config),
        Commands::ServerInfo => commands::server_info::run(&config),
    }
}
