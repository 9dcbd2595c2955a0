use anyhow::Context;
use clap::Parser;
use effectio::app::{self, AppConfig};
use std::path::PathBuf;
use tracing::debug;

/// Log, upload and log again: save a file through the effect runtime
#[derive(Parser)]
#[command(name = "effectio")]
#[command(about = "Save a file by uploading it and logging the outcome", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// File the log messages are appended to
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// URL the payload is POSTed to
    #[arg(long)]
    endpoint: Option<String>,

    /// Name of the file being saved
    path: String,

    /// Read the payload from this file instead of using an empty body
    #[arg(long)]
    payload: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    if cli.verbose > 0 {
        config = config.with_verbose(cli.verbose);
    }
    if let Some(log_file) = &cli.log_file {
        config = config.with_log_file(log_file.clone());
    }
    if let Some(endpoint) = &cli.endpoint {
        config = config.with_endpoint(endpoint.clone());
    }
    Ok(config)
}

async fn run(cli: &Cli, config: &AppConfig) -> anyhow::Result<()> {
    let payload = match &cli.payload {
        Some(path) => tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read payload {}", path.display()))?,
        None => Vec::new(),
    };

    debug!("Payload is {} bytes", payload.len());
    app::save_file(config, &cli.path, payload).await?;
    println!("Saved file {}", cli.path);
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => app::handle_fatal_error(e, cli.verbose),
    };
    app::init_logging(&config);

    if let Err(e) = run(&cli, &config).await {
        app::handle_fatal_error(e, config.verbose);
    }
}
