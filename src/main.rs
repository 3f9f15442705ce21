use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use letsdoit::config::Config;
use letsdoit::storage::{LocalStorage, MemoryStorage, SnapshotStorage};
use letsdoit::{logger, ui, TaskService};

#[derive(Parser, Debug)]
#[command(name = "letsdoit")]
#[command(about = "A keyboard-driven terminal todo list")]
#[command(version)]
struct Cli {
    /// Keep tasks in memory only; nothing is saved
    #[arg(long)]
    ephemeral: bool,

    /// Write a default config file and exit
    #[arg(long)]
    generate_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.generate_config {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;
    let logger = logger::init(&config.logging)?;

    let storage: Arc<dyn SnapshotStorage> = if cli.ephemeral || config.storage.ephemeral {
        log::info!("Storage: ephemeral session, nothing will be saved");
        Arc::new(MemoryStorage::new())
    } else {
        let path = config.database_path()?;
        let storage = LocalStorage::open(&path)
            .await
            .with_context(|| format!("Failed to open database at {}", path.display()))?;
        Arc::new(storage)
    };

    let service = TaskService::open(storage, config.ui.default_theme).await;

    // Run the TUI application
    ui::run_app(service, &config, logger).await?;

    Ok(())
}
