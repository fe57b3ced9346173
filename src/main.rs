use anyhow::{Context, Result};
use datefield::{config::Config, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    // `datefield-demo --generate-config` writes the defaults and exits
    if std::env::args().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        return Config::generate_default_config(path);
    }

    let config = Config::load().context("Failed to load configuration")?;
    let logger = logger::init(&config.logging)?;
    log::info!("Starting date picker demo");

    // Run the TUI application
    ui::run_app(&config, logger).await?;

    Ok(())
}
