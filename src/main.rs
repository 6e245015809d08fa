use anyhow::Result;
use daterange::{config::Config, logger::Logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: failed to load configuration: {e:#}");
            eprintln!("\n💡 Fix or remove daterange.toml and run the app again.");
            std::process::exit(1);
        }
    };

    let logger = Logger::from_config(&config.logging)?;

    // Run the TUI application
    ui::run_app(config, logger).await?;

    Ok(())
}
