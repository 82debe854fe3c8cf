use anyhow::Result;
use tasklist::config::Config;
use tasklist::logger::Logger;
use tasklist::store::TaskStore;
use tasklist::ui;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::load()?;
    let logger = Logger::from_config(&config.logging)?;
    if let Some(path) = logger.file_path() {
        logger.log(format!("Logging to {}", path.display()));
    }

    // Run the TUI application
    ui::run_app(TaskStore::new(), config, logger).await?;

    Ok(())
}
