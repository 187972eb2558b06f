use anyhow::Result;
use taskmesh::config::Config;
use taskmesh::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    // Bad configuration is fatal before the event loop starts.
    let config = Config::load()?;
    logger::init(&config.logging)?;
    log::info!("Starting taskmesh");

    ui::run_app(config).await?;

    Ok(())
}
