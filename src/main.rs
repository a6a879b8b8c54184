use std::time::Duration;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use siteprobe::config::load_config;
use siteprobe::http_probe::prelude::*;
use siteprobe::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config()?;
    info!(
        timeout_seconds = config.timeout_seconds,
        user_agent = %config.user_agent,
        "starting siteprobe"
    );

    let prober = Prober::new(&config.user_agent, Duration::from_secs(config.timeout_seconds))?;
    server::run(&config.listen_addr, AppState { prober }).await
}
