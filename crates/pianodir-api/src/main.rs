//! pianodir API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p pianodir-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use pianodir_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let tracing_config = match std::env::var("APP_ENV").as_deref() {
        Ok("production") => TracingConfig::production(),
        _ => TracingConfig::development(),
    };
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    info!("Starting pianodir API server...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        port = config.api.port,
        storage = ?config.storage.backend,
        "Configuration loaded"
    );

    pianodir_api::run(config).await?;

    Ok(())
}
