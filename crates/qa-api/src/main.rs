//! Vote API server entry point
//!
//! Run with:
//! ```bash
//! API_PORT=3000 STORAGE_BACKEND=memory cargo run -p qa-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use qa_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    if let Err(e) = try_init_tracing(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        storage = ?config.storage,
        port = config.api.port,
        tally_scope = ?config.voting.tally_scope,
        "Configuration loaded"
    );

    qa_api::run(config).await?;

    Ok(())
}
