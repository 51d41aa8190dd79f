//! Runs the user, task, and notification contexts in one process.
//!
//! Configuration is read from `TASKMESH_*` environment variables; see
//! [`taskmesh::config::ServiceConfig`]. The process seeds sample users
//! into an empty store and runs until interrupted.

use taskmesh::{config::ServiceConfig, runtime::ServiceRuntime, telemetry};
use tracing::{error, info};

const ENV_PREFIX: &str = "TASKMESH";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init();

    let config = ServiceConfig::from_env(ENV_PREFIX).inspect_err(|err| {
        error!(error = %err, "invalid configuration");
    })?;
    info!(service = %config.service_name, storage = ?config.storage, "configuration loaded");

    let runtime = ServiceRuntime::start(&config).await?;
    let seeded = runtime.seed_users().await?;
    info!(seeded, "sample users ready");

    tokio::signal::ctrl_c().await?;
    info!("interrupt received; shutting down");
    runtime.shutdown().await;
    Ok(())
}
