// Allow non-snake_case names for JSON serialization compatibility with the stored records
#![allow(non_snake_case)]

pub mod commands;
pub mod insights;
pub mod models;
pub mod server;
pub mod storage;

use tokio_util::sync::CancellationToken;

/// Initialize storage from the global data directory and serve the insights
/// API until a shutdown signal arrives
pub async fn run() -> Result<(), String> {
    let storage = storage::initStorage()?;
    println!(
        "Loaded {} tasks across {} folders",
        storage.tasks.read().len(),
        storage.folders.read().len()
    );

    let ct = CancellationToken::new();
    let shutdownToken = ct.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            shutdownToken.cancel();
        }
    });

    server::startServer(ct).await
}
