//! repohub - In-Memory Repository CRUD Service
//!
//! This is the composition root that wires together all the components.

mod adapters;
mod config;
mod domain;

use crate::adapters::inbound::HttpServer;
use crate::adapters::outbound::MemoryRepositoryStore;
use crate::config::load_config;
use crate::domain::ports::RepositoryStore;
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    tracing::info!("starting repohub listen={}", cfg.listen_addr);

    // The single in-memory store shared by all requests. State lives only
    // for the lifetime of the process.
    let store: Arc<dyn RepositoryStore> = Arc::new(MemoryRepositoryStore::new());

    let server = HttpServer::new(cfg.listen_addr, store);

    server.run().await
}
