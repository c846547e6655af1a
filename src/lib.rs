//! repohub Library
//!
//! This module exposes the repohub components for use in integration tests
//! and as a library.

pub mod adapters;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use adapters::inbound::HttpServer;
pub use adapters::outbound::MemoryRepositoryStore;
pub use config::load_config;
pub use domain::entities::{NewRepository, Repository, RepositoryPatch};
pub use domain::ports::{RepositoryStore, StoreError};
