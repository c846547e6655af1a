//! Repository Store Port
//!
//! Defines the interface for the shared collection of repository records.
//! Implementations may keep the records in memory or anywhere else; the
//! HTTP layer only talks to this interface.

use crate::domain::entities::{NewRepository, Repository, RepositoryPatch};
use async_trait::async_trait;

/// Failures a store operation can report.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// No record with the given id exists in the collection.
    #[error("Repository not found!")]
    NotFound,
}

/// Store for the shared sequence of repository records.
///
/// Insertion order is preserved: new records are appended and the
/// sequence is never reordered. Lookups by id use exact string equality;
/// ids are unique, so the first match is the only match.
#[async_trait]
pub trait RepositoryStore: Send + Sync {
    /// Get all records in insertion order.
    async fn list(&self) -> Vec<Repository>;

    /// Create a record with a fresh id and zero likes, append it, return it.
    async fn create(&self, new: NewRepository) -> Repository;

    /// Merge the provided fields into the matching record and return it.
    async fn update(&self, id: &str, patch: RepositoryPatch) -> Result<Repository, StoreError>;

    /// Remove the matching record, preserving the order of the rest.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Increment the matching record's like counter by one and return it.
    async fn like(&self, id: &str) -> Result<Repository, StoreError>;
}
