//! In-Memory Repository Store
//!
//! Implements RepositoryStore with a plain vector behind a single mutex.
//! One lock serializes every operation, so each create/update/delete/like
//! is atomic with respect to concurrent requests.

use crate::domain::entities::{NewRepository, Repository, RepositoryPatch};
use crate::domain::ports::{RepositoryStore, StoreError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use uuid::Uuid;

/// Mutex-guarded in-memory store.
///
/// Records are appended in creation order and the order is never changed;
/// lookups are a linear scan by exact id. The collection starts empty and
/// is lost when the process exits.
pub struct MemoryRepositoryStore {
    repositories: Arc<Mutex<Vec<Repository>>>,
}

impl MemoryRepositoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            repositories: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Default for MemoryRepositoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepositoryStore for MemoryRepositoryStore {
    async fn list(&self) -> Vec<Repository> {
        self.repositories.lock().clone()
    }

    async fn create(&self, new: NewRepository) -> Repository {
        let repository = Repository {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            url: new.url,
            techs: new.techs,
            likes: 0,
        };

        self.repositories.lock().push(repository.clone());
        repository
    }

    async fn update(&self, id: &str, patch: RepositoryPatch) -> Result<Repository, StoreError> {
        let mut repositories = self.repositories.lock();
        let repository = repositories
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound)?;

        patch.apply(repository);
        Ok(repository.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut repositories = self.repositories.lock();
        let index = repositories
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound)?;

        repositories.remove(index);
        Ok(())
    }

    async fn like(&self, id: &str) -> Result<Repository, StoreError> {
        let mut repositories = self.repositories.lock();
        let repository = repositories
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound)?;

        repository.likes += 1;
        Ok(repository.clone())
    }
}
