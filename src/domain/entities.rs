//! Domain Entities - Core business objects
//!
//! These entities represent the repository records managed by repohub.
//! They have no external dependencies beyond serde derives.

use serde::{Deserialize, Serialize};

/// A repository record tracked by the service.
///
/// Records live only in process memory and are identified by a
/// server-assigned UUID for their whole lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Unique identifier, generated as a random v4 UUID at creation
    pub id: String,
    /// Human-readable title
    pub title: String,
    /// Link to the repository
    pub url: String,
    /// Ordered technology tags
    pub techs: Vec<String>,
    /// Like counter, starts at 0
    pub likes: u64,
}

/// Payload for creating a repository.
///
/// Field contents are deliberately not validated; absent fields default
/// to empty values instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewRepository {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub techs: Vec<String>,
}

/// Sparse update payload.
///
/// Only the fields present in the request overwrite the stored record;
/// `id` and `likes` are never touched by an update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositoryPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub techs: Option<Vec<String>>,
}

impl RepositoryPatch {
    /// Apply the patch to a record, overwriting only the provided fields.
    pub fn apply(self, repository: &mut Repository) {
        if let Some(title) = self.title {
            repository.title = title;
        }
        if let Some(url) = self.url {
            repository.url = url;
        }
        if let Some(techs) = self.techs {
            repository.techs = techs;
        }
    }
}
