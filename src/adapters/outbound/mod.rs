mod memory_repository_store;

pub use memory_repository_store::MemoryRepositoryStore;
