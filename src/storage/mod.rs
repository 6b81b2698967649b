//! Storage Module
//!
//! Generic storage abstraction over any entity type that exposes an
//! identity, with two interchangeable backends: a process-local in-memory
//! map and a remote Redis cache.

mod memory;
mod redis;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::error::StorageResult;

// Re-export public types
pub use memory::MemoryStorage;
pub use redis::RedisStorage;

// == Storage Entity Trait ==
/// Constraint for anything a backend can store: the entity exposes its
/// own identity and a key namespace for backends that share a keyspace
/// across entity kinds.
pub trait StorageEntity:
    Clone + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// Namespace prefix for this entity kind; remote keys take the form
    /// `<KIND>:<id>`
    const KIND: &'static str;

    /// The entity's unique, immutable identity
    fn id(&self) -> Uuid;
}

// == Storage Trait ==
/// Capability interface implemented by every backend.
///
/// `create` is idempotent by identity (last write wins); `get`, `update`
/// and `delete` fail with [`StorageError::EntityNotFound`] when the
/// identity is absent.
///
/// [`StorageError::EntityNotFound`]: crate::error::StorageError::EntityNotFound
#[async_trait]
pub trait Storage<T: StorageEntity>: Send + Sync {
    /// Inserts the entity under its own identity and returns that identity.
    async fn create(&self, entity: T) -> StorageResult<Uuid>;

    /// Resolves a single entity by identity.
    async fn get(&self, id: Uuid) -> StorageResult<T>;

    /// Returns all stored entities; order is unspecified and an empty
    /// store yields an empty vector.
    async fn get_all(&self) -> StorageResult<Vec<T>>;

    /// Fully replaces the entity stored under `id` and returns the stored
    /// value.
    async fn update(&self, id: Uuid, entity: T) -> StorageResult<T>;

    /// Removes the entity stored under `id` and returns the removed
    /// identity.
    async fn delete(&self, id: Uuid) -> StorageResult<Uuid>;
}
