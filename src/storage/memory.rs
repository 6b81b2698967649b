//! In-Memory Backend
//!
//! Process-local associative container keyed by identity. State is
//! ephemeral: created once per process and discarded on exit. The map is
//! guarded by an RwLock so concurrent handlers cannot race on the same
//! identity.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{StorageError, StorageResult};
use crate::storage::{Storage, StorageEntity};

// == Memory Storage ==
/// In-memory storage backend for any [`StorageEntity`].
///
/// Values are stored by clone; no serialization occurs.
#[derive(Debug, Default)]
pub struct MemoryStorage<T> {
    entities: RwLock<HashMap<Uuid, T>>,
}

impl<T> MemoryStorage<T> {
    /// Creates an empty in-memory backend.
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl<T: StorageEntity> Storage<T> for MemoryStorage<T> {
    async fn create(&self, entity: T) -> StorageResult<Uuid> {
        let id = entity.id();
        // Last write wins if the identity already exists
        self.entities.write().await.insert(id, entity);
        Ok(id)
    }

    async fn get(&self, id: Uuid) -> StorageResult<T> {
        self.entities
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StorageError::EntityNotFound(id))
    }

    async fn get_all(&self) -> StorageResult<Vec<T>> {
        Ok(self.entities.read().await.values().cloned().collect())
    }

    async fn update(&self, id: Uuid, entity: T) -> StorageResult<T> {
        let mut entities = self.entities.write().await;
        if !entities.contains_key(&id) {
            return Err(StorageError::EntityNotFound(id));
        }
        entities.insert(id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> StorageResult<Uuid> {
        self.entities
            .write()
            .await
            .remove(&id)
            .map(|_| id)
            .ok_or(StorageError::EntityNotFound(id))
    }
}
