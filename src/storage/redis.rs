//! Remote Redis Backend
//!
//! Wraps an async Redis connection. Entities are serialized to JSON and
//! stored with no expiration under namespaced keys of the form
//! `<kind>:<id>`.
//!
//! Known imprecision, kept for compatibility with the original key-value
//! layout: single-key `GET` failures are collapsed into
//! `EntityNotFound`, so a transient connectivity error is reported the
//! same way as a genuinely absent key.

use std::marker::PhantomData;

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};
use tracing::info;
use uuid::Uuid;

use crate::error::{StorageError, StorageResult};
use crate::storage::{Storage, StorageEntity};

// == Redis Storage ==
/// Redis-backed storage for any [`StorageEntity`].
///
/// The connection manager multiplexes one connection and is cheap to
/// clone per operation.
#[derive(Clone)]
pub struct RedisStorage<T> {
    conn: ConnectionManager,
    _entity: PhantomData<fn() -> T>,
}

impl<T: StorageEntity> RedisStorage<T> {
    // == Constructor ==
    /// Connects to the Redis server at `url` and verifies liveness with a
    /// PING.
    ///
    /// A failure here is fatal: the caller gets no usable instance and is
    /// expected to abort startup rather than retry.
    pub async fn connect(url: &str) -> StorageResult<Self> {
        let client = redis::Client::open(url)
            .map_err(|err| StorageError::ConnectionFailed(err.to_string()))?;
        let mut conn = ConnectionManager::new(client)
            .await
            .map_err(|err| StorageError::ConnectionFailed(err.to_string()))?;

        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await
            .map_err(|err| StorageError::ConnectionFailed(err.to_string()))?;

        info!(url, kind = T::KIND, "connected to redis");

        Ok(Self {
            conn,
            _entity: PhantomData,
        })
    }

    /// Composite key for one entity: `<kind>:<id>`
    fn key(id: Uuid) -> String {
        format!("{}:{}", T::KIND, id)
    }

    /// Serializes the entity and writes it under its namespaced key with
    /// no expiration.
    async fn set_value(&self, id: Uuid, entity: &T) -> StorageResult<()> {
        let payload = serde_json::to_string(entity)
            .map_err(|err| StorageError::MarshalingEntity(err.to_string()))?;

        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(Self::key(id), payload)
            .await
            .map_err(|err| StorageError::Backend(err.to_string()))
    }

    fn decode(raw: &str) -> StorageResult<T> {
        serde_json::from_str(raw).map_err(|err| StorageError::UnmarshalingEntity(err.to_string()))
    }
}

#[async_trait]
impl<T: StorageEntity> Storage<T> for RedisStorage<T> {
    async fn create(&self, entity: T) -> StorageResult<Uuid> {
        let id = entity.id();
        self.set_value(id, &entity).await?;
        Ok(id)
    }

    async fn get(&self, id: Uuid) -> StorageResult<T> {
        let mut conn = self.conn.clone();
        // Client errors and key absence both normalize to not-found
        let value: Option<String> = conn
            .get(Self::key(id))
            .await
            .map_err(|_| StorageError::EntityNotFound(id))?;

        let raw = value.ok_or(StorageError::EntityNotFound(id))?;
        Self::decode(&raw)
    }

    async fn get_all(&self) -> StorageResult<Vec<T>> {
        let pattern = format!("{}:*", T::KIND);
        let mut conn = self.conn.clone();

        let keys: Vec<String> = {
            let mut iter = conn
                .scan_match::<_, String>(&pattern)
                .await
                .map_err(|err| StorageError::GettingRecords(err.to_string()))?;

            let mut keys = Vec::new();
            while let Some(key) = iter.next_item().await {
                keys.push(key);
            }
            keys
        };

        // An empty keyspace is an empty result, not an MGET with no
        // arguments
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let values: Vec<Option<String>> = redis::cmd("MGET")
            .arg(&keys)
            .query_async(&mut conn)
            .await
            .map_err(|err| StorageError::GettingRecords(err.to_string()))?;

        // Decode each value independently; the first failure aborts the
        // whole call, no partial results
        let mut entities = Vec::with_capacity(values.len());
        for value in values {
            let raw = value.ok_or_else(|| {
                StorageError::UnmarshalingEntity("missing value for scanned key".to_string())
            })?;
            entities.push(Self::decode(&raw)?);
        }

        Ok(entities)
    }

    async fn update(&self, id: Uuid, entity: T) -> StorageResult<T> {
        // Existence check first; absent ids never produce a blind write
        self.get(id).await?;
        self.set_value(id, &entity).await?;
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> StorageResult<Uuid> {
        self.get(id).await?;

        let mut conn = self.conn.clone();
        conn.del::<_, ()>(Self::key(id))
            .await
            .map_err(|err| StorageError::Backend(err.to_string()))?;

        Ok(id)
    }
}
