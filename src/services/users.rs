//! User Service
//!
//! Turns request shapes into full entities, delegates to the configured
//! storage backend and logs every operation. Storage errors pass through
//! unchanged; translation to HTTP happens at the transport boundary.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::error::StorageResult;
use crate::models::{User, UserRequest};
use crate::storage::Storage;

// == User Service ==
/// Mediates between the HTTP layer and the storage abstraction.
///
/// The backend is chosen once at startup and injected as a trait object,
/// so the service is oblivious to whether it talks to the in-memory map
/// or Redis.
pub struct UserService {
    storage: Arc<dyn Storage<User>>,
}

impl UserService {
    /// Creates a new UserService over the given backend.
    pub fn new(storage: Arc<dyn Storage<User>>) -> Self {
        Self { storage }
    }

    /// Mints a fresh identity, assembles the full entity from the request
    /// and persists it. Returns the new identity.
    pub async fn create(&self, req: UserRequest) -> StorageResult<Uuid> {
        let user = Self::assemble(Uuid::new_v4(), req);
        info!(user = ?user, "creating user");
        self.storage.create(user).await
    }

    /// Resolves one user by identity.
    pub async fn get(&self, id: Uuid) -> StorageResult<User> {
        info!(%id, "fetching user by id");
        self.storage.get(id).await
    }

    /// Returns all stored users.
    pub async fn get_all(&self) -> StorageResult<Vec<User>> {
        info!("fetching all users");
        self.storage.get_all().await
    }

    /// Builds a full replacement entity (identity pinned to the
    /// path-supplied value, every other attribute taken from the request,
    /// no merge with stored values) and persists it.
    pub async fn update(&self, id: Uuid, req: UserRequest) -> StorageResult<User> {
        let user = Self::assemble(id, req);
        info!(user = ?user, "updating user");
        self.storage.update(id, user).await
    }

    /// Removes one user by identity.
    pub async fn delete(&self, id: Uuid) -> StorageResult<Uuid> {
        info!(%id, "deleting user");
        self.storage.delete(id).await
    }

    /// Canonical request-to-entity assembly.
    ///
    /// `active` is validated as present at the transport boundary before
    /// any request reaches this layer.
    fn assemble(id: Uuid, req: UserRequest) -> User {
        User {
            id,
            name: req.name,
            last_name: req.last_name,
            email: req.email,
            active: req.active.unwrap_or_default(),
            address: req.address,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::models::Address;
    use crate::storage::MemoryStorage;

    fn service() -> UserService {
        UserService::new(Arc::new(MemoryStorage::<User>::new()))
    }

    fn sample_request() -> UserRequest {
        UserRequest {
            name: "Anakin".to_string(),
            last_name: "Skywalker".to_string(),
            email: "anakin@starwars.com".to_string(),
            active: Some(false),
            address: Address {
                city: "Tatooine".to_string(),
                country: "Outer Rim".to_string(),
                address_string: "Slave Quarters, Mos Espa".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_create_mints_identity_and_persists_attributes() {
        let service = service();
        let req = sample_request();

        let id = service.create(req.clone()).await.unwrap();

        let user = service.get(id).await.unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.name, req.name);
        assert_eq!(user.last_name, req.last_name);
        assert_eq!(user.email, req.email);
        assert_eq!(user.active, req.active.unwrap());
        assert_eq!(user.address, req.address);
    }

    #[tokio::test]
    async fn test_create_mints_distinct_identities() {
        let service = service();

        let first = service.create(sample_request()).await.unwrap();
        let second = service.create(sample_request()).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(service.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_absent_id() {
        let service = service();

        let result = service.get(Uuid::new_v4()).await;
        assert!(matches!(result, Err(StorageError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn test_get_all_empty() {
        let service = service();
        assert!(service.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_without_merging() {
        let service = service();
        let id = service.create(sample_request()).await.unwrap();

        let replacement = UserRequest {
            name: "Luke".to_string(),
            last_name: "Skywalker".to_string(),
            email: "luke@starwars.com".to_string(),
            active: Some(true),
            address: Address {
                city: "Ahch-To".to_string(),
                country: "Unknown Regions".to_string(),
                address_string: "First Jedi Temple".to_string(),
            },
        };

        let updated = service.update(id, replacement.clone()).await.unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Luke");

        let fetched = service.get(id).await.unwrap();
        assert_eq!(fetched.email, replacement.email);
        assert!(fetched.active);
        assert_eq!(fetched.address, replacement.address);
    }

    #[tokio::test]
    async fn test_update_absent_id() {
        let service = service();

        let result = service.update(Uuid::new_v4(), sample_request()).await;
        assert!(matches!(result, Err(StorageError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_then_get_fails() {
        let service = service();
        let id = service.create(sample_request()).await.unwrap();

        let removed = service.delete(id).await.unwrap();
        assert_eq!(removed, id);

        let result = service.get(id).await;
        assert!(matches!(result, Err(StorageError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_absent_id() {
        let service = service();

        let result = service.delete(Uuid::new_v4()).await;
        assert!(matches!(result, Err(StorageError::EntityNotFound(_))));
    }
}
