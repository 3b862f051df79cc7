use core_common::BaseEntity;
use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{User, UserDto};
use crate::store::UserStore;

/// User use cases on top of a [`UserStore`].
///
/// Payloads are validated by the HTTP extractor before they reach here.
#[derive(Clone)]
pub struct UserService<S: UserStore> {
    store: Arc<S>,
}

impl<S: UserStore> UserService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub async fn list_users(&self) -> Vec<UserDto> {
        self.store.list().await.into_iter().map(UserDto::from).collect()
    }

    pub async fn get_user(&self, id: &str) -> UserResult<UserDto> {
        self.store
            .get(id)
            .await
            .map(UserDto::from)
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    pub async fn create_user(&self, input: UserDto) -> UserDto {
        let user = User::from_dto(input, BaseEntity::new());
        self.store.insert(user).await.into()
    }

    /// Replace every client-controlled field of the user with `id`.
    pub async fn update_user(&self, id: &str, input: UserDto) -> UserResult<UserDto> {
        let base = BaseEntity::existing(id, chrono::Utc::now(), None).touched();
        self.store
            .replace(id, User::from_dto(input, base))
            .await
            .map(UserDto::from)
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    pub async fn delete_user(&self, id: &str) -> UserResult<()> {
        if !self.store.delete(id).await {
            return Err(UserError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{InMemoryUserStore, MockUserStore};
    use mockall::predicate::eq;

    fn bob() -> UserDto {
        UserDto {
            id: Some("client".to_string()),
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password: Some("Bob12345".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_assigns_identity() {
        let service = UserService::new(InMemoryUserStore::new());
        let created = service.create_user(bob()).await;

        assert_ne!(created.id.as_deref(), Some("client"));
        assert!(created.created_at.is_some());
        assert!(created.updated_at.is_none());
        assert_eq!(service.list_users().await.len(), 1);
    }

    #[tokio::test]
    async fn test_update_stamps_and_keeps_identity() {
        let service = UserService::new(InMemoryUserStore::new());
        let created = service.create_user(bob()).await;
        let id = created.id.clone().unwrap();

        let mut change = bob();
        change.email = "robert@example.com".to_string();
        let updated = service.update_user(&id, change).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.email, "robert@example.com");
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let mut store = MockUserStore::new();
        store
            .expect_replace()
            .withf(|id, _| id == "ghost")
            .times(1)
            .returning(|_, _| None);

        let service = UserService::new(store);
        let err = service.update_user("ghost", bob()).await.unwrap_err();
        assert!(matches!(err, UserError::NotFound(id) if id == "ghost"));
    }

    #[tokio::test]
    async fn test_delete_unknown_is_not_found() {
        let mut store = MockUserStore::new();
        store
            .expect_delete()
            .with(eq("ghost"))
            .times(1)
            .returning(|_| false);

        let service = UserService::new(store);
        assert!(matches!(
            service.delete_user("ghost").await,
            Err(UserError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_get_returns_stored_user() {
        let service = UserService::new(InMemoryUserStore::seeded());
        let first = service.list_users().await.remove(0);

        let fetched = service.get_user(first.id.as_deref().unwrap()).await.unwrap();
        assert_eq!(fetched, first);
    }
}
