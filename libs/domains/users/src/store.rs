use async_trait::async_trait;
use core_common::BaseEntity;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::User;

/// Ordered collection of users.
///
/// Implementations must apply each operation atomically: a concurrent
/// request never observes a half-finished replace or delete.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Every user in insertion order.
    async fn list(&self) -> Vec<User>;

    /// First user with the given id.
    async fn get(&self, id: &str) -> Option<User>;

    /// Append at the end.
    async fn insert(&self, user: User) -> User;

    /// Swap the user with `id` in place, keeping its position and creation
    /// stamp. `None` when no user has that id.
    async fn replace(&self, id: &str, user: User) -> Option<User>;

    /// `true` when a user was removed.
    async fn delete(&self, id: &str) -> bool;
}

/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the two sample users.
    pub fn seeded() -> Self {
        let sample = |username: &str, first: &str, last: &str| User {
            base: BaseEntity::new(),
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password: None,
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
        };

        let users = vec![
            sample("user1", "John", "Doe"),
            sample("user2", "Jane", "Smith"),
        ];
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    async fn get(&self, id: &str) -> Option<User> {
        self.users.read().await.iter().find(|u| u.id() == id).cloned()
    }

    async fn insert(&self, user: User) -> User {
        self.users.write().await.push(user.clone());

        tracing::info!(user_id = %user.id(), "Created user");
        user
    }

    async fn replace(&self, id: &str, mut user: User) -> Option<User> {
        let mut users = self.users.write().await;
        let slot = users.iter_mut().find(|u| u.id() == id)?;

        user.base.id = id.to_string();
        user.base.created_at = slot.base.created_at;
        *slot = user.clone();

        tracing::info!(user_id = %id, "Updated user");
        Some(user)
    }

    async fn delete(&self, id: &str) -> bool {
        let mut users = self.users.write().await;
        let Some(index) = users.iter().position(|u| u.id() == id) else {
            return false;
        };
        users.remove(index);

        tracing::info!(user_id = %id, "Deleted user");
        true
    }
}
