//! User store interface.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::errors::DomainResult;

/// Persistence seam for user accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user; fails with a validation error on duplicate email
    async fn create(&self, user: User) -> DomainResult<User>;

    /// Look up a user by email
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Look up a user by id
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>>;

    /// All users, oldest first
    async fn list(&self) -> DomainResult<Vec<User>>;

    /// Delete a user by id; returns whether a row was removed
    async fn delete(&self, id: Uuid) -> DomainResult<bool>;
}
