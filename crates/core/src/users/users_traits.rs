use async_trait::async_trait;

use super::{NewUser, User};
use crate::errors::Result;

/// Persistence for user accounts.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Insert a new user. Fails with a unique violation when the email exists.
    async fn create_user(&self, user: NewUser) -> Result<User>;

    /// Lookup by normalized email.
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Lookup by id, `DatabaseError::NotFound` when absent.
    fn get_by_id(&self, user_id: &str) -> Result<User>;

    async fn set_active(&self, user_id: &str, is_active: bool) -> Result<User>;
}

#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, user: NewUser) -> Result<User>;
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    fn get_user(&self, user_id: &str) -> Result<User>;
    async fn set_active(&self, user_id: &str, is_active: bool) -> Result<User>;
}
