//! Repository trait for exercise tracker users.

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::Inserted;
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a user unless the username is taken.
    ///
    /// Returns [`Inserted::Existing`] with the current holder of the username
    /// when it is already registered. The check and the insert are atomic.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert_if_absent(&self, new_user: NewUser) -> Result<Inserted<User>, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Lists all users in registration order.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Checks that the backing store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
