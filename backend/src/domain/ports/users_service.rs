//! Driving port for user reads and registration.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserId};

/// Use-case port consumed by the users HTTP handlers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Every user in insertion order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// One user; [`crate::domain::ErrorCode::NotFound`] when absent.
    async fn get_user(&self, id: UserId) -> Result<User, Error>;

    /// Store an already validated user and return it with its id.
    async fn create_user(&self, user: NewUser) -> Result<User, Error>;
}
