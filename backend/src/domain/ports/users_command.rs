//! Driving port for creating users.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User};

/// Use-case port for user creation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Send already-validated fields upstream and return the stored user.
    async fn create_user(&self, user: NewUser) -> Result<User, Error>;
}
