//! Driving port for user-facing queries.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Use-case port for listing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every upstream user, validated and normalised, in upstream order.
    ///
    /// One invalid record fails the whole call.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
