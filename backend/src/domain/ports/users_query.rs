//! Driving port for user reads.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch users without
//! importing outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every stored user in ascending identifier order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Return the user with `id`, or `None` when it is absent.
    ///
    /// Absence is not an error at this level; adapters decide how to report
    /// it.
    async fn find_user(&self, id: UserId) -> Result<Option<User>, Error>;
}
