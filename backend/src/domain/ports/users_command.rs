//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft, UserId};

/// Domain use-case port for creating, replacing and removing users.
///
/// Drafts are expected to be validated by the inbound adapter before they
/// reach this port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Store `draft` under a freshly assigned identifier.
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error>;

    /// Replace the fields of an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::NotFound`] when no user has `id`.
    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, Error>;

    /// Remove an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::NotFound`] when no user has `id`.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
