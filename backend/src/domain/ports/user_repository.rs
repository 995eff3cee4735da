//! Port abstraction for user persistence adapters and their errors.
//!
//! The service layer only ever talks to storage through [`UserRepository`].
//! Adapters live under `outbound`: an in-memory map for local runs and tests,
//! and a Diesel/PostgreSQL adapter for deployments.

use async_trait::async_trait;

use crate::domain::{User, UserDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Storage contract for users keyed by [`UserId`].
///
/// Each method is atomic on its own. Callers that combine a lookup with a
/// write (update, delete) get no isolation between the two calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored user, in ascending identifier order.
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Persist `draft`.
    ///
    /// With `id == None` the store assigns a fresh identifier greater than
    /// any it has handed out before. With `Some(id)` the record under that
    /// identifier is overwritten, or created if it does not exist.
    async fn save(
        &self,
        id: Option<UserId>,
        draft: &UserDraft,
    ) -> Result<User, UserPersistenceError>;

    /// Whether a user with `id` is stored.
    async fn exists_by_id(&self, id: UserId) -> Result<bool, UserPersistenceError>;

    /// Remove the user with `id`. Removing an absent user is not an error.
    async fn delete_by_id(&self, id: UserId) -> Result<(), UserPersistenceError>;
}
