//! User CRUD domain service.
//!
//! [`UserService`] implements both driving ports on top of any
//! [`UserRepository`]. Update and delete check for existence first and then
//! act; the two steps are separate repository calls.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, User, UserDraft, UserId};

/// User service implementing [`UsersQuery`] and [`UsersCommand`].
#[derive(Clone)]
pub struct UserService<R> {
    repository: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    fn map_persistence_error(operation: &'static str, err: UserPersistenceError) -> Error {
        error!(operation, error = %err, "user repository call failed");
        match err {
            UserPersistenceError::Connection { message } => {
                Error::internal(format!("user repository unavailable: {message}"))
            }
            UserPersistenceError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
        }
    }

    async fn require_user(&self, operation: &'static str, id: UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|err| Self::map_persistence_error(operation, err))?
            .ok_or_else(|| Error::user_not_found(id))
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository
            .find_all()
            .await
            .map_err(|err| Self::map_persistence_error("list_users", err))
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|err| Self::map_persistence_error("find_user", err))
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error> {
        let user = self
            .repository
            .save(None, &draft)
            .await
            .map_err(|err| Self::map_persistence_error("create_user", err))?;
        debug!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, Error> {
        let existing = self.require_user("update_user", id).await?;
        let user = self
            .repository
            .save(Some(existing.id()), &draft)
            .await
            .map_err(|err| Self::map_persistence_error("update_user", err))?;
        debug!(user_id = %id, "user updated");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        let exists = self
            .repository
            .exists_by_id(id)
            .await
            .map_err(|err| Self::map_persistence_error("delete_user", err))?;
        if !exists {
            return Err(Error::user_not_found(id));
        }
        self.repository
            .delete_by_id(id)
            .await
            .map_err(|err| Self::map_persistence_error("delete_user", err))?;
        debug!(user_id = %id, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
