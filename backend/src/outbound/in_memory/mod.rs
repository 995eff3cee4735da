//! Process-local user store.
//!
//! Used when no database URL is configured and as the backing store for the
//! HTTP and behaviour tests. Contents are lost when the process exits.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDraft, UserId};

#[derive(Debug)]
struct Store {
    users: BTreeMap<UserId, User>,
    next_id: i64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl Store {
    fn allocate_id(&mut self) -> Result<UserId, UserPersistenceError> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| UserPersistenceError::query("in-memory user identifiers exhausted"))?;
        Ok(UserId::new(id))
    }
}

/// [`UserRepository`] backed by an ordered in-memory map.
///
/// Identifiers start at 1 and are never reused, even after deletion.
/// Saving under an explicit identifier at or beyond the sequence moves the
/// sequence past it. Once the sequence reaches `i64::MAX`, unassigned saves
/// fail with a query error.
///
/// # Examples
/// ```
/// use backend::domain::UserDraft;
/// use backend::domain::ports::UserRepository;
/// use backend::outbound::in_memory::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryUserRepository::new();
/// let user = repo
///     .save(None, &UserDraft::new("Ann", "Lee", "ann@x.com"))
///     .await
///     .expect("save");
/// assert_eq!(user.id().as_i64(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: RwLock<Store>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> UserPersistenceError {
    UserPersistenceError::query("in-memory user store lock poisoned")
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let store = self.store.read().map_err(poisoned)?;
        Ok(store.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let store = self.store.read().map_err(poisoned)?;
        Ok(store.users.get(&id).cloned())
    }

    async fn save(
        &self,
        id: Option<UserId>,
        draft: &UserDraft,
    ) -> Result<User, UserPersistenceError> {
        let mut store = self.store.write().map_err(poisoned)?;
        let id = match id {
            Some(id) => {
                if id.as_i64() >= store.next_id {
                    store.next_id = id.as_i64().saturating_add(1);
                }
                id
            }
            None => store.allocate_id()?,
        };
        let user = User::new(id, draft.clone());
        store.users.insert(id, user.clone());
        Ok(user)
    }

    async fn exists_by_id(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let store = self.store.read().map_err(poisoned)?;
        Ok(store.users.contains_key(&id))
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), UserPersistenceError> {
        let mut store = self.store.write().map_err(poisoned)?;
        store.users.remove(&id);
        Ok(())
    }
}
