//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Every port method is a single SQL statement. Overwrites are expressed as
//! `INSERT ... ON CONFLICT (id) DO UPDATE`, so saving under an identifier that
//! was deleted in between recreates the row rather than failing.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDraft, UserId};

use super::models::{NewUserRowWithId, UserFields, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserPersistenceError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => UserPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        _ => UserPersistenceError::query("database error"),
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<UserRow> = users::table
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<UserRow> = users::table
            .filter(users::id.eq(id.as_i64()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(User::from))
    }

    async fn save(
        &self,
        id: Option<UserId>,
        draft: &UserDraft,
    ) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let fields = UserFields::from(draft);
        let row: UserRow = match id {
            None => {
                diesel::insert_into(users::table)
                    .values(&fields)
                    .returning(UserRow::as_returning())
                    .get_result::<UserRow>(&mut conn)
                    .await
            }
            Some(id) => {
                let new_row = NewUserRowWithId {
                    id: id.as_i64(),
                    first_name: fields.first_name,
                    last_name: fields.last_name,
                    email: fields.email,
                };
                diesel::insert_into(users::table)
                    .values(&new_row)
                    .on_conflict(users::id)
                    .do_update()
                    .set((
                        users::first_name.eq(excluded(users::first_name)),
                        users::last_name.eq(excluded(users::last_name)),
                        users::email.eq(excluded(users::email)),
                    ))
                    .returning(UserRow::as_returning())
                    .get_result::<UserRow>(&mut conn)
                    .await
            }
        }
        .map_err(map_diesel_error)?;
        Ok(row.into())
    }

    async fn exists_by_id(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(diesel::dsl::exists(
            users::table.filter(users::id.eq(id.as_i64())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(users::table.filter(users::id.eq(id.as_i64())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        debug!(user_id = %id, removed, "user rows deleted");
        Ok(())
    }
}
