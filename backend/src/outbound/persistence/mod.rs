//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Provides [`DieselUserRepository`] backed by `diesel-async` with a `bb8`
//! connection pool, plus the embedded schema migrations.
//!
//! Row structs (`models.rs`) and table definitions (`schema.rs`) stay private
//! to this module; only domain types cross the boundary.
//!
//! # Example
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/users")).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
