//! Domain primitives, services and ports.
//!
//! Purpose: Define the user entity, the transport-agnostic error type and the
//! CRUD service that inbound adapters drive. Persistence is reached only
//! through the [`ports::UserRepository`] trait.
//!
//! Public surface:
//! - Error / ErrorCode: domain failure payload and stable code.
//! - User / UserDraft / UserId: stored user, its mutable fields, its key.
//! - UserService: implementation of the `UsersQuery` and `UsersCommand`
//!   driving ports.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::TraceId;
pub use self::user::{User, UserDraft, UserId};
pub use self::user_service::UserService;

/// Response header carrying the per-request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
