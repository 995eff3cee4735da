//! Outbound adapters implementing the user repository port.
//!
//! - **in_memory**: process-local store, used when no database is configured
//! - **persistence**: PostgreSQL via Diesel
//!
//! Adapters only translate between domain types and storage representations.

pub mod in_memory;
pub mod persistence;
