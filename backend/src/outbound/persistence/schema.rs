//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. `diesel print-schema`
//! regenerates them from a live database.

diesel::table! {
    /// Stored users. `id` is a `BIGSERIAL` primary key.
    users (id) {
        /// Primary key assigned by the sequence.
        id -> Int8,
        /// Given name.
        first_name -> Nullable<Varchar>,
        /// Family name.
        last_name -> Nullable<Varchar>,
        /// Contact email address.
        email -> Nullable<Varchar>,
    }
}
