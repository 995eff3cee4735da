//! HTTP inbound adapter exposing the users REST endpoints.

pub mod error;
pub mod health;
pub mod state;
pub mod users;
pub(crate) mod validation;

use actix_web::web;
use tracing::warn;

use crate::domain::Error;

pub use error::{ApiResult, ErrorResponse};

fn decode_failure(kind: &'static str, err: impl std::fmt::Display) -> actix_web::Error {
    warn!(kind, error = %err, "request could not be decoded");
    Error::internal(format!("{kind} rejected: {err}")).into()
}

/// Register the users endpoints and their extractor error handlers.
///
/// Body and path decoding failures are reported through the same JSON
/// envelope as every other error.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::configure_users;
///
/// let _app = App::new().configure(configure_users);
/// ```
pub fn configure_users(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default().error_handler(|err, _req| decode_failure("json body", err)),
    )
    .app_data(
        web::PathConfig::default().error_handler(|err, _req| decode_failure("path", err)),
    )
    .service(users::list_users)
    .service(users::get_user)
    .service(users::create_user)
    .service(users::update_user)
    .service(users::delete_user);
}
