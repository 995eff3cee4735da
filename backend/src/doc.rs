//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects the users and health endpoints together with the wire
//! schemas. It backs Swagger UI in debug builds and the `openapi-dump`
//! binary.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::users::UserRecord;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        description = "CRUD access to the user directory, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserRecord, ErrorResponse)),
    tags(
        (name = "users", description = "User directory operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
