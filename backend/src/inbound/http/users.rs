//! Users API handlers.
//!
//! ```text
//! GET    /users
//! GET    /users/{id}
//! POST   /users       {"firstName":"Ann","lastName":"Lee","email":"ann@x.com"}
//! PUT    /users/{id}  {"firstName":"Ann","lastName":"Kim","email":"ak@x.com"}
//! DELETE /users/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, User, UserDraft, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, NotBlank, require_not_blank};

const FIRST_NAME: NotBlank =
    NotBlank::new(FieldName::new("firstName"), "First name is mandatory");
const LAST_NAME: NotBlank = NotBlank::new(FieldName::new("lastName"), "Last name is mandatory");
const EMAIL: NotBlank = NotBlank::new(FieldName::new("email"), "email is mandatory");

/// Wire representation of a user.
///
/// Every field is optional on input and `id` is ignored there. Responses
/// always carry all four keys; a text field the user never had is `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub id: Option<i64>,
    /// Given name.
    #[schema(example = "Ann")]
    pub first_name: Option<String>,
    /// Family name.
    #[schema(example = "Lee")]
    pub last_name: Option<String>,
    /// Contact email address.
    #[schema(example = "ann@x.com")]
    pub email: Option<String>,
}

impl UserRecord {
    fn validate_for_create(&self) -> Result<(), Error> {
        require_not_blank([
            (FIRST_NAME, self.first_name.as_deref()),
            (LAST_NAME, self.last_name.as_deref()),
            (EMAIL, self.email.as_deref()),
        ])
    }

    /// Drop the identifier, keeping absent text fields absent.
    fn into_draft(self) -> UserDraft {
        UserDraft::from_parts(self.first_name, self.last_name, self.email)
    }
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        let (id, draft) = user.into_parts();
        Self {
            id: Some(id.as_i64()),
            first_name: draft.first_name().map(str::to_owned),
            last_name: draft.last_name().map(str::to_owned),
            email: draft.email().map(str::to_owned),
        }
    }
}

/// List every stored user.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [UserRecord]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserRecord>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users.into_iter().map(UserRecord::from).collect()))
}

/// Fetch one user by identifier.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserRecord),
        (status = 404, description = "No such user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<UserRecord>> {
    let id = UserId::new(path.into_inner());
    let user = state
        .users_query
        .find_user(id)
        .await?
        .ok_or_else(|| Error::user_not_found(id))?;
    Ok(web::Json(user.into()))
}

/// Create a user. The store assigns the identifier.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserRecord,
    responses(
        (status = 201, description = "Created", body = UserRecord),
        (status = 400, description = "A mandatory field is blank", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRecord>,
) -> ApiResult<HttpResponse> {
    let record = payload.into_inner();
    record.validate_for_create()?;
    let user = state.users_command.create_user(record.into_draft()).await?;
    Ok(HttpResponse::Created().json(UserRecord::from(user)))
}

/// Replace every field of an existing user.
///
/// The body is not validated; absent or `null` fields are stored unset and
/// come back as `null`. Any `id` in the body is ignored in favour of the path.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UserRecord,
    responses(
        (status = 200, description = "Updated", body = UserRecord),
        (status = 404, description = "No such user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UserRecord>,
) -> ApiResult<web::Json<UserRecord>> {
    let id = UserId::new(path.into_inner());
    let user = state
        .users_command
        .update_user(id, payload.into_inner().into_draft())
        .await?;
    Ok(web::Json(user.into()))
}

/// Remove a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .users_command
        .delete_user(UserId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests;
