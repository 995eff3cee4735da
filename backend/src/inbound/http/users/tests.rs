//! Tests for users API handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::UserService;
use crate::domain::ports::{MockUsersCommand, MockUsersQuery};
use crate::inbound::http::configure_users;
use crate::outbound::in_memory::InMemoryUserRepository;

fn in_memory_state() -> HttpState {
    let service = Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new())));
    HttpState::from_service(service)
}

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .configure(configure_users)
}

fn ann() -> Value {
    json!({"firstName": "Ann", "lastName": "Lee", "email": "ann@x.com"})
}

#[actix_web::test]
async fn full_lifecycle_against_in_memory_store() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let created = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/users")
            .set_json(ann())
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let body: UserRecord = actix_test::read_body_json(created).await;
    assert_eq!(body.id, Some(1));

    let fetched = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/users/1").to_request(),
    )
    .await;
    assert_eq!(fetched.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(fetched).await;
    assert_eq!(
        body,
        json!({"id": 1, "firstName": "Ann", "lastName": "Lee", "email": "ann@x.com"})
    );

    let updated = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/users/1")
            .set_json(json!({"firstName": "Ann2", "lastName": "Lee", "email": "ann@x.com"}))
            .to_request(),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let body: UserRecord = actix_test::read_body_json(updated).await;
    assert_eq!(body.first_name.as_deref(), Some("Ann2"));

    let deleted = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri("/users/1").to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    assert!(actix_test::read_body(deleted).await.is_empty());

    let missing = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/users/1").to_request(),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let body: ErrorResponse = actix_test::read_body_json(missing).await;
    assert_eq!(body.message, "User not found with id:1");
    assert_eq!(body.field, "NA");
}

#[rstest]
#[case(json!({"firstName": "", "lastName": "Lee", "email": "a@x.com"}), "firstName", "First name is mandatory")]
#[case(json!({"firstName": "Ann", "lastName": "  ", "email": "a@x.com"}), "lastName", "Last name is mandatory")]
#[case(json!({"firstName": "Ann", "lastName": "Lee"}), "email", "email is mandatory")]
#[case(json!({"firstName": null, "lastName": "", "email": "a@x.com"}), "lastName", "Last name is mandatory")]
#[case(json!({}), "email", "email is mandatory")]
#[actix_web::test]
async fn create_rejects_blank_fields(
    #[case] payload: Value,
    #[case] field: &str,
    #[case] message: &str,
) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/users")
            .set_json(payload)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = actix_test::read_body_json(response).await;
    assert_eq!(body.status_code, 400);
    assert_eq!(body.field, field);
    assert_eq!(body.message, message);
}

#[actix_web::test]
async fn create_ignores_client_supplied_identifier() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/users")
            .set_json(json!({"id": 77, "firstName": "Ann", "lastName": "Lee", "email": "a@x.com"}))
            .to_request(),
    )
    .await;

    let body: UserRecord = actix_test::read_body_json(response).await;
    assert_eq!(body.id, Some(1));
}

#[rstest]
#[case(json!({"id": 9, "firstName": "Ann"}))]
#[case(json!({"id": 9, "firstName": "Ann", "lastName": null, "email": null}))]
#[actix_web::test]
async fn update_uses_path_identifier_and_stores_omitted_fields_as_null(#[case] payload: Value) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/users")
            .set_json(ann())
            .to_request(),
    )
    .await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/users/1")
            .set_json(payload)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let expected = json!({"id": 1, "firstName": "Ann", "lastName": null, "email": null});
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, expected);

    let fetched = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/users/1").to_request(),
    )
    .await;
    let body: Value = actix_test::read_body_json(fetched).await;
    assert_eq!(body, expected);
}

#[rstest]
#[case(actix_test::TestRequest::put().set_json(json!({"firstName": "A"})))]
#[case(actix_test::TestRequest::delete())]
#[actix_web::test]
async fn mutations_on_missing_users_are_not_found(#[case] request: actix_test::TestRequest) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let response =
        actix_test::call_service(&app, request.uri("/users/42").to_request()).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: ErrorResponse = actix_test::read_body_json(response).await;
    assert_eq!(body.message, "User not found with id:42");
    assert_eq!(body.field, "NA");
}

#[actix_web::test]
async fn list_reflects_creates_updates_and_deletes_in_identifier_order() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    for first in ["Ann", "Bo", "Cy"] {
        actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/users")
                .set_json(json!({"firstName": first, "lastName": "Lee", "email": "x@x.com"}))
                .to_request(),
        )
        .await;
    }
    let updated = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/users/2")
            .set_json(json!({"firstName": "Bea", "lastName": "Lee", "email": "x@x.com"}))
            .to_request(),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let deleted = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri("/users/1").to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let response =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri("/users").to_request())
            .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Vec<UserRecord> = actix_test::read_body_json(response).await;
    let listed: Vec<_> = body
        .iter()
        .map(|u| (u.id, u.first_name.as_deref()))
        .collect();
    assert_eq!(listed, vec![(Some(2), Some("Bea")), (Some(3), Some("Cy"))]);
}

#[rstest]
#[case(actix_test::TestRequest::get().uri("/users/abc"))]
#[case(actix_test::TestRequest::post()
    .uri("/users")
    .insert_header(("content-type", "application/json"))
    .set_payload("{not json"))]
#[actix_web::test]
async fn undecodable_requests_are_internal_errors(#[case] request: actix_test::TestRequest) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let response = actix_test::call_service(&app, request.to_request()).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorResponse = actix_test::read_body_json(response).await;
    assert_eq!(body.message, "An error occurred");
    assert_eq!(body.field, "NA");
}

#[actix_web::test]
async fn service_failures_are_redacted() {
    let mut query = MockUsersQuery::new();
    query
        .expect_list_users()
        .times(1)
        .return_once(|| Err(Error::internal("db password rejected")));
    let state = HttpState::new(Arc::new(query), Arc::new(MockUsersCommand::new()));
    let app = actix_test::init_service(test_app(state)).await;

    let response =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri("/users").to_request())
            .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorResponse = actix_test::read_body_json(response).await;
    assert_eq!(body.message, "An error occurred");
}
