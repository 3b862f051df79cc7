use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AuditEvent, ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, UnprocessableJsonResponse,
    },
};
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::UserDto;
use crate::service::UserService;
use crate::store::UserStore;

pub const TAG: &str = "User Management";

#[derive(OpenApi)]
#[openapi(
    paths(list_users, get_user, create_user, update_user, delete_user),
    components(
        schemas(UserDto),
        responses(
            BadRequestValidationResponse,
            UnprocessableJsonResponse,
            InternalServerErrorResponse
        )
    ),
    tags((name = TAG, description = "APIs for managing users"))
)]
pub struct ApiDoc;

pub fn router<S: UserStore + 'static>(service: UserService<S>) -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(Arc::new(service))
}

/// Get all users
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = Vec<UserDto>)
    )
)]
async fn list_users<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
) -> Json<Vec<UserDto>> {
    Json(service.list_users().await)
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = String, Path, description = "ID of the user to retrieve")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "User not found")
    )
)]
async fn get_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    Path(id): Path<String>,
) -> UserResult<Json<UserDto>> {
    Ok(Json(service.get_user(&id).await?))
}

/// Create a new user
///
/// Any `id`, `createdAt` or `updatedAt` in the body is ignored.
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = UserDto,
    responses(
        (status = 201, description = "User created successfully", body = UserDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 422, response = UnprocessableJsonResponse)
    )
)]
async fn create_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<UserDto>,
) -> impl IntoResponse {
    let user = service.create_user(input).await;

    AuditEvent::new(
        "user.create",
        format!("user:{}", user.id.as_deref().unwrap_or_default()),
    )
    .with_client(&headers)
    .with_details(json!({ "username": user.username }))
    .emit();

    (StatusCode::CREATED, Json(user))
}

/// Update an existing user
///
/// Replaces every field except `id` and `createdAt`.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(("id" = String, Path, description = "ID of the user to update")),
    request_body = UserDto,
    responses(
        (status = 200, description = "User updated successfully", body = UserDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, description = "User not found"),
        (status = 422, response = UnprocessableJsonResponse)
    )
)]
async fn update_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UserDto>,
) -> UserResult<Json<UserDto>> {
    let user = service.update_user(&id, input).await?;

    AuditEvent::new("user.update", format!("user:{}", id))
        .with_client(&headers)
        .emit();

    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(("id" = String, Path, description = "ID of the user to delete")),
    responses(
        (status = 204, description = "User deleted successfully"),
        (status = 404, description = "User not found")
    )
)]
async fn delete_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> UserResult<StatusCode> {
    service.delete_user(&id).await?;

    AuditEvent::new("user.delete", format!("user:{}", id))
        .with_client(&headers)
        .emit();

    Ok(StatusCode::NO_CONTENT)
}
