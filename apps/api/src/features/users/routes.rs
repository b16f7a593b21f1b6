use crate::core::error::{require, ApiError, ApiResult};
use crate::core::extract::{ApiJson, ApiPath};
use crate::AppState;
use axum::{Extension, Json};
use galaxy_types::{CreateUserReq, User, UserPathParams};
use tracing::info;

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserReq,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Missing fields or email already registered", body = galaxy_types::MessageResponse),
        (status = 500, description = "Failed to create user", body = galaxy_types::MessageResponse),
    ),
    tag = "Users"
)]
pub async fn create(
    Extension(st): Extension<AppState>,
    ApiJson(req): ApiJson<CreateUserReq>,
) -> ApiResult<Json<User>> {
    const MISSING: &str = "All fields (name, email, password) are required.";
    const TAKEN: &str = "That email is already registered. Try another one.";

    let name = require(req.name, MISSING)?;
    let email = require(req.email, MISSING)?;
    let password = require(req.password, MISSING)?;

    if st.users.find_by_email(&email).await?.is_some() {
        return Err(ApiError::bad_request(TAKEN));
    }

    let row = st
        .users
        .insert(&name, &email, &password)
        .await
        .map_err(|err| ApiError::from_insert(err, TAKEN))?;

    info!(user_id = row.id, "user created");
    Ok(Json(row.into()))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users listed", body = [User]),
        (status = 500, description = "Failed to list users", body = galaxy_types::MessageResponse),
    ),
    tag = "Users"
)]
pub async fn list(Extension(st): Extension<AppState>) -> ApiResult<Json<Vec<User>>> {
    let rows = st.users.list().await?;
    Ok(Json(rows.into_iter().map(User::from).collect()))
}

#[utoipa::path(
    get,
    path = "/user/{id}",
    params(UserPathParams),
    responses(
        (status = 200, description = "User fetched", body = User),
        (status = 404, description = "User not found", body = galaxy_types::MessageResponse),
        (status = 500, description = "Failed to fetch user", body = galaxy_types::MessageResponse),
    ),
    tag = "Users"
)]
pub async fn get(
    Extension(st): Extension<AppState>,
    ApiPath(UserPathParams { id }): ApiPath<UserPathParams>,
) -> ApiResult<Json<User>> {
    let row = st.users.get(id).await.map_err(|err| match err {
        sqlx::Error::RowNotFound => ApiError::not_found("User not found."),
        other => ApiError::Database(other),
    })?;
    Ok(Json(row.into()))
}
