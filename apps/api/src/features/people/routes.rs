use crate::core::error::{require, ApiError, ApiResult};
use crate::core::extract::{ApiJson, ApiPath};
use crate::AppState;
use axum::{Extension, Json};
use galaxy_types::{CreatePersonReq, Person, PersonPathParams};
use tracing::info;

#[utoipa::path(
    post,
    path = "/people",
    request_body = CreatePersonReq,
    responses(
        (status = 200, description = "Person created", body = Person),
        (status = 400, description = "Missing fields or name already taken", body = galaxy_types::MessageResponse),
        (status = 500, description = "Failed to create person", body = galaxy_types::MessageResponse),
    ),
    tag = "People"
)]
pub async fn create(
    Extension(st): Extension<AppState>,
    ApiJson(req): ApiJson<CreatePersonReq>,
) -> ApiResult<Json<Person>> {
    const MISSING: &str = "All fields (name, gender, age) are required.";
    const TAKEN: &str = "A person with that name already exists.";

    let name = require(req.name, MISSING)?;
    let gender = require(req.gender, MISSING)?;
    let age = require(req.age, MISSING)?;

    if super::repo::find_by_name(&st.db, &name).await?.is_some() {
        return Err(ApiError::bad_request(TAKEN));
    }

    let person = super::repo::insert(&st.db, &name, &gender, age)
        .await
        .map_err(|err| ApiError::from_insert(err, TAKEN))?;

    info!(person_id = person.id, name = %person.name, "person created");
    Ok(Json(person))
}

#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "People listed", body = [Person]),
        (status = 500, description = "Failed to list people", body = galaxy_types::MessageResponse),
    ),
    tag = "People"
)]
pub async fn list(Extension(st): Extension<AppState>) -> ApiResult<Json<Vec<Person>>> {
    Ok(Json(super::repo::list(&st.db).await?))
}

#[utoipa::path(
    get,
    path = "/people/{id}",
    params(PersonPathParams),
    responses(
        (status = 200, description = "Person fetched", body = Person),
        (status = 404, description = "Person not found", body = galaxy_types::MessageResponse),
        (status = 500, description = "Failed to fetch person", body = galaxy_types::MessageResponse),
    ),
    tag = "People"
)]
pub async fn get(
    Extension(st): Extension<AppState>,
    ApiPath(PersonPathParams { id }): ApiPath<PersonPathParams>,
) -> ApiResult<Json<Person>> {
    let person = super::repo::get(&st.db, id).await.map_err(|err| match err {
        sqlx::Error::RowNotFound => ApiError::not_found("Person not found."),
        other => ApiError::Database(other),
    })?;
    Ok(Json(person))
}
