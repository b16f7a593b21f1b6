use crate::core::error::{require, ApiError, ApiResult};
use crate::core::extract::{ApiJson, ApiPath};
use crate::AppState;
use axum::{Extension, Json};
use galaxy_types::{CreatePlanetReq, Planet, PlanetPathParams};
use tracing::info;

#[utoipa::path(
    post,
    path = "/planet",
    request_body = CreatePlanetReq,
    responses(
        (status = 200, description = "Planet created", body = Planet),
        (status = 400, description = "Missing name or name already taken", body = galaxy_types::MessageResponse),
        (status = 500, description = "Failed to create planet", body = galaxy_types::MessageResponse),
    ),
    tag = "Planets"
)]
pub async fn create(
    Extension(st): Extension<AppState>,
    ApiJson(req): ApiJson<CreatePlanetReq>,
) -> ApiResult<Json<Planet>> {
    const TAKEN: &str = "A planet with that name already exists. Try another name.";

    let name = require(req.name, "The planet must have a name.")?;

    if super::repo::find_by_name(&st.db, &name).await?.is_some() {
        return Err(ApiError::bad_request(TAKEN));
    }

    let planet = super::repo::insert(&st.db, &name)
        .await
        .map_err(|err| ApiError::from_insert(err, TAKEN))?;

    info!(planet_id = planet.id, name = %planet.name, "planet created");
    Ok(Json(planet))
}

#[utoipa::path(
    get,
    path = "/planets",
    responses(
        (status = 200, description = "Planets listed", body = [Planet]),
        (status = 500, description = "Failed to list planets", body = galaxy_types::MessageResponse),
    ),
    tag = "Planets"
)]
pub async fn list(Extension(st): Extension<AppState>) -> ApiResult<Json<Vec<Planet>>> {
    Ok(Json(super::repo::list(&st.db).await?))
}

#[utoipa::path(
    get,
    path = "/planets/{id}",
    params(PlanetPathParams),
    responses(
        (status = 200, description = "Planet fetched", body = Planet),
        (status = 404, description = "Planet not found", body = galaxy_types::MessageResponse),
        (status = 500, description = "Failed to fetch planet", body = galaxy_types::MessageResponse),
    ),
    tag = "Planets"
)]
pub async fn get(
    Extension(st): Extension<AppState>,
    ApiPath(PlanetPathParams { id }): ApiPath<PlanetPathParams>,
) -> ApiResult<Json<Planet>> {
    let planet = super::repo::get(&st.db, id).await.map_err(|err| match err {
        sqlx::Error::RowNotFound => ApiError::not_found("Planet not found."),
        other => ApiError::Database(other),
    })?;
    Ok(Json(planet))
}
