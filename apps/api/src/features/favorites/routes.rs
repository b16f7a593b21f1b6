use crate::core::error::{require_email, ApiError, ApiResult};
use crate::core::extract::{ApiPath, ApiQuery};
use crate::features::{people, planets, users::repo::UserRow};
use crate::AppState;
use axum::{Extension, Json};
use galaxy_types::{
    EmailQuery, FavoritePeople, FavoritePlanet, MessageResponse, PersonPathParams,
    PlanetPathParams, UserFavoritesResp,
};
use tracing::info;

/// Resolves the acting user from the `email` query parameter. Mutating routes
/// report an unknown user as a bad request, the listing route as not found.
async fn acting_user(
    st: &AppState,
    email: Option<String>,
    unknown: fn(String) -> ApiError,
) -> ApiResult<UserRow> {
    let email = require_email(email)?;
    st.users
        .find_by_email(&email)
        .await?
        .ok_or_else(|| unknown("User not found.".into()))
}

#[utoipa::path(
    post,
    path = "/favorite/planet/{id}",
    params(PlanetPathParams, EmailQuery),
    responses(
        (status = 200, description = "Planet added to favorites", body = FavoritePlanet),
        (status = 400, description = "Missing email, unknown user or planet, or already a favorite", body = MessageResponse),
        (status = 500, description = "Failed to add favorite", body = MessageResponse),
    ),
    tag = "Favorites"
)]
pub async fn add_planet(
    Extension(st): Extension<AppState>,
    ApiPath(PlanetPathParams { id }): ApiPath<PlanetPathParams>,
    ApiQuery(EmailQuery { email }): ApiQuery<EmailQuery>,
) -> ApiResult<Json<FavoritePlanet>> {
    const ALREADY: &str = "This planet is already one of your favorites.";

    let user = acting_user(&st, email, ApiError::BadRequest).await?;
    let planet = planets::repo::get(&st.db, id).await.map_err(|err| match err {
        sqlx::Error::RowNotFound => ApiError::bad_request("Planet not found."),
        other => ApiError::Database(other),
    })?;

    if super::repo::find_planet(&st.db, user.id, planet.id)
        .await?
        .is_some()
    {
        return Err(ApiError::bad_request(ALREADY));
    }

    let favorite = super::repo::insert_planet(&st.db, user.id, planet.id)
        .await
        .map_err(|err| ApiError::from_insert(err, ALREADY))?;

    info!(user_id = user.id, planet_id = planet.id, "planet favorited");
    Ok(Json(favorite))
}

#[utoipa::path(
    post,
    path = "/favorite/people/{id}",
    params(PersonPathParams, EmailQuery),
    responses(
        (status = 200, description = "Person added to favorites", body = FavoritePeople),
        (status = 400, description = "Missing email, unknown user or person, or already a favorite", body = MessageResponse),
        (status = 500, description = "Failed to add favorite", body = MessageResponse),
    ),
    tag = "Favorites"
)]
pub async fn add_person(
    Extension(st): Extension<AppState>,
    ApiPath(PersonPathParams { id }): ApiPath<PersonPathParams>,
    ApiQuery(EmailQuery { email }): ApiQuery<EmailQuery>,
) -> ApiResult<Json<FavoritePeople>> {
    const ALREADY: &str = "This person is already one of your favorites.";

    let user = acting_user(&st, email, ApiError::BadRequest).await?;
    let person = people::repo::get(&st.db, id).await.map_err(|err| match err {
        sqlx::Error::RowNotFound => ApiError::bad_request("Person not found."),
        other => ApiError::Database(other),
    })?;

    if super::repo::find_person(&st.db, user.id, person.id)
        .await?
        .is_some()
    {
        return Err(ApiError::bad_request(ALREADY));
    }

    let mut favorite = super::repo::insert_person(&st.db, user.id, person.id)
        .await
        .map_err(|err| ApiError::from_insert(err, ALREADY))?;

    info!(user_id = user.id, people_id = person.id, "person favorited");
    favorite.person = Some(person);
    Ok(Json(favorite))
}

#[utoipa::path(
    delete,
    path = "/favorite/planet/{id}",
    params(PlanetPathParams, EmailQuery),
    responses(
        (status = 200, description = "Planet removed from favorites", body = MessageResponse),
        (status = 400, description = "Missing email, unknown user, or not a favorite", body = MessageResponse),
        (status = 500, description = "Failed to remove favorite", body = MessageResponse),
    ),
    tag = "Favorites"
)]
pub async fn remove_planet(
    Extension(st): Extension<AppState>,
    ApiPath(PlanetPathParams { id }): ApiPath<PlanetPathParams>,
    ApiQuery(EmailQuery { email }): ApiQuery<EmailQuery>,
) -> ApiResult<Json<MessageResponse>> {
    let user = acting_user(&st, email, ApiError::BadRequest).await?;

    if !super::repo::delete_planet(&st.db, user.id, id).await? {
        return Err(ApiError::bad_request(
            "This planet is not one of your favorites.",
        ));
    }

    info!(user_id = user.id, planet_id = id, "planet unfavorited");
    Ok(Json(MessageResponse::new("Planet removed from your favorites.")))
}

#[utoipa::path(
    delete,
    path = "/favorite/people/{id}",
    params(PersonPathParams, EmailQuery),
    responses(
        (status = 200, description = "Person removed from favorites", body = MessageResponse),
        (status = 400, description = "Missing email, unknown user, or not a favorite", body = MessageResponse),
        (status = 500, description = "Failed to remove favorite", body = MessageResponse),
    ),
    tag = "Favorites"
)]
pub async fn remove_person(
    Extension(st): Extension<AppState>,
    ApiPath(PersonPathParams { id }): ApiPath<PersonPathParams>,
    ApiQuery(EmailQuery { email }): ApiQuery<EmailQuery>,
) -> ApiResult<Json<MessageResponse>> {
    let user = acting_user(&st, email, ApiError::BadRequest).await?;

    if !super::repo::delete_person(&st.db, user.id, id).await? {
        return Err(ApiError::bad_request(
            "This person is not one of your favorites.",
        ));
    }

    info!(user_id = user.id, people_id = id, "person unfavorited");
    Ok(Json(MessageResponse::new("Person removed from your favorites.")))
}

#[utoipa::path(
    get,
    path = "/users/favorites",
    params(EmailQuery),
    responses(
        (status = 200, description = "Favorites of the user", body = UserFavoritesResp),
        (status = 400, description = "Missing email", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Failed to list favorites", body = MessageResponse),
    ),
    tag = "Favorites"
)]
pub async fn list_for_user(
    Extension(st): Extension<AppState>,
    ApiQuery(EmailQuery { email }): ApiQuery<EmailQuery>,
) -> ApiResult<Json<UserFavoritesResp>> {
    let user = acting_user(&st, email, ApiError::NotFound).await?;

    let favorite_planets = planets::repo::favorited_by(&st.db, user.id).await?;
    let favorite_people = people::repo::favorited_by(&st.db, user.id).await?;

    Ok(Json(UserFavoritesResp {
        favorite_planets,
        favorite_people,
    }))
}
