use axum::{routing::get, Json, Router};
use utoipa::openapi::OpenApi as OpenApiDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::features::sitemap::index,
        crate::features::users::routes::create,
        crate::features::users::routes::list,
        crate::features::users::routes::get,
        crate::features::planets::routes::create,
        crate::features::planets::routes::list,
        crate::features::planets::routes::get,
        crate::features::people::routes::create,
        crate::features::people::routes::list,
        crate::features::people::routes::get,
        crate::features::favorites::routes::add_planet,
        crate::features::favorites::routes::remove_planet,
        crate::features::favorites::routes::add_person,
        crate::features::favorites::routes::remove_person,
        crate::features::favorites::routes::list_for_user,
    ),
    components(
        schemas(
            galaxy_types::MessageResponse,
            galaxy_types::User,
            galaxy_types::CreateUserReq,
            galaxy_types::Planet,
            galaxy_types::CreatePlanetReq,
            galaxy_types::Person,
            galaxy_types::CreatePersonReq,
            galaxy_types::FavoritePlanet,
            galaxy_types::FavoritePeople,
            galaxy_types::UserFavoritesResp,
            galaxy_types::Endpoint,
            galaxy_types::SitemapResp,
        )
    ),
    tags(
        (name = "Sitemap", description = "Route discovery."),
        (name = "Users", description = "User registration and lookup."),
        (name = "Planets", description = "Planet catalogue."),
        (name = "People", description = "People catalogue."),
        (name = "Favorites", description = "Per-user bookmarks of planets and people."),
    )
)]
pub struct ApiDoc;

pub fn router(openapi: OpenApiDoc) -> Router {
    let spec = openapi.clone();
    Router::new()
        .route(
            "/docs/openapi.json",
            get(move || {
                let spec = spec.clone();
                async move { Json(spec) }
            }),
        )
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", openapi))
}
