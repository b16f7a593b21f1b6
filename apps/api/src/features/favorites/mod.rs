use axum::{
    routing::{get, post},
    Router,
};

pub mod repo;
pub mod routes;

pub fn router() -> Router {
    Router::new()
        .route(
            "/favorite/planet/:id",
            post(routes::add_planet).delete(routes::remove_planet),
        )
        .route(
            "/favorite/people/:id",
            post(routes::add_person).delete(routes::remove_person),
        )
        .route("/users/favorites", get(routes::list_for_user))
}
