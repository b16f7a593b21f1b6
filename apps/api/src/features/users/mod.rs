use axum::{routing::get, Router};

pub mod repo;
pub mod routes;

pub fn router() -> Router {
    Router::new()
        .route("/users", get(routes::list).post(routes::create))
        .route("/user/:id", get(routes::get))
}
