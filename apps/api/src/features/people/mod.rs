use axum::{routing::get, Router};

pub mod repo;
pub mod routes;

pub fn router() -> Router {
    Router::new()
        .route("/people", get(routes::list).post(routes::create))
        .route("/people/:id", get(routes::get))
}
