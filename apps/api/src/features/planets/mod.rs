use axum::{
    routing::{get, post},
    Router,
};

pub mod repo;
pub mod routes;

pub fn router() -> Router {
    Router::new()
        .route("/planet", post(routes::create))
        .route("/planets", get(routes::list))
        .route("/planets/:id", get(routes::get))
}
