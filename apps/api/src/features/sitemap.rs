use axum::{routing::get, Json, Router};
use galaxy_types::{Endpoint, SitemapResp};

const ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/users"),
    ("POST", "/users"),
    ("GET", "/user/{id}"),
    ("GET", "/users/favorites"),
    ("GET", "/planets"),
    ("POST", "/planet"),
    ("GET", "/planets/{id}"),
    ("GET", "/people"),
    ("POST", "/people"),
    ("GET", "/people/{id}"),
    ("POST", "/favorite/planet/{id}"),
    ("DELETE", "/favorite/planet/{id}"),
    ("POST", "/favorite/people/{id}"),
    ("DELETE", "/favorite/people/{id}"),
];

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

/// Lists every route the API serves.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Available endpoints", body = SitemapResp)),
    tag = "Sitemap"
)]
pub async fn index() -> Json<SitemapResp> {
    let endpoints = ENDPOINTS
        .iter()
        .map(|(method, path)| Endpoint {
            method: (*method).to_string(),
            path: (*path).to_string(),
        })
        .collect();
    Json(SitemapResp { endpoints })
}
