use crate::core::error::route_not_found;
use crate::docs;
use crate::AppState;
use axum::{Extension, Router};
use tower_http::{cors::CorsLayer, normalize_path::NormalizePath};
use utoipa::OpenApi;

pub mod favorites;
pub mod people;
pub mod planets;
pub mod sitemap;
pub mod users;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(sitemap::router())
        .merge(users::router())
        .merge(planets::router())
        .merge(people::router())
        .merge(favorites::router())
        .fallback(route_not_found)
        .layer(Extension(state))
        .layer(CorsLayer::permissive())
}

/// Full service: docs are routed as is, everything else has trailing slashes
/// trimmed before reaching the API router.
pub fn app(state: AppState) -> Router {
    let api = NormalizePath::trim_trailing_slash(router(state));
    docs::router(docs::ApiDoc::openapi()).fallback_service(api)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header("content-type", "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        send(app, builder.body(body).unwrap()).await
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn favorites_flow_over_http(pool: sqlx::PgPool) {
        let app = router(AppState::new(pool));

        let user = json!({"name": "Leia", "email": "leia@alderaan.org", "password": "hope"});
        let (status, created) = call(&app, Method::POST, "/users", Some(user.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert!(created.get("password").is_none());

        let (status, body) = call(&app, Method::POST, "/users", Some(user)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());

        let (status, planet) =
            call(&app, Method::POST, "/planet", Some(json!({"name": "Alderaan"}))).await;
        assert_eq!(status, StatusCode::OK);
        let planet_id = planet["id"].as_i64().unwrap();

        let uri = format!("/favorite/planet/{planet_id}?email=leia@alderaan.org");
        let (status, fav) = call(&app, Method::POST, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fav["planet_id"], json!(planet_id));

        let (status, _) = call(&app, Method::POST, &uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, favorites) =
            call(&app, Method::GET, "/users/favorites?email=leia@alderaan.org", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            favorites,
            json!({
                "favorite_planets": [{"id": planet_id, "name": "Alderaan"}],
                "favorite_people": [],
            })
        );

        let (status, _) = call(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = call(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn unknown_ids_are_not_found(pool: sqlx::PgPool) {
        let app = router(AppState::new(pool));

        for uri in ["/user/1", "/planets/1", "/people/1"] {
            let (status, body) = call(&app, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert!(body["message"].is_string(), "{uri}");
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn missing_fields_are_bad_requests(pool: sqlx::PgPool) {
        let app = router(AppState::new(pool));

        let (status, _) = call(&app, Method::POST, "/planet", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = call(
            &app,
            Method::POST,
            "/people",
            Some(json!({"name": "Rey", "gender": "female"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = call(&app, Method::GET, "/users/favorites", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn unparseable_bodies_are_json_bad_requests(pool: sqlx::PgPool) {
        let app = app(AppState::new(pool));

        let (status, body) = call(
            &app,
            Method::POST,
            "/people",
            Some(json!({"name": "Rey", "gender": "female", "age": "19"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());

        let (status, body) = call(&app, Method::POST, "/planet", Some(json!({"name": 5}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());

        let request = Request::builder()
            .method(Method::POST)
            .uri("/planet")
            .header("content-type", "application/json")
            .body(Body::from("not json"))
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());

        let request = Request::builder()
            .method(Method::POST)
            .uri("/planet")
            .body(Body::from(r#"{"name": "Naboo"}"#))
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());

        let (status, body) = call(&app, Method::GET, "/planets/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());

        let (status, body) = call(&app, Method::GET, "/users/favorites?email", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn trailing_slashes_are_ignored(pool: sqlx::PgPool) {
        let app = app(AppState::new(pool));

        let (status, body) = call(&app, Method::GET, "/users/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let (status, planet) =
            call(&app, Method::POST, "/planet/", Some(json!({"name": "Endor"}))).await;
        assert_eq!(status, StatusCode::OK);

        let uri = format!("/planets/{}/", planet["id"]);
        let (status, fetched) = call(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, planet);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn unknown_routes_are_json_not_found(pool: sqlx::PgPool) {
        let app = app(AppState::new(pool));

        let (status, body) = call(&app, Method::GET, "/starships", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], json!("Resource not found."));

        let (status, _) = call(&app, Method::GET, "/docs/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
    }
}
