use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Generic `{"message": ...}` body used for confirmations and errors alike.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Public view of a user. The stored password never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateUserReq {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreatePlanetReq {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub gender: String,
    pub age: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreatePersonReq {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct FavoritePlanet {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct FavoritePeople {
    pub id: i32,
    pub user_id: i32,
    pub people_id: i32,
    /// Populated on creation so clients get the bookmarked person back in one call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserFavoritesResp {
    pub favorite_planets: Vec<Planet>,
    pub favorite_people: Vec<Person>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Endpoint {
    pub method: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct SitemapResp {
    pub endpoints: Vec<Endpoint>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct UserPathParams {
    pub id: i32,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PlanetPathParams {
    pub id: i32,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PersonPathParams {
    pub id: i32,
}

/// Identifies the acting user for favorite operations.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    #[serde(default)]
    pub email: Option<String>,
}
