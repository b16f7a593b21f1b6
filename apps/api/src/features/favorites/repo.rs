use galaxy_types::{FavoritePeople, FavoritePlanet};
use sqlx::PgPool;

#[derive(sqlx::FromRow)]
struct FavoritePlanetRow {
    id: i32,
    user_id: i32,
    planet_id: i32,
}

impl From<FavoritePlanetRow> for FavoritePlanet {
    fn from(row: FavoritePlanetRow) -> Self {
        FavoritePlanet {
            id: row.id,
            user_id: row.user_id,
            planet_id: row.planet_id,
        }
    }
}

#[derive(sqlx::FromRow)]
struct FavoritePeopleRow {
    id: i32,
    user_id: i32,
    people_id: i32,
}

impl From<FavoritePeopleRow> for FavoritePeople {
    fn from(row: FavoritePeopleRow) -> Self {
        FavoritePeople {
            id: row.id,
            user_id: row.user_id,
            people_id: row.people_id,
            person: None,
        }
    }
}

pub async fn find_planet(
    db: &PgPool,
    user_id: i32,
    planet_id: i32,
) -> sqlx::Result<Option<FavoritePlanet>> {
    let row = sqlx::query_as::<_, FavoritePlanetRow>(
        r#"SELECT * FROM favorite_planet WHERE user_id = $1 AND planet_id = $2"#,
    )
    .bind(user_id)
    .bind(planet_id)
    .fetch_optional(db)
    .await?;

    Ok(row.map(FavoritePlanet::from))
}

pub async fn insert_planet(db: &PgPool, user_id: i32, planet_id: i32) -> sqlx::Result<FavoritePlanet> {
    let row = sqlx::query_as::<_, FavoritePlanetRow>(
        r#"
        INSERT INTO favorite_planet (user_id, planet_id)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(planet_id)
    .fetch_one(db)
    .await?;

    Ok(row.into())
}

/// Returns `false` when the pair was not bookmarked.
pub async fn delete_planet(db: &PgPool, user_id: i32, planet_id: i32) -> sqlx::Result<bool> {
    let result = sqlx::query(r#"DELETE FROM favorite_planet WHERE user_id = $1 AND planet_id = $2"#)
        .bind(user_id)
        .bind(planet_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn find_person(
    db: &PgPool,
    user_id: i32,
    people_id: i32,
) -> sqlx::Result<Option<FavoritePeople>> {
    let row = sqlx::query_as::<_, FavoritePeopleRow>(
        r#"SELECT * FROM favorite_people WHERE user_id = $1 AND people_id = $2"#,
    )
    .bind(user_id)
    .bind(people_id)
    .fetch_optional(db)
    .await?;

    Ok(row.map(FavoritePeople::from))
}

pub async fn insert_person(db: &PgPool, user_id: i32, people_id: i32) -> sqlx::Result<FavoritePeople> {
    let row = sqlx::query_as::<_, FavoritePeopleRow>(
        r#"
        INSERT INTO favorite_people (user_id, people_id)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(people_id)
    .fetch_one(db)
    .await?;

    Ok(row.into())
}

pub async fn delete_person(db: &PgPool, user_id: i32, people_id: i32) -> sqlx::Result<bool> {
    let result = sqlx::query(r#"DELETE FROM favorite_people WHERE user_id = $1 AND people_id = $2"#)
        .bind(user_id)
        .bind(people_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}
