use galaxy_types::Planet;
use sqlx::PgPool;

#[derive(sqlx::FromRow)]
struct PlanetRow {
    id: i32,
    name: String,
}

impl From<PlanetRow> for Planet {
    fn from(row: PlanetRow) -> Self {
        Planet {
            id: row.id,
            name: row.name,
        }
    }
}

pub async fn insert(db: &PgPool, name: &str) -> sqlx::Result<Planet> {
    let row = sqlx::query_as::<_, PlanetRow>(
        r#"
        INSERT INTO planet (name)
        VALUES ($1)
        RETURNING *
        "#,
    )
    .bind(name)
    .fetch_one(db)
    .await?;

    Ok(row.into())
}

pub async fn list(db: &PgPool) -> sqlx::Result<Vec<Planet>> {
    let rows = sqlx::query_as::<_, PlanetRow>(r#"SELECT id, name FROM planet ORDER BY id"#)
        .fetch_all(db)
        .await?;

    Ok(rows.into_iter().map(Planet::from).collect())
}

pub async fn get(db: &PgPool, id: i32) -> sqlx::Result<Planet> {
    let row = sqlx::query_as::<_, PlanetRow>(r#"SELECT id, name FROM planet WHERE id = $1"#)
        .bind(id)
        .fetch_one(db)
        .await?;

    Ok(row.into())
}

pub async fn find_by_name(db: &PgPool, name: &str) -> sqlx::Result<Option<Planet>> {
    let row = sqlx::query_as::<_, PlanetRow>(r#"SELECT id, name FROM planet WHERE name = $1"#)
        .bind(name)
        .fetch_optional(db)
        .await?;

    Ok(row.map(Planet::from))
}

/// Planets bookmarked by `user_id`, in the order they were favorited.
pub async fn favorited_by(db: &PgPool, user_id: i32) -> sqlx::Result<Vec<Planet>> {
    let rows = sqlx::query_as::<_, PlanetRow>(
        r#"
        SELECT p.id, p.name
        FROM planet p
        JOIN favorite_planet f ON f.planet_id = p.id
        WHERE f.user_id = $1
        ORDER BY f.id
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;

    Ok(rows.into_iter().map(Planet::from).collect())
}
