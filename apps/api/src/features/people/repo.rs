use galaxy_types::Person;
use sqlx::PgPool;

#[derive(sqlx::FromRow)]
struct PersonRow {
    id: i32,
    name: String,
    gender: String,
    age: i32,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Person {
            id: row.id,
            name: row.name,
            gender: row.gender,
            age: row.age,
        }
    }
}

pub async fn insert(db: &PgPool, name: &str, gender: &str, age: i32) -> sqlx::Result<Person> {
    let row = sqlx::query_as::<_, PersonRow>(
        r#"
        INSERT INTO people (name, gender, age)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(gender)
    .bind(age)
    .fetch_one(db)
    .await?;

    Ok(row.into())
}

pub async fn list(db: &PgPool) -> sqlx::Result<Vec<Person>> {
    let rows = sqlx::query_as::<_, PersonRow>(
        r#"
        SELECT id, name, gender, age
        FROM people
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows.into_iter().map(Person::from).collect())
}

pub async fn get(db: &PgPool, id: i32) -> sqlx::Result<Person> {
    let row = sqlx::query_as::<_, PersonRow>(
        r#"
        SELECT id, name, gender, age
        FROM people
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_one(db)
    .await?;

    Ok(row.into())
}

pub async fn find_by_name(db: &PgPool, name: &str) -> sqlx::Result<Option<Person>> {
    let row = sqlx::query_as::<_, PersonRow>(
        r#"SELECT id, name, gender, age FROM people WHERE name = $1"#,
    )
    .bind(name)
    .fetch_optional(db)
    .await?;

    Ok(row.map(Person::from))
}

pub async fn favorited_by(db: &PgPool, user_id: i32) -> sqlx::Result<Vec<Person>> {
    let rows = sqlx::query_as::<_, PersonRow>(
        r#"
        SELECT p.id, p.name, p.gender, p.age
        FROM people p
        JOIN favorite_people f ON f.people_id = p.id
        WHERE f.user_id = $1
        ORDER BY f.id
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;

    Ok(rows.into_iter().map(Person::from).collect())
}
