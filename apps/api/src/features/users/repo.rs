use galaxy_types::User;
use sqlx::PgPool;

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: i32,
    pub email: String,
    pub password: String,
    pub is_active: bool,
    pub name: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            email: row.email,
            name: row.name,
            is_active: row.is_active,
        }
    }
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// New accounts always start active.
    pub async fn insert(&self, name: &str, email: &str, password: &str) -> sqlx::Result<UserRow> {
        sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, password, is_active, name)
            VALUES ($1, $2, TRUE, $3)
            RETURNING *
            "#,
        )
        .bind(email)
        .bind(password)
        .bind(name)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn list(&self) -> sqlx::Result<Vec<UserRow>> {
        sqlx::query_as::<_, UserRow>(r#"SELECT * FROM users ORDER BY id"#)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn get(&self, id: i32) -> sqlx::Result<UserRow> {
        sqlx::query_as::<_, UserRow>(r#"SELECT * FROM users WHERE id=$1"#)
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> sqlx::Result<Option<UserRow>> {
        sqlx::query_as::<_, UserRow>(r#"SELECT * FROM users WHERE email=$1"#)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }
}
