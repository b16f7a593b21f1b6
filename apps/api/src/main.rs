mod core;
mod docs;
mod features;

use sqlx::PgPool;
use tracing::info;

use crate::core::config::Config;
use features::users::repo::UserRepository;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub users: UserRepository,
}

impl AppState {
    pub fn new(db: PgPool) -> Self {
        let users = UserRepository::new(db.clone());
        Self { db, users }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter.as_str())
        .init();

    let db = PgPool::connect(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(&db).await?;

    let state = AppState::new(db);
    let app = features::app(state);

    info!(bind = %config.bind, "api listening");
    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
