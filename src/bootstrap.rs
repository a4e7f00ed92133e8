use std::env;
use std::sync::Arc;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(#[from] DbErr),
}

/// Logs go to stderr so command output on stdout stays clean for shell
/// pipelines inspecting it.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// Try .env.{environment} first, then fall back to .env
pub fn load_env() {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

/// Open the store handle every command receives explicitly. Commands run
/// one query at a time, so the pool stays small.
pub async fn connect_from_env() -> Result<Arc<DatabaseConnection>, BootstrapError> {
    let db_url = env::var("DATABASE_URL").map_err(|_| BootstrapError::MissingDatabaseUrl)?;

    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(5)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await?;

    info!("Connected to database");

    Ok(Arc::new(conn))
}
