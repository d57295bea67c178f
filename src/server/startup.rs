use tracing_subscriber::{fmt, EnvFilter};

use crate::server::{config::Config, data::store::Store, error::AppError};

/// Installs the global tracing subscriber.
///
/// Output is filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Err(e) = fmt().with_env_filter(filter).try_init() {
        eprintln!("tracing init failed: {}", e);
    }
}

/// Connects to the document store, degrading to an unavailable store on failure.
///
/// The server keeps running without a database: requests touching the store answer
/// 503 and the diagnostic endpoint reports the store as not initialized.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Store` - Connected store with migrations applied, or an unavailable one
pub async fn connect_to_database(config: &Config) -> Store {
    let Some(url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set, starting without a database");
        return Store::unavailable();
    };

    match connect(url).await {
        Ok(db) => {
            tracing::info!("Connected to database");
            Store::connected(db)
        }
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            Store::unavailable()
        }
    }
}

/// Connects to the Sqlite database and runs pending migrations.
async fn connect(url: &str) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
