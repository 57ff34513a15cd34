use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config, data::user::UserRepository, error::AppError,
    service::setup::SetupTokenService,
};

/// Days of inactivity after which a session expires.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session store and layer on top of the application database.
///
/// Creates the session table if needed and configures sessions to expire after
/// seven days of inactivity; the layer refreshes the expiry on every request it
/// serves. Returns the store separately so the maintenance scheduler can purge
/// expired records.
///
/// # Arguments
/// - `db` - Connected application database
///
/// # Returns
/// - `Ok((SqliteStore, SessionManagerLayer))` - Migrated store and the axum layer over it
/// - `Err(AppError)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<(SqliteStore, SessionManagerLayer<SqliteStore>), AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {e}")))?;

    let session_layer = SessionManagerLayer::new(session_store.clone())
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS)));

    Ok((session_store, session_layer))
}

/// Checks whether first-run setup is needed and prints the setup link.
///
/// When no admin user exists, generates a one-time setup token and logs the
/// setup URL. The token is held in memory with a short TTL and consumed by the
/// setup endpoint when the first admin account is created.
///
/// # Arguments
/// - `db` - Connected application database
/// - `config` - Application configuration containing the public URL
/// - `setup_tokens` - Service that stores the generated token
///
/// # Returns
/// - `Ok(())` - Setup state checked (and token generated if needed)
/// - `Err(AppError)` - Database error while checking for admin users
pub async fn check_for_setup(
    db: &DatabaseConnection,
    config: &Config,
    setup_tokens: &SetupTokenService,
) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    let token = setup_tokens.generate().await;

    tracing::info!("No admin account found; complete first-run setup at:");
    tracing::info!("    {}/setup?token={}", config.app_url, token);

    Ok(())
}
