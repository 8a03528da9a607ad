use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config, error::AppError, model::user::RegisterUserParams, service::auth::AuthService,
};
use crate::model::user::Role;

/// Sessions expire after this much inactivity.
const SESSION_INACTIVITY_HOURS: i64 = 8;

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

/// Builds the session layer backed by the application's Sqlite pool.
///
/// # Arguments
/// - `db` - Connected database whose pool stores the sessions
/// - `config` - Application configuration for cookie settings
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to wrap the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(config.secure_cookie)
        .with_expiry(Expiry::OnInactivity(Duration::hours(
            SESSION_INACTIVITY_HOURS,
        ))))
}

/// Creates the initial technician account when none exists.
///
/// Skipped with a warning when `ADMIN_PASSWORD` is not configured, since there
/// would be no way to log in as the seeded account.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Application configuration holding the admin credentials
pub async fn seed_technician(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let auth_service = AuthService::new(db);

    if auth_service.technician_exists().await? {
        return Ok(());
    }

    let Some(password) = config.admin_password.clone() else {
        tracing::warn!(
            "No technician account exists and ADMIN_PASSWORD is not set; skipping seed"
        );
        return Ok(());
    };

    let user = auth_service
        .create_account(RegisterUserParams {
            username: config.admin_username.clone(),
            password,
            nombre: "Administrator".to_string(),
            rol: Role::Technician,
            email: None,
        })
        .await?;

    tracing::info!("Seeded technician account '{}' (id {})", user.username, user.id);

    Ok(())
}
