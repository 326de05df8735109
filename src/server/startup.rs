use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::AppError};

/// Opens the camp database and brings its schema up to date.
///
/// `DATABASE_URL` may name a file (created on first start with `mode=rwc`) or
/// `sqlite::memory:`. The activities, campers and signups tables are created by
/// `Migrator::up` before the server accepts any request.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Pool on a database at the latest migration
/// - `Err(AppError::DbErr)` - The URL could not be opened
/// - `Err(AppError::DbErr)` - A pending migration failed; the error names it
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database ready at {}", config.database_url);

    Ok(db)
}

/// Builds the full HTTP application: API routes, shared state and the
/// tracing and CORS layers.
pub fn app(db: DatabaseConnection) -> axum::Router {
    use tower_http::{cors::CorsLayer, trace::TraceLayer};

    crate::server::router::router()
        .with_state(crate::server::state::AppState::new(db))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
