

use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Whether database-backed tests should run in this environment.
pub(crate) fn db_available() -> bool {
    std::env::var("SKIP_DB_TESTS").is_err() && std::env::var("DATABASE_URL").is_ok()
}

/// Connect and bring the schema up to date.
pub(crate) async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = crate::db::connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
