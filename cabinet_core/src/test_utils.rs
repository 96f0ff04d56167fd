use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use crate::models::migrator::Migrator;

/// Create a new in-memory SQLite database with all migrations applied.
/// Each call creates a fresh, isolated database instance, so tests never
/// share state.
///
/// # Example
/// ```ignore
/// use cabinet_core::test_utils;
///
/// #[tokio::test]
/// async fn my_test() {
///     let db = test_utils::setup_test_db().await;
///     // Database is ready to use!
/// }
/// ```
pub async fn setup_test_db() -> DatabaseConnection {
    // SeaORM caps SQLite pools at one connection, so `sqlite::memory:` stays a
    // single database for the lifetime of the handle.
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}
