use sea_orm_migration::prelude::*;

mod m20251016_000001_create_profiles_table;
mod m20251016_000002_create_attachments_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251016_000001_create_profiles_table::Migration),
            Box::new(m20251016_000002_create_attachments_table::Migration),
        ]
    }
}

#[cfg(test)]
use sea_orm::{Database, DbErr};

#[tokio::test]
async fn test_migrations_okay() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    let schema_manager = SchemaManager::new(&db);

    Migrator::refresh(&db).await?;

    assert!(schema_manager.has_table("profiles").await?);
    assert!(schema_manager.has_table("attachments").await?);
    assert!(schema_manager.has_column("profiles", "primary_email").await?);
    assert!(schema_manager.has_column("attachments", "storage_key").await?);

    Ok(())
}

#[tokio::test]
async fn test_migrations_roll_back() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    let schema_manager = SchemaManager::new(&db);

    Migrator::up(&db, None).await?;
    Migrator::down(&db, None).await?;

    assert!(!schema_manager.has_table("attachments").await?);
    assert!(!schema_manager.has_table("profiles").await?);

    Ok(())
}
