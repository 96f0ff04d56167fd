pub mod entity;
pub mod ids;
pub mod models;

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::repository::{AttachmentRepo, Datasource, ProfileRepo};

pub mod repository;

pub mod view;

pub mod error;

pub mod config;

pub mod fixture;

pub mod logging;

pub mod test_utils;

/// Main runtime handle for Cabinet.
pub struct Cabinet {
    pub config: config::CabinetConfig,

    /// Shared connection pool; cheap to clone.
    pub db: DatabaseConnection,

    pub profiles: ProfileRepo,

    pub attachments: AttachmentRepo,
}

impl Cabinet {
    /// Connects, applies pending migrations and wires up the repositories.
    pub async fn start(config: config::CabinetConfig) -> Result<Self, error::CabinetError> {
        // DB + migrations
        let db = models::open_or_create_db(&config).await?;
        models::migrate_up(&db).await?;

        let datasource = Datasource::new(db.clone());
        let profiles = ProfileRepo::new(datasource.clone());
        let attachments = AttachmentRepo::new(datasource);

        info!("cabinet started");

        Ok(Self {
            config,
            db,
            profiles,
            attachments,
        })
    }

    pub async fn shutdown(self) -> Result<(), error::CabinetError> {
        self.db.close().await?;
        info!("cabinet stopped");
        Ok(())
    }
}

pub mod prelude {
    pub use super::ids;
    pub use super::entity;
    pub use super::models;

    pub use super::repository;
    pub use super::repository::Repository;

    pub use super::view;

    pub use super::error;

    pub use super::config;

    pub use super::Cabinet;
}
