use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No live connection; nothing was sent to the backend.
    #[error("datasource is not configured")]
    Unconfigured,

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },

    /// Backend failure passed through as-is, including unique and foreign key
    /// violations.
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to find a data directory on this platform")]
    NoDataDir,

    #[error("config io error")]
    Io(#[from] std::io::Error),

    #[error("invalid config file")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture file")]
    Io(#[from] std::io::Error),

    #[error("invalid fixture document")]
    Yaml(#[from] serde_yaml::Error),

    #[error("attachment owner `{0}` is not a known login")]
    UnknownOwner(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Error)]
pub enum CabinetError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("database error")]
    Database(#[from] DbErr),
}
