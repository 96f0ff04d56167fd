//! Persistence access for profiles and attachments.
//!
//! Every write goes through [`stamp`](crate::models::stamp) right before the
//! statement is issued, so callers never set timestamps themselves. Backend
//! errors are returned unmodified inside [`RepositoryError::Db`]; nothing is
//! retried. Bound slow calls with `tokio::time::timeout`, dropping the future
//! cancels the query.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::error::RepositoryError;

pub mod attachments;
pub mod profiles;

pub use attachments::AttachmentRepo;
pub use profiles::ProfileRepo;

/// Lookup shared by every repository.
#[async_trait]
pub trait Repository<T>: Send + Sync {
    type Id: Send + 'static;

    async fn find_by_id(&self, id: Self::Id) -> Result<T, RepositoryError>;
}

/// Handle to the backend a repository talks to. May be empty, in which case
/// every operation fails with [`RepositoryError::Unconfigured`].
#[derive(Clone, Debug, Default)]
pub struct Datasource {
    db: Option<DatabaseConnection>,
}

impl Datasource {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    pub fn unconfigured() -> Self {
        Self { db: None }
    }

    pub fn is_configured(&self) -> bool {
        self.connection().is_ok()
    }

    pub(crate) fn connection(&self) -> Result<&DatabaseConnection, RepositoryError> {
        match &self.db {
            None | Some(DatabaseConnection::Disconnected) => Err(RepositoryError::Unconfigured),
            Some(db) => Ok(db),
        }
    }
}

impl From<DatabaseConnection> for Datasource {
    fn from(db: DatabaseConnection) -> Self {
        Self::new(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disconnected_handle_counts_as_unconfigured() {
        assert!(!Datasource::unconfigured().is_configured());
        assert!(!Datasource::default().is_configured());
        assert!(!Datasource::new(DatabaseConnection::Disconnected).is_configured());
    }
}
