//! YAML seed data for integration environments and tests.
//!
//! A fixture document is a sequence of record sets:
//!
//! ```yaml
//! - model: Profile
//!   rows:
//!     - login: jdoe
//!       primary_email: john.doe@example.com
//! - model: Attachment
//!   rows:
//!     - owner: jdoe
//!       name: cv.pdf
//!       title: CV
//! ```
//!
//! Rows accept every field of [`Profile`] / [`Attachment`]; omitted fields
//! take their defaults. Attachments name their owner by login. Timestamps are
//! always stamped at load time.

use std::{collections::HashMap, path::Path};

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    TransactionTrait,
};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::{
    entity::prelude::{AttachmentEntity, ProfileColumn, ProfileEntity},
    error::{FixtureError, RepositoryError},
    ids::ProfileId,
    models::{stamp, Attachment, Profile, WriteOp},
};

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "model", content = "rows")]
pub enum FixtureSet {
    Profile(Vec<Profile>),
    Attachment(Vec<AttachmentRow>),
}

#[derive(Clone, Debug, Deserialize)]
pub struct AttachmentRow {
    /// Login of the owning profile. Falls back to `attachment.profile_id`.
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(flatten)]
    pub attachment: Attachment,
}

#[derive(Clone, Debug, Default)]
pub struct Fixture {
    pub sets: Vec<FixtureSet>,
}

/// Rows as stored, in document order.
#[derive(Clone, Debug, Default)]
pub struct LoadedFixture {
    pub profiles: Vec<Profile>,
    pub attachments: Vec<Attachment>,
}

impl Fixture {
    pub fn from_yaml(source: &str) -> Result<Self, FixtureError> {
        let sets: Vec<FixtureSet> = serde_yaml::from_str(source)?;
        Ok(Self { sets })
    }

    pub async fn from_file(path: &Path) -> Result<Self, FixtureError> {
        let source = tokio::fs::read_to_string(path).await?;
        Self::from_yaml(&source)
    }

    /// Empties both tables, then inserts every row. Runs as one transaction:
    /// on any failure the tables keep their previous contents.
    pub async fn load(&self, db: &DatabaseConnection) -> Result<LoadedFixture, FixtureError> {
        self.seed(db, true).await
    }

    /// Inserts every row without touching existing data. All or nothing.
    pub async fn insert(&self, db: &DatabaseConnection) -> Result<LoadedFixture, FixtureError> {
        self.seed(db, false).await
    }

    async fn seed(
        &self,
        db: &DatabaseConnection,
        truncate_first: bool,
    ) -> Result<LoadedFixture, FixtureError> {
        let txn = db.begin().await.map_err(RepositoryError::from)?;

        match self.insert_rows(&txn, truncate_first).await {
            Ok(loaded) => {
                txn.commit().await.map_err(RepositoryError::from)?;
                info!(
                    profiles = loaded.profiles.len(),
                    attachments = loaded.attachments.len(),
                    "fixture loaded"
                );
                Ok(loaded)
            }
            Err(error) => {
                txn.rollback().await.map_err(RepositoryError::from)?;
                warn!(%error, "fixture rolled back");
                Err(error)
            }
        }
    }

    async fn insert_rows<C: ConnectionTrait>(
        &self,
        conn: &C,
        truncate_first: bool,
    ) -> Result<LoadedFixture, FixtureError> {
        if truncate_first {
            truncate(conn).await?;
        }

        let mut owners: HashMap<String, ProfileId> = HashMap::new();
        let mut loaded = LoadedFixture::default();

        for set in &self.sets {
            match set {
                FixtureSet::Profile(rows) => {
                    for row in rows {
                        let mut profile = row.clone();
                        stamp(&mut profile, WriteOp::Insert);
                        let stored: Profile = profile
                            .into_active_model(WriteOp::Insert)
                            .insert(conn)
                            .await
                            .map_err(RepositoryError::from)?
                            .into();

                        owners.insert(stored.login.clone(), stored.id);
                        loaded.profiles.push(stored);
                    }
                }
                FixtureSet::Attachment(rows) => {
                    for row in rows {
                        let mut attachment = row.attachment.clone();
                        if let Some(login) = &row.owner {
                            attachment.profile_id = resolve_owner(conn, &mut owners, login).await?;
                        }

                        stamp(&mut attachment, WriteOp::Insert);
                        let stored: Attachment = attachment
                            .into_active_model(WriteOp::Insert)
                            .insert(conn)
                            .await
                            .map_err(RepositoryError::from)?
                            .into();

                        debug!(id = %stored.id, profile_id = %stored.profile_id, "seeded attachment");
                        loaded.attachments.push(stored);
                    }
                }
            }
        }

        Ok(loaded)
    }
}

async fn resolve_owner<C: ConnectionTrait>(
    conn: &C,
    owners: &mut HashMap<String, ProfileId>,
    login: &str,
) -> Result<ProfileId, FixtureError> {
    if let Some(id) = owners.get(login) {
        return Ok(*id);
    }

    let id = ProfileEntity::find()
        .filter(ProfileColumn::Login.eq(login))
        .one(conn)
        .await
        .map_err(RepositoryError::from)?
        .map(|profile| profile.id)
        .ok_or_else(|| FixtureError::UnknownOwner(login.to_string()))?;

    owners.insert(login.to_string(), id);
    Ok(id)
}

/// Deletes all attachments and profiles.
pub async fn truncate<C: ConnectionTrait>(db: &C) -> Result<(), RepositoryError> {
    AttachmentEntity::delete_many().exec(db).await?;
    ProfileEntity::delete_many().exec(db).await?;
    Ok(())
}
