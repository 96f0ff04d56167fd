use async_trait::async_trait;
use sea_orm::DbErr;
use tracing::debug;

use crate::{
    entity::prelude::*,
    error::RepositoryError,
    ids::ProfileId,
    models::{stamp, Attachment, Profile, WriteOp},
    repository::{Datasource, Repository},
};

const ENTITY: &str = "profile";

fn not_found(id: ProfileId) -> RepositoryError {
    RepositoryError::NotFound {
        entity: ENTITY,
        id: id.into_uuid(),
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProfileRepo {
    datasource: Datasource,
}

impl ProfileRepo {
    pub fn new(datasource: impl Into<Datasource>) -> Self {
        Self {
            datasource: datasource.into(),
        }
    }

    /// Get a profile by login
    pub async fn find_by_login(&self, login: &str) -> Result<Option<Profile>, RepositoryError> {
        let db = self.datasource.connection()?;

        let profile = ProfileEntity::find()
            .filter(ProfileColumn::Login.eq(login))
            .one(db)
            .await?;

        Ok(profile.map(Profile::from))
    }

    /// Load a profile together with all of its attachments
    pub async fn find_with_attachments(&self, id: ProfileId) -> Result<Profile, RepositoryError> {
        let db = self.datasource.connection()?;

        let (model, attachments) = ProfileEntity::find_by_id(id)
            .find_with_related(AttachmentEntity)
            .all(db)
            .await?
            .pop()
            .ok_or_else(|| not_found(id))?;

        let mut profile = Profile::from(model);
        profile.attachments = attachments.into_iter().map(Attachment::from).collect();
        Ok(profile)
    }

    /// All profiles, oldest first
    pub async fn list(&self) -> Result<Vec<Profile>, RepositoryError> {
        let db = self.datasource.connection()?;

        let profiles = ProfileEntity::find()
            .order_by_asc(ProfileColumn::Created)
            .order_by_asc(ProfileColumn::Id)
            .all(db)
            .await?;

        Ok(profiles.into_iter().map(Profile::from).collect())
    }

    pub async fn count(&self) -> Result<u64, RepositoryError> {
        let db = self.datasource.connection()?;
        Ok(ProfileEntity::find().count(db).await?)
    }

    /// Insert a new profile, stamping `created` and `changed`.
    ///
    /// Duplicate logins or primary emails come back as the backend's own
    /// constraint error.
    pub async fn insert(&self, mut profile: Profile) -> Result<Profile, RepositoryError> {
        let db = self.datasource.connection()?;

        stamp(&mut profile, WriteOp::Insert);
        let model = profile.into_active_model(WriteOp::Insert).insert(db).await?;

        debug!(id = %model.id, login = %model.login, "inserted profile");
        Ok(model.into())
    }

    /// Overwrite every mutable column of an existing profile and advance
    /// `changed`. `created` is never written.
    pub async fn update(&self, mut profile: Profile) -> Result<Profile, RepositoryError> {
        let db = self.datasource.connection()?;
        let id = profile.id;

        stamp(&mut profile, WriteOp::Update);
        let model = match profile.into_active_model(WriteOp::Update).update(db).await {
            Ok(model) => model,
            Err(DbErr::RecordNotUpdated) => return Err(not_found(id)),
            Err(error) => return Err(error.into()),
        };

        debug!(id = %model.id, "updated profile");
        Ok(model.into())
    }

    /// Delete a profile; its attachments go with it
    pub async fn delete(&self, id: ProfileId) -> Result<(), RepositoryError> {
        let db = self.datasource.connection()?;

        let result = ProfileEntity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(not_found(id));
        }

        debug!(%id, "deleted profile");
        Ok(())
    }
}

#[async_trait]
impl Repository<Profile> for ProfileRepo {
    type Id = ProfileId;

    async fn find_by_id(&self, id: ProfileId) -> Result<Profile, RepositoryError> {
        let db = self.datasource.connection()?;

        ProfileEntity::find_by_id(id)
            .one(db)
            .await?
            .map(Profile::from)
            .ok_or_else(|| not_found(id))
    }
}
