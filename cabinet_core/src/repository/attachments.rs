use async_trait::async_trait;
use sea_orm::DbErr;
use tracing::debug;

use crate::{
    entity::prelude::*,
    error::RepositoryError,
    ids::{AttachmentId, ProfileId},
    models::{stamp, Attachment, Profile, WriteOp},
    repository::{Datasource, Repository},
};

const ENTITY: &str = "attachment";

fn not_found(id: AttachmentId) -> RepositoryError {
    RepositoryError::NotFound {
        entity: ENTITY,
        id: id.into_uuid(),
    }
}

#[derive(Clone, Debug, Default)]
pub struct AttachmentRepo {
    datasource: Datasource,
}

impl AttachmentRepo {
    pub fn new(datasource: impl Into<Datasource>) -> Self {
        Self {
            datasource: datasource.into(),
        }
    }

    /// All attachments owned by a profile, oldest first
    pub async fn list_for_profile(
        &self,
        profile_id: ProfileId,
    ) -> Result<Vec<Attachment>, RepositoryError> {
        let db = self.datasource.connection()?;

        let attachments = AttachmentEntity::find()
            .filter(AttachmentColumn::ProfileId.eq(profile_id))
            .order_by_asc(AttachmentColumn::Created)
            .order_by_asc(AttachmentColumn::Id)
            .all(db)
            .await?;

        Ok(attachments.into_iter().map(Attachment::from).collect())
    }

    /// Load an attachment along with its owner
    pub async fn find_with_profile(
        &self,
        id: AttachmentId,
    ) -> Result<(Attachment, Profile), RepositoryError> {
        let db = self.datasource.connection()?;

        let (attachment, profile) = AttachmentEntity::find_by_id(id)
            .find_also_related(ProfileEntity)
            .one(db)
            .await?
            .ok_or_else(|| not_found(id))?;

        // The foreign key guarantees an owner for every stored row
        let profile = profile.ok_or_else(|| RepositoryError::NotFound {
            entity: "profile",
            id: attachment.profile_id.into_uuid(),
        })?;

        Ok((attachment.into(), profile.into()))
    }

    pub async fn count(&self) -> Result<u64, RepositoryError> {
        let db = self.datasource.connection()?;
        Ok(AttachmentEntity::find().count(db).await?)
    }

    /// Insert a new attachment, stamping `created`.
    ///
    /// An unknown `profile_id` comes back as the backend's foreign key error.
    pub async fn insert(&self, mut attachment: Attachment) -> Result<Attachment, RepositoryError> {
        let db = self.datasource.connection()?;

        stamp(&mut attachment, WriteOp::Insert);
        let model = attachment
            .into_active_model(WriteOp::Insert)
            .insert(db)
            .await?;

        debug!(id = %model.id, profile_id = %model.profile_id, "inserted attachment");
        Ok(model.into())
    }

    /// Explicit metadata update. Attachments carry no changed timestamp and
    /// `created` is left untouched.
    pub async fn update(&self, mut attachment: Attachment) -> Result<Attachment, RepositoryError> {
        let db = self.datasource.connection()?;
        let id = attachment.id;

        stamp(&mut attachment, WriteOp::Update);
        let model = match attachment.into_active_model(WriteOp::Update).update(db).await {
            Ok(model) => model,
            Err(DbErr::RecordNotUpdated) => return Err(not_found(id)),
            Err(error) => return Err(error.into()),
        };

        debug!(id = %model.id, "updated attachment");
        Ok(model.into())
    }

    pub async fn delete(&self, id: AttachmentId) -> Result<(), RepositoryError> {
        let db = self.datasource.connection()?;

        let result = AttachmentEntity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(not_found(id));
        }

        debug!(%id, "deleted attachment");
        Ok(())
    }
}

#[async_trait]
impl Repository<Attachment> for AttachmentRepo {
    type Id = AttachmentId;

    async fn find_by_id(&self, id: AttachmentId) -> Result<Attachment, RepositoryError> {
        let db = self.datasource.connection()?;

        AttachmentEntity::find_by_id(id)
            .one(db)
            .await?
            .map(Attachment::from)
            .ok_or_else(|| not_found(id))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{repository::ProfileRepo, test_utils};

    fn attachment(profile_id: ProfileId) -> Attachment {
        Attachment {
            description: "New description".to_string(),
            private: false,
            ..Attachment::new(profile_id, "New filename", "New title")
        }
    }

    async fn setup() -> (ProfileRepo, AttachmentRepo, Profile) {
        let db = test_utils::setup_test_db().await;
        let profiles = ProfileRepo::new(db.clone());
        let attachments = AttachmentRepo::new(db);

        let owner = profiles
            .insert(Profile::new("owner", "owner@example.com"))
            .await
            .unwrap();

        (profiles, attachments, owner)
    }

    #[tokio::test]
    async fn unconfigured_repo_rejects_writes() {
        let repo = AttachmentRepo::default();
        let err = repo.insert(attachment(ProfileId::new())).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Unconfigured));
    }

    #[tokio::test]
    async fn insert_requires_existing_owner() {
        let (_, attachments, owner) = setup().await;

        let orphan = attachment(ProfileId::new());
        let err = attachments.insert(orphan).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Db(_)));
        assert_eq!(attachments.count().await.unwrap(), 0);

        let stored = attachments.insert(attachment(owner.id)).await.unwrap();
        assert_eq!(stored.profile_id, owner.id);
        assert!(!stored.private);
        assert_eq!(attachments.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn find_with_profile_resolves_owner() {
        let (_, attachments, owner) = setup().await;
        let stored = attachments.insert(attachment(owner.id)).await.unwrap();

        let (found, profile) = attachments.find_with_profile(stored.id).await.unwrap();
        assert_eq!(found, stored);
        assert_eq!(profile.id, owner.id);

        let err = attachments
            .find_with_profile(AttachmentId::new())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn update_keeps_created() {
        let (_, attachments, owner) = setup().await;
        let stored = attachments.insert(attachment(owner.id)).await.unwrap();

        let mut edited = stored.clone();
        edited.tags = vec!["tag1".to_string(), "tag2".to_string()];
        edited.metadata.insert("aaa".to_string(), "bbb".into());
        edited.created = chrono::Utc::now();

        let updated = attachments.update(edited).await.unwrap();
        assert_eq!(updated.created, stored.created);
        assert_eq!(updated.tags, vec!["tag1", "tag2"]);
        assert_eq!(updated.metadata["aaa"], "bbb");

        attachments.delete(updated.id).await.unwrap();
        assert!(attachments
            .find_by_id(updated.id)
            .await
            .unwrap_err()
            .is_not_found());
    }

    #[tokio::test]
    async fn profile_relation_loads_attachments() {
        let (profiles, attachments, owner) = setup().await;
        let first = attachments.insert(attachment(owner.id)).await.unwrap();
        let second = attachments.insert(attachment(owner.id)).await.unwrap();

        let loaded = profiles.find_with_attachments(owner.id).await.unwrap();
        assert_eq!(loaded.attachments.len(), 2);

        let listed = attachments.list_for_profile(owner.id).await.unwrap();
        let ids: Vec<_> = listed.iter().map(|a| a.id).collect();
        assert!(ids.contains(&first.id));
        assert!(ids.contains(&second.id));

        // Deleting the owner cascades
        profiles.delete(owner.id).await.unwrap();
        assert_eq!(attachments.count().await.unwrap(), 0);
    }
}
