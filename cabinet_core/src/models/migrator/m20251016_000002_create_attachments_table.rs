use sea_orm_migration::{prelude::*, schema::*};

use super::m20251016_000001_create_profiles_table::Profile;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attachment::Table)
                    .col(pk_uuid(Attachment::Id))
                    .col(timestamp_with_time_zone(Attachment::Created))
                    .col(string(Attachment::Name))
                    .col(text(Attachment::Description).default(""))
                    .col(string(Attachment::Title))
                    .col(boolean(Attachment::Private).default(true))
                    .col(json(Attachment::Tags))
                    .col(json(Attachment::Metadata))
                    .col(uuid(Attachment::StorageKey))
                    .col(uuid(Attachment::ProfileId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-attachment-profile_id")
                            .from(Attachment::Table, Attachment::ProfileId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index on profile_id
        manager
            .create_index(
                Index::create()
                    .name("idx_attachments_profile_id")
                    .table(Attachment::Table)
                    .col(Attachment::ProfileId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_attachments_storage_key")
                    .table(Attachment::Table)
                    .col(Attachment::StorageKey)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attachment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Attachment {
    #[sea_orm(iden = "attachments")]
    Table,
    Id,
    Created,
    Name,
    Description,
    Title,
    Private,
    Tags,
    Metadata,
    StorageKey,
    ProfileId,
}
