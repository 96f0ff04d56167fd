use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .col(pk_uuid(Profile::Id))
                    .col(timestamp_with_time_zone(Profile::Created))
                    .col(timestamp_with_time_zone(Profile::Changed))
                    .col(string_len(Profile::Login, 50))
                    .col(string_len(Profile::FirstName, 100).default(""))
                    .col(string_len(Profile::MiddleName, 100).default(""))
                    .col(string_len(Profile::LastName, 100).default(""))
                    .col(string(Profile::PrimaryEmail))
                    .col(json(Profile::Emails))
                    .col(string_null(Profile::Phone))
                    .col(json(Profile::Tags))
                    .col(text(Profile::Biography).default(""))
                    .col(string_len(Profile::Company, 100).default(""))
                    .col(string(Profile::Location).default(""))
                    .col(uuid_null(Profile::ExternalId))
                    .col(uuid_null(Profile::Avatar))
                    .col(json(Profile::Metadata))
                    .to_owned(),
            )
            .await?;

        // Login and primary email identify a profile
        manager
            .create_index(
                Index::create()
                    .name("idx_profiles_login")
                    .table(Profile::Table)
                    .col(Profile::Login)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_profiles_primary_email")
                    .table(Profile::Table)
                    .col(Profile::PrimaryEmail)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Profile {
    #[sea_orm(iden = "profiles")]
    Table,
    Id,
    Created,
    Changed,
    Login,
    FirstName,
    MiddleName,
    LastName,
    PrimaryEmail,
    Emails,
    Phone,
    Tags,
    Biography,
    Company,
    Location,
    ExternalId,
    Avatar,
    Metadata,
}
