use super::columns::{Metadata, StringList};
use crate::ids::ProfileId;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: ProfileId,
    pub created: DateTimeUtc,
    pub changed: DateTimeUtc,
    #[sea_orm(unique)]
    pub login: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub primary_email: String,
    pub emails: StringList,
    pub phone: Option<String>,
    pub tags: StringList,
    pub biography: String,
    pub company: String,
    pub location: String,
    // Identity provider subject
    pub external_id: Option<Uuid>,
    // Object storage key
    pub avatar: Option<Uuid>,
    pub metadata: Metadata,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::attachment::Entity")]
    Attachments,
}

impl Related<super::attachment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attachments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
