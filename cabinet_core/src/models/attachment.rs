use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    entity::attachment::{ActiveModel, Model},
    ids::{AttachmentId, ProfileId},
    models::{
        capability::{Identifiable, Nameable},
        timestamps::{Timestamped, WriteOp},
    },
};

/// A named file or media record owned by a profile. The content itself lives
/// in object storage under `storage_key`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
    pub id: AttachmentId,
    pub created: DateTime<Utc>,
    pub name: String,
    pub description: String,
    pub title: String,
    pub private: bool,
    pub tags: Vec<String>,
    pub metadata: BTreeMap<String, serde_json::Value>,
    pub storage_key: Uuid,
    pub profile_id: ProfileId,
}

impl Default for Attachment {
    fn default() -> Self {
        Self {
            id: AttachmentId::new(),
            created: DateTime::<Utc>::UNIX_EPOCH,
            name: String::new(),
            description: String::new(),
            title: String::new(),
            private: true,
            tags: Vec::new(),
            metadata: BTreeMap::new(),
            storage_key: Uuid::new_v4(),
            profile_id: ProfileId::nil(),
        }
    }
}

impl Attachment {
    pub fn new(profile_id: ProfileId, name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            profile_id,
            ..Self::default()
        }
    }

    pub(crate) fn into_active_model(self, op: WriteOp) -> ActiveModel {
        let created = match op {
            WriteOp::Insert => Set(self.created),
            WriteOp::Update => NotSet,
        };

        ActiveModel {
            id: Set(self.id),
            created,
            name: Set(self.name),
            description: Set(self.description),
            title: Set(self.title),
            private: Set(self.private),
            tags: Set(self.tags.into()),
            metadata: Set(self.metadata.into()),
            storage_key: Set(self.storage_key),
            profile_id: Set(self.profile_id),
        }
    }
}

impl From<Model> for Attachment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            created: model.created,
            name: model.name,
            description: model.description,
            title: model.title,
            private: model.private,
            tags: model.tags.into(),
            metadata: model.metadata.into(),
            storage_key: model.storage_key,
            profile_id: model.profile_id,
        }
    }
}

// Write-once: there is no changed column to maintain.
impl Timestamped for Attachment {
    fn before_write(&mut self, op: WriteOp, now: DateTime<Utc>) {
        if op == WriteOp::Insert {
            self.created = now;
        }
    }
}

impl Identifiable for Attachment {
    fn id(&self) -> Uuid {
        self.id.into_uuid()
    }
}

impl Nameable for Attachment {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_private() {
        let attachment = Attachment::new(ProfileId::new(), "scan.pdf", "Scan");
        assert!(attachment.private);
        assert!(!attachment.storage_key.is_nil());
    }

    #[test]
    fn only_insert_touches_created() {
        let mut attachment = Attachment::default();
        let now = Utc::now();

        attachment.before_write(WriteOp::Update, now);
        assert_eq!(attachment.created, DateTime::<Utc>::UNIX_EPOCH);

        attachment.before_write(WriteOp::Insert, now);
        assert_eq!(attachment.created, now);
    }
}
