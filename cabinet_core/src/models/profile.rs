use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    entity::profile::{ActiveModel, Model},
    ids::ProfileId,
    models::{
        attachment::Attachment,
        capability::{Identifiable, Nameable},
        timestamps::{Timestamped, WriteOp},
    },
};

/// A person's account record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub id: ProfileId,
    pub created: DateTime<Utc>,
    pub changed: DateTime<Utc>,
    pub login: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    /// Verified address, unique across profiles.
    pub primary_email: String,
    /// Additional addresses.
    pub emails: Vec<String>,
    pub phone: Option<String>,
    pub tags: Vec<String>,
    pub biography: String,
    pub company: String,
    pub location: String,
    pub external_id: Option<Uuid>,
    pub avatar: Option<Uuid>,
    pub metadata: BTreeMap<String, serde_json::Value>,
    /// Only populated by relation-loading queries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            id: ProfileId::new(),
            created: DateTime::<Utc>::UNIX_EPOCH,
            changed: DateTime::<Utc>::UNIX_EPOCH,
            login: String::new(),
            first_name: String::new(),
            middle_name: String::new(),
            last_name: String::new(),
            primary_email: String::new(),
            emails: Vec::new(),
            phone: None,
            tags: Vec::new(),
            biography: String::new(),
            company: String::new(),
            location: String::new(),
            external_id: None,
            avatar: None,
            metadata: BTreeMap::new(),
            attachments: Vec::new(),
        }
    }
}

impl Profile {
    pub fn new(login: impl Into<String>, primary_email: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            primary_email: primary_email.into(),
            ..Self::default()
        }
    }

    /// First, middle and last name joined by single spaces, skipping blanks.
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .into_iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub(crate) fn into_active_model(self, op: WriteOp) -> ActiveModel {
        // `created` is only ever written by the insert
        let created = match op {
            WriteOp::Insert => Set(self.created),
            WriteOp::Update => NotSet,
        };

        ActiveModel {
            id: Set(self.id),
            created,
            changed: Set(self.changed),
            login: Set(self.login),
            first_name: Set(self.first_name),
            middle_name: Set(self.middle_name),
            last_name: Set(self.last_name),
            primary_email: Set(self.primary_email),
            emails: Set(self.emails.into()),
            phone: Set(self.phone),
            tags: Set(self.tags.into()),
            biography: Set(self.biography),
            company: Set(self.company),
            location: Set(self.location),
            external_id: Set(self.external_id),
            avatar: Set(self.avatar),
            metadata: Set(self.metadata.into()),
        }
    }
}

impl From<Model> for Profile {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            created: model.created,
            changed: model.changed,
            login: model.login,
            first_name: model.first_name,
            middle_name: model.middle_name,
            last_name: model.last_name,
            primary_email: model.primary_email,
            emails: model.emails.into(),
            phone: model.phone,
            tags: model.tags.into(),
            biography: model.biography,
            company: model.company,
            location: model.location,
            external_id: model.external_id,
            avatar: model.avatar,
            metadata: model.metadata.into(),
            attachments: Vec::new(),
        }
    }
}

impl Timestamped for Profile {
    fn before_write(&mut self, op: WriteOp, now: DateTime<Utc>) {
        match op {
            WriteOp::Insert => {
                self.created = now;
                self.changed = now;
            }
            WriteOp::Update => self.changed = now,
        }
    }
}

impl Identifiable for Profile {
    fn id(&self) -> Uuid {
        self.id.into_uuid()
    }
}

impl Nameable for Profile {
    fn name(&self) -> String {
        self.full_name()
    }

    // Profiles carry a biography, not a description
    fn description(&self) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::models::timestamps::stamp;

    fn named(first: &str, middle: &str, last: &str) -> Profile {
        Profile {
            first_name: first.to_string(),
            middle_name: middle.to_string(),
            last_name: last.to_string(),
            ..Profile::default()
        }
    }

    #[test]
    fn full_name_skips_blank_parts() {
        assert_eq!(named("Fist", "Middle", "Last").full_name(), "Fist Middle Last");
        assert_eq!(named("Ada", "", "Lovelace").full_name(), "Ada Lovelace");
        assert_eq!(named(" ", "", "").full_name(), "");
    }

    #[test]
    fn insert_sets_created_and_changed_to_same_instant() {
        let mut profile = Profile::new("login", "login@example.com");
        stamp(&mut profile, WriteOp::Insert);

        assert_eq!(profile.created, profile.changed);
        assert!(profile.created > DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn update_only_moves_changed() {
        let mut profile = Profile::new("login", "login@example.com");
        let created = Utc::now();
        profile.before_write(WriteOp::Insert, created);
        profile.before_write(WriteOp::Update, created + Duration::seconds(5));

        assert_eq!(profile.created, created);
        assert_eq!(profile.changed, created + Duration::seconds(5));
    }

    #[test]
    fn update_active_model_leaves_created_unset() {
        let profile = Profile::new("login", "login@example.com");

        let insert = profile.clone().into_active_model(WriteOp::Insert);
        assert!(insert.created.is_set());

        let update = profile.into_active_model(WriteOp::Update);
        assert!(update.created.is_not_set());
        assert!(update.changed.is_set());
    }

    #[test]
    fn nameable_projects_full_name_without_description() {
        let profile = named("Fist", "Middle", "Last");
        assert_eq!(Nameable::name(&profile), "Fist Middle Last");
        assert!(profile.description().is_empty());
        assert_eq!(Identifiable::id(&profile), profile.id.into_uuid());
    }
}
