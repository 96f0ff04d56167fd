use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::{
    error::RepositoryError,
    models::capability::{Identifiable, Nameable},
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdInfo {
    pub id: Uuid,
}

impl IdInfo {
    /// Copies the identifier of `source`. A missing source leaves the nil id
    /// in place and is only logged.
    pub fn fill_from(&mut self, source: Option<&dyn Identifiable>) {
        match source {
            Some(source) => self.id = source.id(),
            None => warn!("no identifiable source to project"),
        }
    }

    pub fn of(source: &dyn Identifiable) -> Self {
        Self { id: source.id() }
    }
}

impl Identifiable for IdInfo {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Identifier, name and description of a nameable entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortNamedInfo {
    #[serde(flatten)]
    pub id_info: IdInfo,
    pub name: String,
    pub description: String,
}

impl ShortNamedInfo {
    /// A missing source leaves every field empty.
    pub fn fill_from(&mut self, source: Option<&dyn Nameable>) {
        let Some(source) = source else {
            return;
        };

        self.name = source.name();
        self.description = source.description();
        self.id_info.id = source.id();
    }

    pub fn of(source: &dyn Nameable) -> Self {
        let mut info = Self::default();
        info.fill_from(Some(source));
        info
    }

    pub fn id(&self) -> Uuid {
        self.id_info.id
    }
}

/// Uniform `{"result": ...}` envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultDto<T> {
    pub result: T,
}

impl<T> ResultDto<T> {
    pub fn new(result: T) -> Self {
        Self { result }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDto {
    /// error code
    pub code: u16,
    /// error message
    pub message: String,
    /// error details, in order
    pub details: Vec<String>,
}

impl ErrorDto {
    /// Overwrites all three fields.
    pub fn fill<I, S>(&mut self, code: u16, message: impl Into<String>, details: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.code = code;
        self.message = message.into();
        self.details = details.into_iter().map(Into::into).collect();
    }
}

pub fn build_error<I, S>(code: u16, message: impl Into<String>, details: I) -> ErrorDto
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut error = ErrorDto::default();
    error.fill(code, message, details);
    error
}

impl From<&RepositoryError> for ErrorDto {
    fn from(error: &RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound { .. } => build_error(404, "Not Found", [error.to_string()]),
            RepositoryError::Unconfigured | RepositoryError::Db(_) => {
                build_error(500, "Internal Server Error", [error.to_string()])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        ids::ProfileId,
        models::{Attachment, Profile},
    };

    fn named_profile() -> Profile {
        Profile {
            first_name: "Fist".to_string(),
            middle_name: "Middle".to_string(),
            last_name: "Last".to_string(),
            ..Profile::default()
        }
    }

    #[test]
    fn id_info_from_entities() {
        let profile = Profile::default();
        let attachment = Attachment::default();

        let mut info = IdInfo::default();
        info.fill_from(None);
        assert!(info.id.is_nil());

        info.fill_from(Some(&profile));
        assert_eq!(info.id, profile.id.into_uuid());

        let info = IdInfo::of(&attachment);
        assert_eq!(info.id, attachment.id.into_uuid());
    }

    #[test]
    fn short_named_info_from_profile_uses_full_name() {
        let profile = named_profile();

        let mut info = ShortNamedInfo::default();
        info.fill_from(None);
        assert!(info.id().is_nil());
        assert!(info.name.is_empty());
        assert!(info.description.is_empty());

        info.fill_from(Some(&profile));
        assert_eq!(info.id(), profile.id.into_uuid());
        assert_eq!(info.name, profile.full_name());
        assert!(info.description.is_empty());
    }

    #[test]
    fn short_named_info_from_attachment() {
        let attachment = Attachment {
            name: "New Attachment".to_string(),
            description: "New Attachment Description".to_string(),
            ..Attachment::new(ProfileId::new(), "", "")
        };

        let info = ShortNamedInfo::of(&attachment);
        assert_eq!(info.id(), attachment.id.into_uuid());
        assert_eq!(info.name, attachment.name);
        assert_eq!(info.description, attachment.description);
    }

    #[test]
    fn result_envelope_flattens_the_id() {
        let profile = named_profile();
        let result = ResultDto::new(ShortNamedInfo::of(&profile));

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "result": {
                    "id": profile.id.to_string(),
                    "name": "Fist Middle Last",
                    "description": ""
                }
            })
        );
    }

    #[test]
    fn error_dto_fields() {
        let mut error = ErrorDto::default();
        error.fill(401, "Not Authorized", Vec::<String>::new());
        assert_eq!(error.code, 401);
        assert_eq!(error.message, "Not Authorized");
        assert!(error.details.is_empty());

        error.fill(404, "Not Found", ["File is not found"]);
        assert_eq!(error.details, vec!["File is not found"]);

        let error = build_error(404, "Not Found", ["File is not found"]);
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({ "code": 404, "message": "Not Found", "details": ["File is not found"] })
        );
    }

    #[test]
    fn repository_errors_map_to_status_codes() {
        let not_found = RepositoryError::NotFound {
            entity: "profile",
            id: Uuid::nil(),
        };
        assert_eq!(ErrorDto::from(&not_found).code, 404);
        assert_eq!(ErrorDto::from(&RepositoryError::Unconfigured).code, 500);
        assert_eq!(
            ErrorDto::from(&RepositoryError::Unconfigured).details,
            vec!["datasource is not configured"]
        );
    }
}
