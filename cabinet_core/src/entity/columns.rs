//! JSON-backed column values shared by the profile and attachment tables.

use std::collections::BTreeMap;

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Ordered list of strings (tags, secondary emails) stored as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct StringList(pub Vec<String>);

impl From<Vec<String>> for StringList {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl From<StringList> for Vec<String> {
    fn from(list: StringList) -> Self {
        list.0
    }
}

/// Free-form key/value metadata stored as a JSON object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct Metadata(pub BTreeMap<String, serde_json::Value>);

impl From<BTreeMap<String, serde_json::Value>> for Metadata {
    fn from(values: BTreeMap<String, serde_json::Value>) -> Self {
        Self(values)
    }
}

impl From<Metadata> for BTreeMap<String, serde_json::Value> {
    fn from(metadata: Metadata) -> Self {
        metadata.0
    }
}
