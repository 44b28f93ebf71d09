//! Serialized form snapshot stored alongside the normalized template fields.
//!
//! The snapshot lets the editor rebuild its whole state (labels included) when
//! a template is reopened, without re-deriving it from the normalized record
//! fields. Reading is lenient: older or hand-edited records may miss keys,
//! store `null`, use numeric row ids, carry unknown file type tags or store
//! the snapshot as a string.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::model::choice::Choice;
use crate::model::requirement::{
    clamp_upload_count, FileType, Necessity, Requirement, RequirementId,
};

/// Reads `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateSnapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub template_name: String,
    pub module: Option<Choice>,
    pub password_field: Option<Choice>,
    pub folder_field: Option<Choice>,
    #[serde(deserialize_with = "null_as_default")]
    pub document_requirements: Vec<SnapshotRequirement>,
}

impl TemplateSnapshot {
    /// Parses a snapshot stored either as a JSON object or as a JSON string
    /// holding the object.
    pub fn parse(raw: &Value) -> Result<Self, serde_json::Error> {
        match raw {
            Value::String(text) => serde_json::from_str(text),
            other => Self::deserialize(other),
        }
    }

    /// Rows for the editor. An empty list becomes one default row.
    pub fn requirements(&self) -> Vec<Requirement> {
        let rows: Vec<Requirement> = self
            .document_requirements
            .iter()
            .map(SnapshotRequirement::to_requirement)
            .collect();
        if rows.is_empty() {
            vec![Requirement::new()]
        } else {
            rows
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnapshotRequirement {
    /// Row id as stored. Older records use numbers; it is never read back.
    pub id: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// `None` when stored as `null`, read as checked.
    pub checked: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub requirement: String,
    #[serde(deserialize_with = "null_as_default")]
    pub file_types: Vec<String>,
    /// A number, a numeric string or `null`.
    pub upload_count: Value,
}

impl Default for SnapshotRequirement {
    fn default() -> Self {
        Self {
            id: Value::String(String::new()),
            name: String::new(),
            checked: Some(true),
            requirement: Necessity::Required.as_str().to_string(),
            file_types: Vec::new(),
            upload_count: Value::from(1),
        }
    }
}

impl SnapshotRequirement {
    /// Stored upload count; anything unreadable counts as one.
    pub fn upload_count(&self) -> i64 {
        match &self.upload_count {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .unwrap_or(1),
            Value::String(text) => text.trim().parse().unwrap_or(1),
            _ => 1,
        }
    }

    /// Converts to an editor row with a fresh identity.
    pub fn to_requirement(&self) -> Requirement {
        let file_types = self
            .file_types
            .iter()
            .filter_map(|tag| match tag.parse::<FileType>() {
                Ok(file_type) => Some(file_type),
                Err(e) => {
                    log::warn!("dropping file type from snapshot: {}", e);
                    None
                }
            })
            .collect();

        Requirement {
            id: RequirementId::generate(),
            name: self.name.clone(),
            checked: self.checked.unwrap_or(true),
            necessity: Necessity::parse_lenient(&self.requirement),
            file_types,
            upload_count: clamp_upload_count(self.upload_count()),
        }
    }
}

impl From<&Requirement> for SnapshotRequirement {
    fn from(row: &Requirement) -> Self {
        Self {
            id: Value::String(row.id.to_string()),
            name: row.name.clone(),
            checked: Some(row.checked),
            requirement: row.necessity.as_str().to_string(),
            file_types: row.file_types.iter().map(|t| t.tag().to_string()).collect(),
            upload_count: Value::from(row.upload_count),
        }
    }
}
