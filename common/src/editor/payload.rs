//! Record payload written by the editor.
//!
//! A template is written as its normalized top-level fields plus the full form
//! snapshot serialized to a JSON string, so the editor can rebuild its state
//! (labels, row order, file types) when the record is reopened.

use serde::Serialize;
use serde_json::Value;

use crate::model::choice::Choice;
use crate::model::requirement::Requirement;
use crate::model::snapshot::{SnapshotRequirement, TemplateSnapshot};
use crate::model::template::ACTIVE_STATUS;

/// Whether the editor creates a new record or updates an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Create,
    Edit { record_id: String },
}

/// Normalized record fields plus the serialized snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplatePayload {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Module_Name")]
    pub module: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Password_Field")]
    pub password_field: String,
    #[serde(rename = "Workdrive_Folder_ID_FIeld")]
    pub folder_field: String,
    #[serde(rename = "Template_JSON")]
    pub snapshot: String,
}

impl TemplatePayload {
    pub fn build(
        template_name: &str,
        module: &Choice,
        password_field: &Choice,
        folder_field: &Choice,
        requirements: &[Requirement],
    ) -> Result<Self, serde_json::Error> {
        let name = template_name.trim().to_string();
        let snapshot = TemplateSnapshot {
            template_name: name.clone(),
            module: Some(module.clone()),
            password_field: Some(password_field.clone()),
            folder_field: Some(folder_field.clone()),
            document_requirements: requirements.iter().map(SnapshotRequirement::from).collect(),
        };

        Ok(Self {
            name,
            module: module.value.clone(),
            status: ACTIVE_STATUS.to_string(),
            password_field: password_field.value.clone(),
            folder_field: folder_field.value.clone(),
            snapshot: serde_json::to_string(&snapshot)?,
        })
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// One create-or-update call to issue.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub mode: EditorMode,
    pub payload: TemplatePayload,
}
