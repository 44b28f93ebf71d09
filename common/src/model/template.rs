use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::snapshot::TemplateSnapshot;

/// API names of the template entity's fields in the record store.
pub mod fields {
    pub const ID: &str = "id";
    pub const NAME: &str = "Name";
    pub const MODULE: &str = "Module_Name";
    pub const STATUS: &str = "Status";
    pub const PASSWORD_FIELD: &str = "Password_Field";
    /// Spelled the way the field exists in the CRM.
    pub const FOLDER_FIELD: &str = "Workdrive_Folder_ID_FIeld";
    pub const MODIFIED_TIME: &str = "Modified_Time";
    pub const SNAPSHOT: &str = "Template_JSON";
}

/// Status written on every create and update.
pub const ACTIVE_STATUS: &str = "Active";

/// A template as returned by the record store.
///
/// The host owns the record shape, so everything except the identifier is
/// kept as raw JSON and read through the accessors below. This keeps the list
/// rendering when the CRM adds fields or changes a value's type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl TemplateRecord {
    /// Raw value of `key`; explicit JSON `null` reads as absent.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|value| !value.is_null())
    }

    /// Display text of `key`. Lookup objects (`{"name": .., "id": ..}`)
    /// render their name.
    pub fn text(&self, key: &str) -> Option<String> {
        self.field(key).map(value_text)
    }

    pub fn name(&self) -> Option<String> {
        self.text(fields::NAME)
    }

    /// Parsed form snapshot, if the record carries a readable one.
    pub fn snapshot(&self) -> Option<TemplateSnapshot> {
        let raw = self.field(fields::SNAPSHOT)?;
        match TemplateSnapshot::parse(raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                log::warn!("template {} has an unreadable snapshot: {}", self.id, e);
                None
            }
        }
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => map
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> TemplateRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn deserializes_host_record_with_extra_fields() {
        let rec = record(json!({
            "id": "42",
            "Name": "Visa",
            "Module_Name": "Deals",
            "Owner": {"name": "Ana", "id": "7"},
            "Password_Field": null
        }));

        assert_eq!(rec.id, "42");
        assert_eq!(rec.name().as_deref(), Some("Visa"));
        assert_eq!(rec.text("Owner").as_deref(), Some("Ana"));
        assert_eq!(rec.text(fields::PASSWORD_FIELD), None);
        assert_eq!(rec.text(fields::STATUS), None);
    }

    #[test]
    fn snapshot_is_read_from_string_or_object() {
        let as_string = record(json!({
            "id": "1",
            "Template_JSON": "{\"templateName\":\"A\"}"
        }));
        let as_object = record(json!({
            "id": "2",
            "Template_JSON": {"templateName": "B"}
        }));
        let broken = record(json!({"id": "3", "Template_JSON": "{not json"}));

        assert_eq!(as_string.snapshot().unwrap().template_name, "A");
        assert_eq!(as_object.snapshot().unwrap().template_name, "B");
        assert!(broken.snapshot().is_none());
    }
}
