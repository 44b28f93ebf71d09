//! Request and response shapes exchanged with the host SDK.
//!
//! The wire format belongs to the host; these types only mirror the parts the
//! widget reads or writes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StoreError;

/// Code the host reports for a successful record mutation.
pub const SUCCESS_CODE: &str = "SUCCESS";

/// Arguments of a "list all records" call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListQuery {
    #[serde(rename = "Entity")]
    pub entity: String,
    pub sort_order: String,
    pub per_page: u32,
    pub page: u32,
}

/// Envelope of a "list all records" response. The host omits `data` when the
/// entity is empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordPage {
    #[serde(default)]
    pub data: Vec<Value>,
}

/// One entry of an insert/update/delete response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub details: Value,
}

impl ActionResult {
    /// Record id reported in `details.id`, if any.
    pub fn record_id(&self) -> Option<&str> {
        self.details.get("id").and_then(Value::as_str)
    }
}

/// Envelope of a mutation response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub data: Vec<ActionResult>,
}

/// Only the first entry decides: its code must equal [`SUCCESS_CODE`].
pub fn first_success(results: Vec<ActionResult>) -> Result<ActionResult, StoreError> {
    let first = results.into_iter().next().ok_or(StoreError::EmptyResponse)?;
    if first.code == SUCCESS_CODE {
        Ok(first)
    } else {
        Err(StoreError::Rejected {
            code: first.code,
            message: first.message,
        })
    }
}

/// Body of an authenticated connection invoke.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionRequest {
    pub url: String,
    pub method: String,
    pub param_type: u8,
}

impl ConnectionRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: "GET".to_string(),
            param_type: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(code: &str) -> ActionResult {
        ActionResult {
            code: code.to_string(),
            message: "msg".to_string(),
            status: String::new(),
            details: Value::Null,
        }
    }

    #[test]
    fn first_entry_decides_success() {
        assert!(first_success(vec![result("SUCCESS"), result("INVALID_DATA")]).is_ok());
        assert_eq!(
            first_success(vec![result("INVALID_DATA"), result("SUCCESS")]),
            Err(StoreError::Rejected {
                code: "INVALID_DATA".to_string(),
                message: "msg".to_string()
            })
        );
        assert_eq!(first_success(vec![]), Err(StoreError::EmptyResponse));
    }

    #[test]
    fn list_query_uses_host_key_names() {
        let query = ListQuery {
            entity: "Document_Templates".into(),
            sort_order: "asc".into(),
            per_page: 200,
            page: 1,
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["Entity"], "Document_Templates");
        assert_eq!(json["per_page"], 200);
    }
}
