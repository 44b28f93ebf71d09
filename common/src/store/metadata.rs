//! Metadata store backed by the CRM settings REST API.
//!
//! Module and field lists are fetched through an authenticated connection
//! invoke and filtered client-side: only modules a template can sensibly be
//! attached to, and only text fields (passwords and folder ids are stored as
//! plain text).

use std::rc::Rc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::config::WidgetConfig;
use crate::error::StoreError;
use crate::model::choice::Choice;
use crate::requests::ConnectionRequest;
use crate::store::{ConnectionInvoker, MetadataStore};

const TEXT_DATA_TYPE: &str = "text";
const MODULE_TYPES: [&str; 2] = ["default", "custom"];

#[derive(Debug, Deserialize)]
struct ModuleMeta {
    #[serde(default)]
    api_name: String,
    #[serde(default)]
    plural_label: String,
    #[serde(default)]
    api_supported: bool,
    #[serde(default)]
    visible: bool,
    #[serde(default)]
    generated_type: String,
    #[serde(default)]
    editable: bool,
}

impl ModuleMeta {
    fn is_selectable(&self) -> bool {
        self.api_supported
            && self.visible
            && self.editable
            && MODULE_TYPES.contains(&self.generated_type.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct FieldMeta {
    #[serde(default)]
    api_name: String,
    #[serde(default)]
    field_label: String,
    #[serde(default)]
    data_type: String,
}

#[derive(Debug, Default, Deserialize)]
struct ModulesBody {
    #[serde(default)]
    modules: Vec<ModuleMeta>,
}

#[derive(Debug, Default, Deserialize)]
struct FieldsBody {
    #[serde(default)]
    fields: Vec<FieldMeta>,
}

/// Extracts `details.statusMessage` from an invoke response. The host
/// delivers it either as an object or as a JSON encoded string.
fn status_message(response: &Value) -> Result<Value, StoreError> {
    let message = response
        .pointer("/details/statusMessage")
        .ok_or_else(|| StoreError::Decode("missing details.statusMessage".to_string()))?;

    let body = match message {
        Value::String(text) if text.trim().is_empty() => Value::Null,
        Value::String(text) => serde_json::from_str(text)?,
        other => other.clone(),
    };

    if body.get("status").and_then(Value::as_str) == Some("error") {
        return Err(StoreError::Rejected {
            code: body
                .get("code")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            message: body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        });
    }
    Ok(body)
}

/// Selectable modules of a `settings/modules` response, in host order.
pub fn parse_modules(response: &Value) -> Result<Vec<Choice>, StoreError> {
    let body = status_message(response)?;
    if body.is_null() {
        return Ok(Vec::new());
    }
    let body = ModulesBody::deserialize(&body)?;
    Ok(body
        .modules
        .into_iter()
        .filter(ModuleMeta::is_selectable)
        .map(|m| Choice::new(m.plural_label, m.api_name))
        .collect())
}

/// Text fields of a `settings/fields` response, in host order.
pub fn parse_text_fields(response: &Value) -> Result<Vec<Choice>, StoreError> {
    let body = status_message(response)?;
    if body.is_null() {
        return Ok(Vec::new());
    }
    let body = FieldsBody::deserialize(&body)?;
    Ok(body
        .fields
        .into_iter()
        .filter(|f| f.data_type == TEXT_DATA_TYPE)
        .map(|f| Choice::new(f.field_label, f.api_name))
        .collect())
}

/// [`MetadataStore`] over a [`ConnectionInvoker`].
pub struct ConnectionMetadataStore {
    invoker: Rc<dyn ConnectionInvoker>,
    config: Rc<WidgetConfig>,
}

impl ConnectionMetadataStore {
    pub fn new(invoker: Rc<dyn ConnectionInvoker>, config: Rc<WidgetConfig>) -> Self {
        Self { invoker, config }
    }
}

#[async_trait(?Send)]
impl MetadataStore for ConnectionMetadataStore {
    async fn list_modules(&self) -> Result<Vec<Choice>, StoreError> {
        let request = ConnectionRequest::get(self.config.modules_url());
        let response = self.invoker.invoke(&self.config.connection, &request).await?;
        let modules = parse_modules(&response)?;
        log::debug!("loaded {} selectable modules", modules.len());
        Ok(modules)
    }

    async fn list_text_fields(&self, module_api: &str) -> Result<Vec<Choice>, StoreError> {
        let request = ConnectionRequest::get(self.config.fields_url(module_api));
        let response = self.invoker.invoke(&self.config.connection, &request).await?;
        let fields = parse_text_fields(&response)?;
        log::debug!("loaded {} text fields for {}", fields.len(), module_api);
        Ok(fields)
    }
}
