//! Bindings to the CRM embedded-app SDK (`window.ZOHO`).
//!
//! This is the only module that touches the SDK object. It implements the
//! `common` host capability traits so components receive them injected and
//! never reach for the global directly. Values cross the JS boundary as JSON
//! text, which keeps serde as the single source of truth for shapes.

use async_trait::async_trait;
use js_sys::{Promise, JSON};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use yew::Callback;

use common::error::StoreError;
use common::requests::{ActionResponse, ActionResult, ConnectionRequest, ListQuery, RecordPage};
use common::store::{ConnectionInvoker, RecordStore};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["ZOHO", "embeddedApp"], js_name = on)]
    fn embedded_app_on(event: &str, handler: &Closure<dyn FnMut(JsValue)>) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["ZOHO", "embeddedApp"], js_name = init)]
    fn embedded_app_init() -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["ZOHO", "CRM", "API"], js_name = getAllRecords)]
    fn get_all_records(config: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["ZOHO", "CRM", "API"], js_name = insertRecord)]
    fn insert_record(config: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["ZOHO", "CRM", "API"], js_name = updateRecord)]
    fn update_record(config: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["ZOHO", "CRM", "API"], js_name = deleteRecord)]
    fn delete_record(config: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["ZOHO", "CRM", "CONNECTION"], js_name = invoke)]
    fn connection_invoke(connection: &str, request: &JsValue) -> Result<Promise, JsValue>;
}

/// Registers `on_load` for the host's `PageLoad` event and starts the SDK
/// handshake. Data calls must wait for `on_load`.
pub fn init(on_load: Callback<()>) {
    let handler = Closure::<dyn FnMut(JsValue)>::new(move |_data: JsValue| {
        log::info!("host page loaded");
        on_load.emit(());
    });

    if let Err(e) = embedded_app_on("PageLoad", &handler) {
        log::error!("embedded app SDK unavailable: {}", describe(&e));
        return;
    }
    // The SDK keeps the handler for the lifetime of the page.
    handler.forget();

    match embedded_app_init() {
        Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::error!("embedded app init failed: {}", describe(&e));
            }
        }),
        Err(e) => log::error!("embedded app init failed: {}", describe(&e)),
    }
}

fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if value.is_undefined() {
        return "undefined".to_string();
    }
    JSON::stringify(value)
        .ok()
        .and_then(|text| text.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

fn host_error(value: JsValue) -> StoreError {
    StoreError::Host(describe(&value))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, StoreError> {
    let text = serde_json::to_string(value)?;
    JSON::parse(&text).map_err(host_error)
}

fn from_js<T: DeserializeOwned>(value: &JsValue) -> Result<T, StoreError> {
    if value.is_undefined() || value.is_null() {
        return Ok(serde_json::from_value(Value::Null)?);
    }
    let text = JSON::stringify(value)
        .map_err(host_error)?
        .as_string()
        .unwrap_or_else(|| "null".to_string());
    Ok(serde_json::from_str(&text)?)
}

async fn settle(call: Result<Promise, JsValue>) -> Result<JsValue, StoreError> {
    let promise = call.map_err(host_error)?;
    JsFuture::from(promise).await.map_err(host_error)
}

/// Response envelopes are objects; anything else (the SDK answers an empty
/// string for an empty module) is read as "no data".
fn envelope(value: &JsValue) -> Result<Value, StoreError> {
    let raw: Value = from_js(value)?;
    Ok(if raw.is_object() { raw } else { json!({}) })
}

fn action_results(value: &JsValue) -> Result<Vec<ActionResult>, StoreError> {
    let response = ActionResponse::deserialize(envelope(value)?)?;
    Ok(response.data)
}

/// Record store backed by `ZOHO.CRM.API`.
pub struct ZohoRecordStore;

#[async_trait(?Send)]
impl RecordStore for ZohoRecordStore {
    async fn list_all(&self, query: &ListQuery) -> Result<Vec<Value>, StoreError> {
        let response = settle(get_all_records(&to_js(query)?)).await?;
        let page = RecordPage::deserialize(envelope(&response)?)?;
        Ok(page.data)
    }

    async fn insert(
        &self,
        entity: &str,
        data: Value,
        triggers: &[String],
    ) -> Result<Vec<ActionResult>, StoreError> {
        let config = json!({ "Entity": entity, "APIData": data, "Trigger": triggers });
        let response = settle(insert_record(&to_js(&config)?)).await?;
        action_results(&response)
    }

    async fn update(
        &self,
        entity: &str,
        id: &str,
        mut data: Value,
        triggers: &[String],
    ) -> Result<Vec<ActionResult>, StoreError> {
        if let Some(fields) = data.as_object_mut() {
            fields.insert("id".to_string(), Value::String(id.to_string()));
        }
        let config = json!({ "Entity": entity, "APIData": data, "Trigger": triggers });
        let response = settle(update_record(&to_js(&config)?)).await?;
        action_results(&response)
    }

    async fn delete(&self, entity: &str, id: &str) -> Result<Vec<ActionResult>, StoreError> {
        let config = json!({ "Entity": entity, "RecordID": id });
        let response = settle(delete_record(&to_js(&config)?)).await?;
        action_results(&response)
    }
}

/// Authenticated invoke through `ZOHO.CRM.CONNECTION`.
pub struct ZohoConnection;

#[async_trait(?Send)]
impl ConnectionInvoker for ZohoConnection {
    async fn invoke(
        &self,
        connection: &str,
        request: &ConnectionRequest,
    ) -> Result<Value, StoreError> {
        let response = settle(connection_invoke(connection, &to_js(request)?)).await?;
        from_js(&response)
    }
}
