//! Host capabilities consumed by the widget.
//!
//! The widget never touches the host SDK directly from its components. The
//! frontend implements these traits on top of the SDK object and injects them;
//! tests substitute in-memory fakes. Futures are `?Send` because the widget
//! runs on the single-threaded browser event loop.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreError;
use crate::model::choice::Choice;
use crate::requests::{ActionResult, ConnectionRequest, ListQuery};

pub mod metadata;

#[cfg(test)]
pub(crate) mod fake;

/// CRUD access to entity records.
#[async_trait(?Send)]
pub trait RecordStore {
    async fn list_all(&self, query: &ListQuery) -> Result<Vec<Value>, StoreError>;

    async fn insert(
        &self,
        entity: &str,
        data: Value,
        triggers: &[String],
    ) -> Result<Vec<ActionResult>, StoreError>;

    async fn update(
        &self,
        entity: &str,
        id: &str,
        data: Value,
        triggers: &[String],
    ) -> Result<Vec<ActionResult>, StoreError>;

    async fn delete(&self, entity: &str, id: &str) -> Result<Vec<ActionResult>, StoreError>;
}

/// Module and field metadata used to fill the editor's selectors.
#[async_trait(?Send)]
pub trait MetadataStore {
    /// Modules a template can be attached to.
    async fn list_modules(&self) -> Result<Vec<Choice>, StoreError>;

    /// Text-typed fields of `module_api`.
    async fn list_text_fields(&self, module_api: &str) -> Result<Vec<Choice>, StoreError>;
}

/// Authenticated HTTP invoke through a named CRM connection.
#[async_trait(?Send)]
pub trait ConnectionInvoker {
    async fn invoke(
        &self,
        connection: &str,
        request: &ConnectionRequest,
    ) -> Result<Value, StoreError>;
}
