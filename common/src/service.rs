//! Template persistence on top of an injected [`RecordStore`].

use std::rc::Rc;

use crate::config::WidgetConfig;
use crate::editor::payload::{EditorMode, SaveRequest};
use crate::error::StoreError;
use crate::model::template::TemplateRecord;
use crate::requests::{first_success, ListQuery};
use crate::store::RecordStore;

#[derive(Clone)]
pub struct TemplateService {
    records: Rc<dyn RecordStore>,
    config: Rc<WidgetConfig>,
}

impl TemplateService {
    pub fn new(records: Rc<dyn RecordStore>, config: Rc<WidgetConfig>) -> Self {
        Self { records, config }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// First page of templates. Records that do not decode are skipped.
    pub async fn list(&self) -> Result<Vec<TemplateRecord>, StoreError> {
        let query = ListQuery {
            entity: self.config.entity.clone(),
            sort_order: self.config.sort_order.clone(),
            per_page: self.config.per_page,
            page: 1,
        };
        let raw = self.records.list_all(&query).await?;

        let templates: Vec<TemplateRecord> = raw
            .into_iter()
            .filter_map(|value| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("skipping undecodable template record: {}", e);
                    None
                }
            })
            .collect();
        log::info!("loaded {} templates", templates.len());
        Ok(templates)
    }

    /// Issues the create or update call for `request`; returns the record id.
    pub async fn save(&self, request: &SaveRequest) -> Result<String, StoreError> {
        let data = request.payload.to_value()?;
        let entity = &self.config.entity;
        let triggers = &self.config.triggers;

        match &request.mode {
            EditorMode::Create => {
                let results = self.records.insert(entity, data, triggers).await?;
                let created = first_success(results)?;
                let id = created.record_id().unwrap_or_default().to_string();
                log::info!("created template {}", id);
                Ok(id)
            }
            EditorMode::Edit { record_id } => {
                let results = self.records.update(entity, record_id, data, triggers).await?;
                first_success(results)?;
                log::info!("updated template {}", record_id);
                Ok(record_id.clone())
            }
        }
    }

    pub async fn delete(&self, record_id: &str) -> Result<(), StoreError> {
        let results = self.records.delete(&self.config.entity, record_id).await?;
        first_success(results)?;
        log::info!("deleted template {}", record_id);
        Ok(())
    }
}
