//! Widget configuration.
//!
//! Every value has a default matching the production CRM org, so the widget
//! runs without any configuration file. Deployments can ship a
//! `widget-config.json` next to the bundle to override individual keys.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Name of the optional override file served next to the widget bundle.
pub const CONFIG_FILE: &str = "widget-config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Entity holding the templates.
    pub entity: String,
    /// Name of the CRM connection used for metadata calls.
    pub connection: String,
    /// Base URL of the CRM REST API, without trailing slash.
    pub api_base: String,
    /// Page size used when listing templates.
    pub per_page: u32,
    /// Sort order used when listing templates (`asc` or `desc`).
    pub sort_order: String,
    /// Workflow triggers passed along with create and update calls.
    pub triggers: Vec<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            entity: "Document_Templates".to_string(),
            connection: "zoho_crm_conn_used_in_widget_do_not_delete".to_string(),
            api_base: "https://www.zohoapis.eu/crm/v8".to_string(),
            per_page: 200,
            sort_order: "asc".to_string(),
            triggers: vec!["workflow".to_string()],
        }
    }
}

impl WidgetConfig {
    /// Parses overrides from JSON; missing keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: WidgetConfig = serde_json::from_str(text)?;
        config.validated()
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        if self.entity.trim().is_empty() {
            return Err(ConfigError::Value {
                key: "entity",
                message: "must not be empty".to_string(),
            });
        }
        if !(1..=200).contains(&self.per_page) {
            return Err(ConfigError::Value {
                key: "per_page",
                message: format!("{} is outside 1..=200", self.per_page),
            });
        }
        if self.sort_order != "asc" && self.sort_order != "desc" {
            return Err(ConfigError::Value {
                key: "sort_order",
                message: format!("expected `asc` or `desc`, got `{}`", self.sort_order),
            });
        }
        self.api_base = self.api_base.trim_end_matches('/').to_string();
        Ok(self)
    }

    pub fn modules_url(&self) -> String {
        format!("{}/settings/modules", self.api_base)
    }

    pub fn fields_url(&self, module_api: &str) -> String {
        format!("{}/settings/fields?module={}", self.api_base, module_api)
    }
}
