//! Loads `widget-config.json` from next to the bundle, if one is deployed.

use gloo_net::http::Request;

use common::config::{WidgetConfig, CONFIG_FILE};

pub async fn load() -> WidgetConfig {
    let response = match Request::get(CONFIG_FILE).send().await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("could not request {}: {}; using defaults", CONFIG_FILE, e);
            return WidgetConfig::default();
        }
    };

    if response.status() != 200 {
        log::info!("no {} deployed (status {}); using defaults", CONFIG_FILE, response.status());
        return WidgetConfig::default();
    }

    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            log::warn!("could not read {}: {}; using defaults", CONFIG_FILE, e);
            return WidgetConfig::default();
        }
    };

    match WidgetConfig::from_json(&text) {
        Ok(config) => {
            log::info!("loaded {}", CONFIG_FILE);
            config
        }
        Err(e) => {
            log::error!("{} rejected: {}; using defaults", CONFIG_FILE, e);
            WidgetConfig::default()
        }
    }
}
