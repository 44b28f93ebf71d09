use std::rc::Rc;

use common::config::WidgetConfig;
use common::service::TemplateService;
use common::store::metadata::ConnectionMetadataStore;
use common::store::MetadataStore;

use crate::zoho::{ZohoConnection, ZohoRecordStore};

/// Host capabilities handed down to the pages.
///
/// Built once by the app shell; components only ever compare the handle by
/// identity, so equality is pointer equality.
pub struct Services {
    pub templates: TemplateService,
    pub metadata: Rc<dyn MetadataStore>,
}

impl Services {
    /// Capabilities backed by the embedded-app SDK.
    pub fn zoho(config: Rc<WidgetConfig>) -> Self {
        Self {
            templates: TemplateService::new(Rc::new(ZohoRecordStore), config.clone()),
            metadata: Rc::new(ConnectionMetadataStore::new(Rc::new(ZohoConnection), config)),
        }
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}
