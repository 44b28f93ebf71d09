use std::rc::Rc;

use yew::prelude::*;

use common::model::template::TemplateRecord;

use crate::services::Services;

#[derive(Properties, PartialEq)]
pub struct TemplatesProps {
    /// `None` until the first load finished.
    pub templates: Option<Rc<Vec<TemplateRecord>>>,
    /// Host handshake done; actions stay disabled until then.
    pub ready: bool,
    #[prop_or_default]
    pub load_error: Option<String>,
    pub services: Rc<Services>,
    /// Asks the shell to reload the collection.
    pub on_changed: Callback<()>,
}
