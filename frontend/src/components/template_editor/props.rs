use std::rc::Rc;

use yew::prelude::*;

use common::model::template::TemplateRecord;

use crate::services::Services;

#[derive(Properties, PartialEq)]
pub struct TemplateEditorProps {
    pub open: bool,
    /// Record to edit. `None` opens the dialog for a new template.
    #[prop_or_default]
    pub record: Option<TemplateRecord>,
    pub services: Rc<Services>,
    /// The user cancelled the dialog.
    pub on_close: Callback<()>,
    /// The template was saved; the dialog has already reset itself.
    pub on_saved: Callback<()>,
}
