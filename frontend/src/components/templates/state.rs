use common::listing::DeleteConfirmation;
use common::model::template::TemplateRecord;

pub struct TemplatesPage {
    /// Whether the editor dialog is shown.
    pub editor_open: bool,
    /// Record being edited; `None` while creating.
    pub edit_record: Option<TemplateRecord>,
    pub delete: DeleteConfirmation,
}

impl TemplatesPage {
    pub fn new() -> Self {
        Self {
            editor_open: false,
            edit_record: None,
            delete: DeleteConfirmation::default(),
        }
    }
}
