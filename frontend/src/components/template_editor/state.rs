use common::editor::TemplateEditor;

pub struct TemplateEditorDialog {
    pub editor: TemplateEditor,
}

impl TemplateEditorDialog {
    pub fn new() -> Self {
        Self {
            editor: TemplateEditor::new(),
        }
    }
}
