use common::error::StoreError;
use common::model::template::TemplateRecord;

pub enum Msg {
    OpenCreate,
    OpenEdit(TemplateRecord),
    EditorClosed,
    Saved,
    RequestDelete(TemplateRecord),
    DismissDelete,
    ConfirmDelete,
    DeleteFinished(Result<(), StoreError>),
}
