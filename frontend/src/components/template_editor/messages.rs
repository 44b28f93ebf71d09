use common::editor::FieldTicket;
use common::error::StoreError;
use common::model::choice::Choice;
use common::model::requirement::{RequirementEdit, RequirementId};

/// Selector messages carry the api identifier of the picked option; an empty
/// string means "nothing selected".
pub enum Msg {
    ModulesLoaded {
        session: u64,
        result: Result<Vec<Choice>, StoreError>,
    },
    FieldsLoaded {
        ticket: FieldTicket,
        result: Result<Vec<Choice>, StoreError>,
    },
    SetName(String),
    SelectModule(String),
    SelectPasswordField(String),
    SelectFolderField(String),
    AddRequirement,
    RemoveRequirement(RequirementId),
    EditRequirement(RequirementId, RequirementEdit),
    Submit,
    SaveFinished(Result<String, StoreError>),
    DismissError,
    Close,
}
