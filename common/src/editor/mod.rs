//! Template editor state machine.
//!
//! The editor is driven Elm-style: the UI layer forwards user intents and the
//! results of remote calls, and the editor answers with the next remote call to
//! issue (a module fetch, a field fetch or a save). Nothing here performs I/O,
//! which keeps every transition testable without a browser.
//!
//! Lifecycle of one open/close cycle:
//!
//! - `open` starts a new session and asks for the module list. When an existing
//!   record is supplied, the form is pre-filled from its snapshot and the
//!   desired password/folder fields are parked as a *pending* selection bound
//!   to the field fetch that follows.
//! - `select_module` clears both field selections and asks for the module's
//!   text fields. Every field fetch carries a [`FieldTicket`]; results for an
//!   older ticket are dropped, so a slow response never overwrites newer state.
//! - `submit` validates and, when the form is valid, hands out exactly one
//!   [`SaveRequest`]. Further submits are refused until `submit_finished`.
//! - `close` resets everything; calling it repeatedly is harmless.

pub mod payload;
pub mod validation;

use crate::error::StoreError;
use crate::model::choice::{exclude, Choice};
use crate::model::requirement::{Requirement, RequirementEdit, RequirementId};
use crate::model::template::{fields, TemplateRecord};

use payload::{EditorMode, SaveRequest, TemplatePayload};
use validation::{validate, FormField, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    Open,
    Submitting,
}

/// Identifies one field fetch: the editor session and the module generation
/// it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTicket {
    session: u64,
    generation: u64,
}

/// A field fetch the UI layer has to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFetch {
    pub ticket: FieldTicket,
    pub module_api: String,
}

/// Remote calls to start after `open`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenEffects {
    /// Session to hand back with the module list.
    pub session: u64,
    pub fields: Option<FieldFetch>,
}

/// Why `submit` did not produce a save request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    NotOpen,
    InFlight,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingSelection {
    ticket: FieldTicket,
    password: Option<String>,
    folder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEditor {
    phase: Phase,
    mode: EditorMode,
    session: u64,
    generation: u64,
    template_name: String,
    module: Option<Choice>,
    password_field: Option<Choice>,
    folder_field: Option<Choice>,
    requirements: Vec<Requirement>,
    modules: Vec<Choice>,
    modules_loading: bool,
    fields: Vec<Choice>,
    fields_loading: bool,
    pending: Option<PendingSelection>,
    errors: ValidationErrors,
    submit_error: Option<String>,
}

impl Default for TemplateEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEditor {
    pub fn new() -> Self {
        Self {
            phase: Phase::Closed,
            mode: EditorMode::Create,
            session: 0,
            generation: 0,
            template_name: String::new(),
            module: None,
            password_field: None,
            folder_field: None,
            requirements: vec![Requirement::new()],
            modules: Vec::new(),
            modules_loading: false,
            fields: Vec::new(),
            fields_loading: false,
            pending: None,
            errors: ValidationErrors::default(),
            submit_error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != Phase::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn template_name(&self) -> &str {
        &self.template_name
    }

    pub fn module(&self) -> Option<&Choice> {
        self.module.as_ref()
    }

    pub fn password_field(&self) -> Option<&Choice> {
        self.password_field.as_ref()
    }

    pub fn folder_field(&self) -> Option<&Choice> {
        self.folder_field.as_ref()
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    pub fn modules(&self) -> &[Choice] {
        &self.modules
    }

    /// Module selector options. A selected module missing from the fetched
    /// list is offered too, so the selector always shows what will be saved.
    pub fn module_options(&self) -> Vec<&Choice> {
        let mut options: Vec<&Choice> = self.modules.iter().collect();
        if let Some(selected) = &self.module {
            if !self.modules.iter().any(|m| m.value == selected.value) {
                options.push(selected);
            }
        }
        options
    }

    pub fn modules_loading(&self) -> bool {
        self.modules_loading
    }

    pub fn fields(&self) -> &[Choice] {
        &self.fields
    }

    pub fn fields_loading(&self) -> bool {
        self.fields_loading
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Whether a pre-filled field selection is still waiting for its field list.
    pub fn has_pending_selection(&self) -> bool {
        self.pending.is_some()
    }

    /// Password selector options: every text field except the chosen folder field.
    pub fn password_options(&self) -> Vec<&Choice> {
        exclude(&self.fields, self.folder_field.as_ref())
    }

    /// Folder selector options: every text field except the chosen password field.
    pub fn folder_options(&self) -> Vec<&Choice> {
        exclude(&self.fields, self.password_field.as_ref())
    }

    fn current_ticket(&self) -> FieldTicket {
        FieldTicket {
            session: self.session,
            generation: self.generation,
        }
    }

    fn editable(&self) -> bool {
        self.phase == Phase::Open
    }

    /// Opens the editor, in edit mode when `existing` is supplied.
    pub fn open(&mut self, existing: Option<&TemplateRecord>) -> OpenEffects {
        self.reset_form();
        self.session += 1;
        self.phase = Phase::Open;
        self.modules_loading = true;

        let Some(record) = existing else {
            log::debug!("editor session {} opened for a new template", self.session);
            return OpenEffects {
                session: self.session,
                fields: None,
            };
        };

        self.mode = EditorMode::Edit {
            record_id: record.id.clone(),
        };

        let (module, password, folder) = match record.snapshot() {
            Some(snapshot) => {
                self.template_name = if snapshot.template_name.is_empty() {
                    record.name().unwrap_or_default()
                } else {
                    snapshot.template_name.clone()
                };
                self.requirements = snapshot.requirements();
                (
                    snapshot
                        .module
                        .filter(|m| !m.is_blank())
                        .or_else(|| record.text(fields::MODULE).map(Choice::from_api)),
                    snapshot
                        .password_field
                        .map(|c| c.value)
                        .or_else(|| record.text(fields::PASSWORD_FIELD)),
                    snapshot
                        .folder_field
                        .map(|c| c.value)
                        .or_else(|| record.text(fields::FOLDER_FIELD)),
                )
            }
            None => {
                self.template_name = record.name().unwrap_or_default();
                (
                    record.text(fields::MODULE).map(Choice::from_api),
                    record.text(fields::PASSWORD_FIELD),
                    record.text(fields::FOLDER_FIELD),
                )
            }
        };

        let fetch = self.change_module(module);
        if let Some(fetch) = &fetch {
            if password.is_some() || folder.is_some() {
                self.pending = Some(PendingSelection {
                    ticket: fetch.ticket,
                    password,
                    folder,
                });
            }
        }

        log::debug!(
            "editor session {} opened for template {}",
            self.session,
            record.id
        );
        OpenEffects {
            session: self.session,
            fields: fetch,
        }
    }

    /// User-initiated module change. Drops any pending pre-filled selection.
    pub fn select_module(&mut self, module: Option<Choice>) -> Option<FieldFetch> {
        if !self.editable() {
            return None;
        }
        self.pending = None;
        self.errors.clear(FormField::ModuleName);
        self.change_module(module)
    }

    fn change_module(&mut self, module: Option<Choice>) -> Option<FieldFetch> {
        self.module = module.filter(|m| !m.is_blank());
        self.password_field = None;
        self.folder_field = None;
        self.fields.clear();
        self.fields_loading = false;
        self.generation += 1;

        let module_api = self.module.as_ref()?.value.clone();
        self.fields_loading = true;
        Some(FieldFetch {
            ticket: self.current_ticket(),
            module_api,
        })
    }

    /// Module list for `session` arrived. Returns whether the state changed.
    pub fn modules_loaded(
        &mut self,
        session: u64,
        result: Result<Vec<Choice>, StoreError>,
    ) -> bool {
        if !self.is_open() || session != self.session {
            log::debug!("dropping module list for stale session {}", session);
            return false;
        }
        self.modules_loading = false;

        match result {
            Ok(modules) => {
                if let Some(selected) = &mut self.module {
                    if let Some(known) = modules.iter().find(|m| m.value == selected.value) {
                        selected.label = known.label.clone();
                    }
                }
                self.modules = modules;
            }
            Err(e) => {
                log::error!("failed to fetch modules: {}", e);
                self.modules.clear();
            }
        }
        true
    }

    /// Field list for `ticket` arrived. Stale tickets are ignored. Returns
    /// whether the state changed.
    pub fn fields_loaded(
        &mut self,
        ticket: FieldTicket,
        result: Result<Vec<Choice>, StoreError>,
    ) -> bool {
        if !self.is_open() || ticket != self.current_ticket() {
            log::debug!("dropping stale field list {:?}", ticket);
            return false;
        }
        self.fields_loading = false;
        let pending = self.pending.take().filter(|p| p.ticket == ticket);

        match result {
            Ok(fields) => {
                self.fields = fields;
                if let Some(pending) = pending {
                    self.resolve_pending(pending);
                }
            }
            Err(e) => {
                log::error!("failed to fetch module fields: {}", e);
                self.fields.clear();
            }
        }
        true
    }

    fn resolve_pending(&mut self, pending: PendingSelection) {
        let find = |api: Option<String>| {
            api.and_then(|api| self.fields.iter().find(|f| f.value == api).cloned())
        };
        let password = find(pending.password);
        let mut folder = find(pending.folder);

        if password.is_some() && password == folder {
            log::warn!(
                "stored password and folder fields are identical, keeping the password field only"
            );
            folder = None;
        }
        self.password_field = password;
        self.folder_field = folder;
    }

    pub fn set_template_name(&mut self, name: String) {
        if !self.editable() {
            return;
        }
        self.template_name = name;
        self.errors.clear(FormField::TemplateName);
    }

    /// Chooses the password field. A field already chosen as folder field is
    /// refused.
    pub fn set_password_field(&mut self, field: Option<Choice>) -> bool {
        if !self.editable() || collides(field.as_ref(), self.folder_field.as_ref()) {
            return false;
        }
        self.password_field = field;
        self.errors.clear(FormField::PasswordField);
        true
    }

    /// Chooses the folder field. A field already chosen as password field is
    /// refused.
    pub fn set_folder_field(&mut self, field: Option<Choice>) -> bool {
        if !self.editable() || collides(field.as_ref(), self.password_field.as_ref()) {
            return false;
        }
        self.folder_field = field;
        self.errors.clear(FormField::WorkdriveFolder);
        true
    }

    /// Appends a default row and returns its identity.
    pub fn add_requirement(&mut self) -> Option<RequirementId> {
        if !self.editable() {
            return None;
        }
        let row = Requirement::new();
        let id = row.id.clone();
        self.requirements.push(row);
        Some(id)
    }

    /// Removes the row with `id`. The last remaining row is kept.
    pub fn remove_requirement(&mut self, id: &RequirementId) -> bool {
        if !self.editable() || self.requirements.len() <= 1 {
            return false;
        }
        let before = self.requirements.len();
        self.requirements.retain(|row| &row.id != id);
        before != self.requirements.len()
    }

    pub fn update_requirement(&mut self, id: &RequirementId, edit: RequirementEdit) -> bool {
        if !self.editable() {
            return false;
        }
        let Some(row) = self.requirements.iter_mut().find(|row| &row.id == id) else {
            return false;
        };
        if edit.touches_name() {
            self.errors.clear(FormField::FieldNames);
        }
        row.apply(edit);
        true
    }

    /// Validates the form and, when valid, enters `Submitting` and returns the
    /// single save call to issue.
    pub fn submit(&mut self) -> Result<SaveRequest, SubmitBlocked> {
        match self.phase {
            Phase::Closed => return Err(SubmitBlocked::NotOpen),
            Phase::Submitting => return Err(SubmitBlocked::InFlight),
            Phase::Open => {}
        }

        self.errors = validate(
            &self.template_name,
            self.module.as_ref(),
            self.password_field.as_ref(),
            self.folder_field.as_ref(),
            &self.requirements,
        );

        let (Some(module), Some(password), Some(folder)) =
            (&self.module, &self.password_field, &self.folder_field)
        else {
            return Err(SubmitBlocked::Invalid);
        };
        if !self.errors.is_empty() {
            return Err(SubmitBlocked::Invalid);
        }

        let payload = TemplatePayload::build(
            &self.template_name,
            module,
            password,
            folder,
            &self.requirements,
        )
        .map_err(|e| {
            log::error!("failed to serialize template: {}", e);
            SubmitBlocked::Invalid
        })?;

        self.phase = Phase::Submitting;
        self.submit_error = None;
        Ok(SaveRequest {
            mode: self.mode.clone(),
            payload,
        })
    }

    /// Outcome of the save call. On success the editor closes and `true` is
    /// returned so the caller can refresh the list.
    pub fn submit_finished(&mut self, result: Result<(), StoreError>) -> bool {
        if self.phase != Phase::Submitting {
            return false;
        }
        match result {
            Ok(()) => {
                self.close();
                true
            }
            Err(e) => {
                log::error!("failed to save template: {}", e);
                self.phase = Phase::Open;
                self.submit_error = Some(format!("The template could not be saved: {}", e));
                false
            }
        }
    }

    pub fn dismiss_submit_error(&mut self) {
        self.submit_error = None;
    }

    /// Resets the form to its defaults and closes the editor.
    pub fn close(&mut self) {
        self.reset_form();
        self.phase = Phase::Closed;
    }

    fn reset_form(&mut self) {
        self.mode = EditorMode::Create;
        self.template_name.clear();
        self.module = None;
        self.password_field = None;
        self.folder_field = None;
        self.requirements = vec![Requirement::new()];
        self.modules.clear();
        self.modules_loading = false;
        self.fields.clear();
        self.fields_loading = false;
        self.pending = None;
        self.errors = ValidationErrors::default();
        self.submit_error = None;
    }
}

fn collides(candidate: Option<&Choice>, other: Option<&Choice>) -> bool {
    matches!((candidate, other), (Some(a), Some(b)) if a.value == b.value)
}

#[cfg(test)]
mod tests;
