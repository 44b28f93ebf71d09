use serde_json::json;

use super::*;
use crate::model::requirement::{FileType, Necessity};

fn record(value: serde_json::Value) -> TemplateRecord {
    serde_json::from_value(value).unwrap()
}

fn fields_xy() -> Vec<Choice> {
    vec![Choice::new("X", "x"), Choice::new("Y", "y")]
}

/// Opens a fresh editor on module `Deals` with fields `x` and `y` loaded.
fn editor_with_fields() -> TemplateEditor {
    let mut editor = TemplateEditor::new();
    editor.open(None);
    let fetch = editor
        .select_module(Some(Choice::new("Deals", "Deals")))
        .unwrap();
    assert!(editor.fields_loaded(fetch.ticket, Ok(fields_xy())));
    editor
}

fn with_stable_ids(mut editor: TemplateEditor) -> TemplateEditor {
    for row in &mut editor.requirements {
        row.id = RequirementId::fixed("row");
    }
    editor
}

#[test]
fn opening_fresh_starts_in_create_mode_with_one_default_row() {
    let mut editor = TemplateEditor::new();

    let effects = editor.open(None);

    assert_eq!(editor.phase(), Phase::Open);
    assert_eq!(editor.mode(), &EditorMode::Create);
    assert_eq!(effects.fields, None);
    assert!(editor.modules_loading());
    assert_eq!(editor.requirements().len(), 1);
    assert!(editor.requirements()[0].name.is_empty());
}

#[test]
fn empty_snapshot_requirements_prefill_one_default_row() {
    let rec = record(json!({"id": "7", "Template_JSON": {"documentRequirements": []}}));
    let mut editor = TemplateEditor::new();

    editor.open(Some(&rec));

    let rows = editor.requirements();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].checked);
    assert_eq!(rows[0].necessity, Necessity::Required);
    assert_eq!(rows[0].upload_count, 1);
    assert!(rows[0].file_types.is_empty());
    assert_eq!(
        editor.mode(),
        &EditorMode::Edit {
            record_id: "7".to_string()
        }
    );
}

#[test]
fn pending_password_resolves_against_fetched_fields() {
    let rec = record(json!({
        "id": "7",
        "Template_JSON": serde_json::to_string(&json!({
            "templateName": "Visa",
            "module": {"label": "Module A", "value": "A"},
            "passwordField": {"label": "old label", "value": "x"},
            "documentRequirements": [{"name": "Passport", "fileTypes": ["PDF"]}]
        })).unwrap()
    }));
    let mut editor = TemplateEditor::new();

    let effects = editor.open(Some(&rec));
    let fetch = effects.fields.expect("module is pre-filled");
    assert_eq!(fetch.module_api, "A");
    assert_eq!(editor.template_name(), "Visa");
    assert!(editor.has_pending_selection());
    assert_eq!(editor.password_field(), None);

    assert!(editor.fields_loaded(fetch.ticket, Ok(fields_xy())));

    assert_eq!(editor.password_field(), Some(&Choice::new("X", "x")));
    assert_eq!(editor.folder_field(), None);
    assert!(!editor.has_pending_selection());
    assert_eq!(editor.requirements()[0].name, "Passport");
    assert!(editor.requirements()[0].file_types.contains(&FileType::Pdf));
}

#[test]
fn unmatched_pending_selection_stays_empty() {
    let rec = record(json!({
        "id": "7",
        "Template_JSON": {
            "module": {"label": "A", "value": "A"},
            "passwordField": {"label": "gone", "value": "gone"},
            "folderField": {"label": "Y", "value": "y"}
        }
    }));
    let mut editor = TemplateEditor::new();
    let fetch = editor.open(Some(&rec)).fields.unwrap();

    editor.fields_loaded(fetch.ticket, Ok(fields_xy()));

    assert_eq!(editor.password_field(), None);
    assert_eq!(editor.folder_field(), Some(&Choice::new("Y", "y")));
}

#[test]
fn pending_selection_is_not_applied_after_user_changes_module() {
    let rec = record(json!({
        "id": "7",
        "Template_JSON": {
            "module": {"label": "A", "value": "A"},
            "passwordField": {"label": "X", "value": "x"}
        }
    }));
    let mut editor = TemplateEditor::new();
    let first = editor.open(Some(&rec)).fields.unwrap();

    let second = editor
        .select_module(Some(Choice::new("B", "B")))
        .unwrap();
    assert!(!editor.has_pending_selection());

    assert!(!editor.fields_loaded(first.ticket, Ok(fields_xy())));
    assert!(editor.fields().is_empty());

    assert!(editor.fields_loaded(second.ticket, Ok(fields_xy())));
    assert_eq!(editor.fields(), fields_xy().as_slice());
    assert_eq!(editor.password_field(), None);
}

#[test]
fn stale_field_fetch_never_overwrites_newer_module() {
    let mut editor = TemplateEditor::new();
    editor.open(None);
    let a = editor.select_module(Some(Choice::new("A", "A"))).unwrap();
    let b = editor.select_module(Some(Choice::new("B", "B"))).unwrap();

    assert!(editor.fields_loaded(b.ticket, Ok(vec![Choice::new("Z", "z")])));
    assert!(!editor.fields_loaded(a.ticket, Ok(fields_xy())));

    assert_eq!(editor.fields(), &[Choice::new("Z", "z")]);
    assert!(!editor.fields_loading());
}

#[test]
fn field_fetch_from_previous_session_is_dropped() {
    let mut editor = TemplateEditor::new();
    editor.open(None);
    let old = editor.select_module(Some(Choice::new("A", "A"))).unwrap();
    editor.close();
    editor.open(None);

    assert!(!editor.fields_loaded(old.ticket, Ok(fields_xy())));
    assert!(editor.fields().is_empty());
}

#[test]
fn changing_module_clears_field_selections() {
    let mut editor = editor_with_fields();
    editor.set_password_field(Some(Choice::new("X", "x")));
    editor.set_folder_field(Some(Choice::new("Y", "y")));

    let fetch = editor.select_module(Some(Choice::new("Contacts", "Contacts")));

    assert!(fetch.is_some());
    assert_eq!(editor.password_field(), None);
    assert_eq!(editor.folder_field(), None);
    assert!(editor.fields().is_empty());
    assert!(editor.fields_loading());
}

#[test]
fn clearing_the_module_issues_no_fetch() {
    let mut editor = editor_with_fields();

    assert_eq!(editor.select_module(None), None);
    assert_eq!(editor.module(), None);
    assert!(!editor.fields_loading());
}

#[test]
fn field_fetch_failure_leaves_options_empty() {
    let rec = record(json!({
        "id": "7",
        "Module_Name": "A",
        "Password_Field": "x"
    }));
    let mut editor = TemplateEditor::new();
    let fetch = editor.open(Some(&rec)).fields.unwrap();

    editor.fields_loaded(fetch.ticket, Err(StoreError::Host("offline".into())));

    assert!(editor.fields().is_empty());
    assert!(!editor.has_pending_selection());
    assert_eq!(editor.phase(), Phase::Open);
}

#[test]
fn module_list_relabels_prefilled_module() {
    let rec = record(json!({"id": "7", "Name": "Visa", "Module_Name": "Visas"}));
    let mut editor = TemplateEditor::new();
    let effects = editor.open(Some(&rec));
    assert_eq!(editor.template_name(), "Visa");
    assert_eq!(editor.module(), Some(&Choice::new("Visas", "Visas")));

    editor.modules_loaded(
        effects.session,
        Ok(vec![Choice::new("Visa Files", "Visas"), Choice::new("Deals", "Deals")]),
    );

    assert_eq!(editor.module(), Some(&Choice::new("Visa Files", "Visas")));
    assert_eq!(editor.modules().len(), 2);
    assert!(!editor.modules_loading());
}

#[test]
fn module_list_for_stale_session_is_ignored() {
    let mut editor = TemplateEditor::new();
    let old = editor.open(None);
    editor.close();
    editor.open(None);

    assert!(!editor.modules_loaded(old.session, Ok(vec![Choice::new("A", "A")])));
    assert!(editor.modules().is_empty());
}

#[test]
fn module_fetch_failure_leaves_list_empty() {
    let mut editor = TemplateEditor::new();
    let effects = editor.open(None);

    assert!(editor.modules_loaded(effects.session, Err(StoreError::Host("boom".into()))));
    assert!(editor.modules().is_empty());
    assert!(!editor.modules_loading());
}

#[test]
fn password_and_folder_options_exclude_each_other() {
    let mut editor = editor_with_fields();

    editor.set_folder_field(Some(Choice::new("X", "x")));
    assert_eq!(editor.password_options(), vec![&Choice::new("Y", "y")]);
    assert_eq!(editor.folder_options().len(), 2);

    editor.set_folder_field(None);
    editor.set_password_field(Some(Choice::new("Y", "y")));
    assert_eq!(editor.folder_options(), vec![&Choice::new("X", "x")]);
    assert_eq!(editor.password_options().len(), 2);
}

#[test]
fn choosing_the_same_field_twice_is_refused() {
    let mut editor = editor_with_fields();
    assert!(editor.set_password_field(Some(Choice::new("X", "x"))));

    assert!(!editor.set_folder_field(Some(Choice::new("X", "x"))));
    assert_eq!(editor.folder_field(), None);
}

#[test]
fn add_then_remove_first_keeps_the_added_row() {
    let mut editor = TemplateEditor::new();
    editor.open(None);
    let first = editor.requirements()[0].id.clone();
    let second = editor.add_requirement().unwrap();
    editor.update_requirement(&second, RequirementEdit::Name("Photo".into()));
    editor.update_requirement(&second, RequirementEdit::Necessity(Necessity::Optional));
    let second_row = editor.requirements()[1].clone();
    assert_eq!(editor.requirements().len(), 2);

    assert!(editor.remove_requirement(&first));

    assert_eq!(editor.requirements(), &[second_row]);
}

#[test]
fn last_row_cannot_be_removed() {
    let mut editor = TemplateEditor::new();
    editor.open(None);
    let only = editor.requirements()[0].id.clone();

    assert!(!editor.remove_requirement(&only));
    assert_eq!(editor.requirements().len(), 1);
}

#[test]
fn row_updates_preserve_identity_and_clamp_upload_count() {
    let mut editor = TemplateEditor::new();
    editor.open(None);
    let id = editor.requirements()[0].id.clone();

    editor.update_requirement(&id, RequirementEdit::UploadCount(0));
    editor.update_requirement(&id, RequirementEdit::Checked(false));

    let row = &editor.requirements()[0];
    assert_eq!(row.id, id);
    assert_eq!(row.upload_count, 1);
    assert!(!row.checked);
    assert!(!editor.update_requirement(
        &RequirementId::fixed("missing"),
        RequirementEdit::Checked(true)
    ));
}

#[test]
fn empty_names_report_exactly_two_errors_and_no_save() {
    let mut editor = editor_with_fields();
    editor.set_password_field(Some(Choice::new("X", "x")));
    editor.set_folder_field(Some(Choice::new("Y", "y")));

    let result = editor.submit();

    assert_eq!(result, Err(SubmitBlocked::Invalid));
    assert_eq!(
        editor.errors().fields().collect::<Vec<_>>(),
        vec![FormField::TemplateName, FormField::FieldNames]
    );
    assert_eq!(
        editor.errors().fields().map(FormField::key).collect::<Vec<_>>(),
        vec!["templateName", "fieldNames"]
    );
    assert_eq!(editor.phase(), Phase::Open);
}

#[test]
fn editing_a_field_clears_its_error() {
    let mut editor = TemplateEditor::new();
    editor.open(None);
    let _ = editor.submit();
    assert_eq!(editor.errors().len(), 5);
    let id = editor.requirements()[0].id.clone();

    editor.set_template_name("Visa".into());
    editor.update_requirement(&id, RequirementEdit::Name("Passport".into()));

    assert!(!editor.errors().contains(FormField::TemplateName));
    assert!(!editor.errors().contains(FormField::FieldNames));
    assert!(editor.errors().contains(FormField::ModuleName));
}

fn filled_editor() -> TemplateEditor {
    let mut editor = editor_with_fields();
    editor.set_template_name("Canada Student Visa".into());
    editor.set_password_field(Some(Choice::new("X", "x")));
    editor.set_folder_field(Some(Choice::new("Y", "y")));
    let id = editor.requirements()[0].id.clone();
    editor.update_requirement(&id, RequirementEdit::Name("Passport".into()));
    editor
}

#[test]
fn valid_form_yields_one_create_request_and_blocks_double_submit() {
    let mut editor = filled_editor();

    let request = editor.submit().unwrap();

    assert_eq!(request.mode, EditorMode::Create);
    assert_eq!(request.payload.name, "Canada Student Visa");
    assert_eq!(request.payload.module, "Deals");
    assert_eq!(request.payload.password_field, "x");
    assert_eq!(request.payload.folder_field, "y");
    assert_eq!(request.payload.status, "Active");
    assert!(editor.is_submitting());
    assert_eq!(editor.submit(), Err(SubmitBlocked::InFlight));
}

#[test]
fn successful_save_closes_and_resets() {
    let mut editor = filled_editor();
    editor.submit().unwrap();

    assert!(editor.submit_finished(Ok(())));

    assert_eq!(editor.phase(), Phase::Closed);
    assert_eq!(editor.template_name(), "");
    assert_eq!(editor.module(), None);
    assert_eq!(editor.requirements().len(), 1);
    assert!(!editor.submit_finished(Ok(())));
}

#[test]
fn failed_save_keeps_the_form_and_shows_an_error() {
    let mut editor = filled_editor();
    editor.submit().unwrap();

    let closed = editor.submit_finished(Err(StoreError::Rejected {
        code: "INVALID_DATA".into(),
        message: "invalid data".into(),
    }));

    assert!(!closed);
    assert_eq!(editor.phase(), Phase::Open);
    assert_eq!(editor.template_name(), "Canada Student Visa");
    assert!(editor.submit_error().unwrap().contains("INVALID_DATA"));

    editor.dismiss_submit_error();
    assert_eq!(editor.submit_error(), None);
    assert!(editor.submit().is_ok());
}

#[test]
fn edit_mode_submits_an_update_for_the_record() {
    let rec = record(json!({
        "id": "99",
        "Template_JSON": {
            "templateName": "Visa",
            "module": {"label": "Deals", "value": "Deals"},
            "passwordField": {"label": "X", "value": "x"},
            "folderField": {"label": "Y", "value": "y"},
            "documentRequirements": [{"name": "Passport"}]
        }
    }));
    let mut editor = TemplateEditor::new();
    let fetch = editor.open(Some(&rec)).fields.unwrap();
    editor.fields_loaded(fetch.ticket, Ok(fields_xy()));

    let request = editor.submit().unwrap();

    assert_eq!(
        request.mode,
        EditorMode::Edit {
            record_id: "99".into()
        }
    );
    assert_eq!(request.payload.password_field, "x");
    assert_eq!(request.payload.folder_field, "y");
}

#[test]
fn closing_twice_equals_closing_once() {
    let mut editor = filled_editor();
    let _ = editor.submit();

    editor.close();
    let once = with_stable_ids(editor.clone());
    editor.close();
    let twice = with_stable_ids(editor.clone());

    assert_eq!(once, twice);
    assert_eq!(once.phase(), Phase::Closed);
    assert_eq!(once.template_name(), "");
    assert_eq!(once.password_field(), None);
    assert_eq!(once.folder_field(), None);
    assert!(once.errors().is_empty());
    assert_eq!(once.requirements().len(), 1);
    assert!(!once.has_pending_selection());
}

#[test]
fn closed_editor_ignores_edits() {
    let mut editor = TemplateEditor::new();

    editor.set_template_name("ignored".into());

    assert_eq!(editor.add_requirement(), None);
    assert_eq!(editor.template_name(), "");
    assert_eq!(editor.submit(), Err(SubmitBlocked::NotOpen));
}

#[test]
fn reopening_record_with_numeric_row_ids_keeps_its_rows() {
    let rec = record(json!({
        "id": "7",
        "Name": "Visa",
        "Template_JSON": serde_json::to_string(&json!({
            "templateName": "Visa",
            "module": {"label": "Deals", "value": "Deals"},
            "documentRequirements": [
                {"id": 1718000000000.123_f64, "name": "Passport", "checked": null},
                {"id": 1718000000001.5_f64, "name": "Photo", "uploadCount": null}
            ]
        })).unwrap()
    }));
    let mut editor = TemplateEditor::new();

    editor.open(Some(&rec));

    let names: Vec<&str> = editor.requirements().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Passport", "Photo"]);
    assert!(editor.requirements().iter().all(|r| r.checked && r.upload_count == 1));
    assert_eq!(editor.template_name(), "Visa");
}

#[test]
fn prefilled_module_missing_from_fetched_list_is_still_offered() {
    let rec = record(json!({"id": "7", "Name": "Visa", "Module_Name": "Retired_Module"}));
    let mut editor = TemplateEditor::new();
    let effects = editor.open(Some(&rec));

    assert!(editor.modules_loaded(effects.session, Ok(vec![Choice::new("Deals", "Deals")])));

    let offered: Vec<&str> = editor
        .module_options()
        .iter()
        .map(|m| m.value.as_str())
        .collect();
    assert_eq!(offered, vec!["Deals", "Retired_Module"]);
    assert_eq!(editor.module().map(|m| m.value.as_str()), Some("Retired_Module"));
}

#[test]
fn listed_module_is_not_offered_twice() {
    let mut editor = TemplateEditor::new();
    let session = editor.open(None).session;
    editor.select_module(Some(Choice::new("Deals", "Deals")));
    editor.modules_loaded(session, Ok(vec![Choice::new("Deals", "Deals")]));

    assert_eq!(editor.module_options().len(), 1);
}
