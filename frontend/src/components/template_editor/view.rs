//! View rendering for the template editor dialog.
//!
//! The form has three parts: the template header (name, module and the two
//! mutually exclusive field selectors), the requirement rows, and the action
//! bar. Field selectors stay disabled until the module's fields arrive.

use yew::html::Scope;
use yew::prelude::*;

use common::editor::payload::EditorMode;
use common::editor::validation::FormField;
use common::editor::TemplateEditor;
use common::model::choice::Choice;
use common::model::requirement::{FileType, Necessity, Requirement, RequirementEdit};

use super::helpers::{checkbox_checked, input_value, select_value};
use super::messages::Msg;
use super::state::TemplateEditorDialog;
use crate::components::modal::Modal;

pub fn view(dialog: &TemplateEditorDialog, ctx: &Context<TemplateEditorDialog>) -> Html {
    let editor = &dialog.editor;
    let link = ctx.link();

    let title = match editor.mode() {
        EditorMode::Create => "New Template",
        EditorMode::Edit { .. } => "Edit Template",
    };

    html! {
        <Modal
            open={editor.is_open()}
            title={title}
            size="modal-lg"
            actions={build_actions(editor, link)}
        >
            if let Some(error) = editor.submit_error() {
                <div class="alert alert-error" role="alert">
                    <span>{ error }</span>
                    <button class="btn btn-link" onclick={link.callback(|_| Msg::DismissError)}>
                        { "Dismiss" }
                    </button>
                </div>
            }
            { build_header(editor, link) }
            { build_requirements(editor, link) }
        </Modal>
    }
}

fn field_error(editor: &TemplateEditor, field: FormField) -> Html {
    match editor.errors().get(field) {
        Some(message) => html! {
            <span class="field-error" data-field={field.key()}>{ message }</span>
        },
        None => html! {},
    }
}

fn options(choices: &[&Choice], selected: Option<&Choice>) -> Html {
    choices
        .iter()
        .map(|choice| {
            let is_selected = selected.is_some_and(|s| s.value == choice.value);
            html! {
                <option value={choice.value.clone()} selected={is_selected}>
                    { &choice.label }
                </option>
            }
        })
        .collect()
}

fn build_header(editor: &TemplateEditor, link: &Scope<TemplateEditorDialog>) -> Html {
    let modules = editor.module_options();
    let fields_ready = editor.module().is_some() && !editor.fields_loading();
    let module_placeholder = if editor.modules_loading() {
        "Loading modules..."
    } else {
        "Select a module"
    };
    let field_placeholder = if editor.fields_loading() {
        "Loading fields..."
    } else {
        "Select a field"
    };

    html! {
        <div class="form-grid">
            <label class="form-field">
                <span>{ "Template Name" }</span>
                <input
                    type="text"
                    value={editor.template_name().to_string()}
                    oninput={link.callback(|e: InputEvent| Msg::SetName(input_value(&e)))}
                />
                { field_error(editor, FormField::TemplateName) }
            </label>

            <label class="form-field">
                <span>{ "Module" }</span>
                <select
                    disabled={editor.modules_loading()}
                    onchange={link.callback(|e: Event| Msg::SelectModule(select_value(&e)))}
                >
                    <option value="" selected={editor.module().is_none()}>
                        { module_placeholder }
                    </option>
                    { options(&modules, editor.module()) }
                </select>
                { field_error(editor, FormField::ModuleName) }
            </label>

            <label class="form-field">
                <span>{ "Password Field" }</span>
                <select
                    disabled={!fields_ready}
                    onchange={link.callback(|e: Event| Msg::SelectPasswordField(select_value(&e)))}
                >
                    <option value="" selected={editor.password_field().is_none()}>
                        { field_placeholder }
                    </option>
                    { options(&editor.password_options(), editor.password_field()) }
                </select>
                { field_error(editor, FormField::PasswordField) }
            </label>

            <label class="form-field">
                <span>{ "Workdrive Folder ID Field" }</span>
                <select
                    disabled={!fields_ready}
                    onchange={link.callback(|e: Event| Msg::SelectFolderField(select_value(&e)))}
                >
                    <option value="" selected={editor.folder_field().is_none()}>
                        { field_placeholder }
                    </option>
                    { options(&editor.folder_options(), editor.folder_field()) }
                </select>
                { field_error(editor, FormField::WorkdriveFolder) }
            </label>
        </div>
    }
}

fn build_requirements(editor: &TemplateEditor, link: &Scope<TemplateEditorDialog>) -> Html {
    let removable = editor.requirements().len() > 1;
    html! {
        <div class="requirements">
            <div class="requirements-header">
                <h3>{ "Documents" }</h3>
                <button class="btn" onclick={link.callback(|_| Msg::AddRequirement)}>
                    { "Add Document" }
                </button>
            </div>
            { field_error(editor, FormField::FieldNames) }
            { for editor.requirements().iter().map(|row| build_requirement(row, removable, link)) }
        </div>
    }
}

fn build_requirement(
    row: &Requirement,
    removable: bool,
    link: &Scope<TemplateEditorDialog>,
) -> Html {
    let edit = |make: fn(&Event) -> RequirementEdit| {
        let id = row.id.clone();
        link.callback(move |e: Event| Msg::EditRequirement(id.clone(), make(&e)))
    };

    let on_name = {
        let id = row.id.clone();
        link.callback(move |e: InputEvent| {
            Msg::EditRequirement(id.clone(), RequirementEdit::Name(input_value(&e)))
        })
    };
    let on_remove = {
        let id = row.id.clone();
        link.callback(move |_| Msg::RemoveRequirement(id.clone()))
    };

    html! {
        <div class="requirement-row" key={row.id.as_str().to_string()}>
            <input
                type="checkbox"
                checked={row.checked}
                onchange={edit(|e| RequirementEdit::Checked(checkbox_checked(e)))}
            />
            <input
                type="text"
                placeholder="Document name"
                value={row.name.clone()}
                oninput={on_name}
            />
            <select onchange={edit(|e| {
                RequirementEdit::Necessity(Necessity::parse_lenient(&select_value(e)))
            })}>
                { for Necessity::ALL.iter().map(|necessity| html! {
                    <option value={necessity.as_str()} selected={*necessity == row.necessity}>
                        { necessity.as_str() }
                    </option>
                }) }
            </select>
            <div class="file-types">
                { for FileType::ALL.iter().map(|&file_type| build_file_type(row, file_type, link)) }
            </div>
            <input
                type="number"
                min="1"
                value={row.upload_count.to_string()}
                onchange={edit(|e| {
                    RequirementEdit::UploadCount(input_value(e).trim().parse().unwrap_or(1))
                })}
            />
            <button class="btn btn-link btn-danger" disabled={!removable} onclick={on_remove}>
                { "Remove" }
            </button>
        </div>
    }
}

fn build_file_type(
    row: &Requirement,
    file_type: FileType,
    link: &Scope<TemplateEditorDialog>,
) -> Html {
    let id = row.id.clone();
    html! {
        <label class="file-type">
            <input
                type="checkbox"
                checked={row.file_types.contains(&file_type)}
                onchange={link.callback(move |_| {
                    Msg::EditRequirement(id.clone(), RequirementEdit::ToggleFileType(file_type))
                })}
            />
            { file_type.tag() }
        </label>
    }
}

fn build_actions(editor: &TemplateEditor, link: &Scope<TemplateEditorDialog>) -> Html {
    let submitting = editor.is_submitting();
    html! {
        <>
            <button class="btn" disabled={submitting} onclick={link.callback(|_| Msg::Close)}>
                { "Cancel" }
            </button>
            <button
                class="btn btn-primary"
                disabled={submitting}
                onclick={link.callback(|_| Msg::Submit)}
            >
                { if submitting { "Saving..." } else { "Save" } }
            </button>
        </>
    }
}
