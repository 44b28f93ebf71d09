//! Update function for the template editor dialog.
//!
//! Every message is forwarded to the editor state machine. When the editor
//! answers with a remote call (module list, field list, save) it is spawned
//! here and its result comes back as another message tagged with the session
//! or ticket it was issued for.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::editor::{FieldFetch, SubmitBlocked};
use common::model::choice::Choice;

use super::helpers::show_toast;
use super::messages::Msg;
use super::state::TemplateEditorDialog;

/// Opens a new editor session for the current props and starts its fetches.
pub fn open(dialog: &mut TemplateEditorDialog, ctx: &Context<TemplateEditorDialog>) {
    let props = ctx.props();
    let effects = dialog.editor.open(props.record.as_ref());

    let metadata = props.services.metadata.clone();
    let link = ctx.link().clone();
    let session = effects.session;
    spawn_local(async move {
        let result = metadata.list_modules().await;
        link.send_message(Msg::ModulesLoaded { session, result });
    });

    if let Some(fetch) = effects.fields {
        fetch_fields(ctx, fetch);
    }
}

fn fetch_fields(ctx: &Context<TemplateEditorDialog>, fetch: FieldFetch) {
    let metadata = ctx.props().services.metadata.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = metadata.list_text_fields(&fetch.module_api).await;
        link.send_message(Msg::FieldsLoaded {
            ticket: fetch.ticket,
            result,
        });
    });
}

/// Looks `value` up in `options`, treating an empty value as "no selection".
fn pick(options: &[Choice], value: &str) -> Option<Choice> {
    if value.is_empty() {
        return None;
    }
    let choice = options
        .iter()
        .find(|option| option.value == value)
        .cloned()
        .unwrap_or_else(|| Choice::from_api(value));
    Some(choice)
}

pub fn update(
    dialog: &mut TemplateEditorDialog,
    ctx: &Context<TemplateEditorDialog>,
    msg: Msg,
) -> bool {
    let editor = &mut dialog.editor;
    match msg {
        Msg::ModulesLoaded { session, result } => editor.modules_loaded(session, result),
        Msg::FieldsLoaded { ticket, result } => editor.fields_loaded(ticket, result),
        Msg::SetName(name) => {
            editor.set_template_name(name);
            true
        }
        Msg::SelectModule(value) => {
            let module = pick(editor.modules(), &value);
            if let Some(fetch) = editor.select_module(module) {
                fetch_fields(ctx, fetch);
            }
            true
        }
        Msg::SelectPasswordField(value) => {
            let field = pick(editor.fields(), &value);
            editor.set_password_field(field);
            // Re-render even when refused so the select snaps back.
            true
        }
        Msg::SelectFolderField(value) => {
            let field = pick(editor.fields(), &value);
            editor.set_folder_field(field);
            true
        }
        Msg::AddRequirement => editor.add_requirement().is_some(),
        Msg::RemoveRequirement(id) => editor.remove_requirement(&id),
        Msg::EditRequirement(id, edit) => {
            editor.update_requirement(&id, edit);
            true
        }
        Msg::Submit => match editor.submit() {
            Ok(request) => {
                let service = ctx.props().services.templates.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = service.save(&request).await;
                    link.send_message(Msg::SaveFinished(result));
                });
                true
            }
            Err(SubmitBlocked::Invalid) => {
                log::debug!("template form has {} errors", editor.errors().len());
                true
            }
            Err(blocked) => {
                log::debug!("submit ignored: {:?}", blocked);
                false
            }
        },
        Msg::SaveFinished(result) => {
            if editor.submit_finished(result.map(|_| ())) {
                show_toast("Template saved.");
                ctx.props().on_saved.emit(());
            }
            true
        }
        Msg::DismissError => {
            editor.dismiss_submit_error();
            true
        }
        Msg::Close => {
            if editor.is_submitting() {
                return false;
            }
            editor.close();
            ctx.props().on_close.emit(());
            true
        }
    }
}
