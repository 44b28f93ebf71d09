use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::TemplatesPage;
use crate::components::template_editor::helpers::show_toast;

pub fn update(page: &mut TemplatesPage, ctx: &Context<TemplatesPage>, msg: Msg) -> bool {
    let props = ctx.props();
    match msg {
        Msg::OpenCreate => {
            if !props.ready || page.editor_open {
                return false;
            }
            page.edit_record = None;
            page.editor_open = true;
            true
        }
        Msg::OpenEdit(record) => {
            if !props.ready || page.editor_open {
                return false;
            }
            page.edit_record = Some(record);
            page.editor_open = true;
            true
        }
        Msg::EditorClosed => {
            page.editor_open = false;
            page.edit_record = None;
            true
        }
        Msg::Saved => {
            page.editor_open = false;
            page.edit_record = None;
            props.on_changed.emit(());
            true
        }
        Msg::RequestDelete(record) => {
            if !props.ready {
                return false;
            }
            page.delete.request(record);
            true
        }
        Msg::DismissDelete => page.delete.dismiss(),
        Msg::ConfirmDelete => {
            let Some(record_id) = page.delete.confirm() else {
                return false;
            };
            let service = props.services.templates.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = service.delete(&record_id).await;
                link.send_message(Msg::DeleteFinished(result));
            });
            true
        }
        Msg::DeleteFinished(result) => {
            if page.delete.finished(result) {
                show_toast("Template deleted.");
                props.on_changed.emit(());
            }
            true
        }
    }
}
