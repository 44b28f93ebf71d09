use yew::html::Scope;
use yew::prelude::*;

use common::listing::{format_cell, table_body, TableBody, COLUMNS};
use common::model::template::TemplateRecord;
use common::navigation::Page;

use super::messages::Msg;
use super::state::TemplatesPage;
use crate::components::modal::Modal;
use crate::components::template_editor::TemplateEditorDialog;

pub fn view(page: &TemplatesPage, ctx: &Context<TemplatesPage>) -> Html {
    let props = ctx.props();
    let link = ctx.link();

    html! {
        <section class="card">
            <div class="card-header">
                <div>
                    <h2 class="card-title">{ Page::Templates.label() }</h2>
                    <p class="card-subtitle">{ Page::Templates.description() }</p>
                </div>
                <button
                    class="btn btn-primary"
                    disabled={!props.ready}
                    onclick={link.callback(|_| Msg::OpenCreate)}
                >
                    { "Add Template" }
                </button>
            </div>

            if let Some(error) = &props.load_error {
                <div class="alert alert-error" role="alert">{ error }</div>
            }

            { build_table(props.templates.as_deref().map(Vec::as_slice), props.ready, link) }

            <TemplateEditorDialog
                open={page.editor_open}
                record={page.edit_record.clone()}
                services={props.services.clone()}
                on_close={link.callback(|_| Msg::EditorClosed)}
                on_saved={link.callback(|_| Msg::Saved)}
            />

            { build_delete_dialog(page, link) }
        </section>
    }
}

fn build_table(
    templates: Option<&[TemplateRecord]>,
    ready: bool,
    link: &Scope<TemplatesPage>,
) -> Html {
    let rows = match table_body(templates) {
        TableBody::Rows(records) => records
            .iter()
            .map(|record| build_row(record, ready, link))
            .collect::<Html>(),
        TableBody::Empty { message, colspan } => html! {
            <tr>
                <td class="empty" colspan={colspan.to_string()}>{ message }</td>
            </tr>
        },
    };

    html! {
        <table class="table">
            <thead>
                <tr>
                    { for COLUMNS.iter().map(|column| html! { <th>{ column.label }</th> }) }
                    <th>{ "Actions" }</th>
                </tr>
            </thead>
            <tbody>{ rows }</tbody>
        </table>
    }
}

fn build_row(record: &TemplateRecord, ready: bool, link: &Scope<TemplatesPage>) -> Html {
    let edit = record.clone();
    let remove = record.clone();
    html! {
        <tr key={record.id.clone()}>
            { for COLUMNS.iter().map(|column| html! { <td>{ format_cell(record, column) }</td> }) }
            <td class="actions">
                <button
                    class="btn btn-link"
                    disabled={!ready}
                    onclick={link.callback(move |_| Msg::OpenEdit(edit.clone()))}
                >
                    { "Edit" }
                </button>
                <button
                    class="btn btn-link btn-danger"
                    disabled={!ready}
                    onclick={link.callback(move |_| Msg::RequestDelete(remove.clone()))}
                >
                    { "Delete" }
                </button>
            </td>
        </tr>
    }
}

fn build_delete_dialog(page: &TemplatesPage, link: &Scope<TemplatesPage>) -> Html {
    let dialog = &page.delete;
    let busy = dialog.is_busy();

    let actions = html! {
        <>
            <button
                class="btn"
                disabled={busy}
                onclick={link.callback(|_| Msg::DismissDelete)}
            >
                { "Cancel" }
            </button>
            <button
                class="btn btn-danger"
                disabled={busy}
                onclick={link.callback(|_| Msg::ConfirmDelete)}
            >
                { if busy { "Deleting..." } else { "Delete" } }
            </button>
        </>
    };

    html! {
        <Modal
            open={dialog.is_open()}
            title="Delete Template"
            on_dismiss={link.callback(|_| Msg::DismissDelete)}
            {actions}
        >
            <p>{ format!("Are you sure you want to delete \"{}\"?", dialog.target_name()) }</p>
            if let Some(error) = dialog.error() {
                <div class="alert alert-error" role="alert">{ error }</div>
            }
        </Modal>
    }
}
