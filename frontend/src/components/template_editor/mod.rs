//! Template editor dialog: root module wiring the Yew `Component` to the
//! editor state machine in `common::editor`.
//!
//! The component is a thin shell. User intents and remote results become
//! messages, `update` forwards them to [`TemplateEditor`](common::editor::TemplateEditor)
//! and runs whatever remote call the editor hands back. The dialog is opened
//! and closed by its parent through the `open` prop.

use yew::prelude::*;

pub mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::TemplateEditorProps;
pub use state::TemplateEditorDialog;

impl Component for TemplateEditorDialog {
    type Message = Msg;
    type Properties = TemplateEditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut dialog = TemplateEditorDialog::new();
        if ctx.props().open {
            update::open(&mut dialog, ctx);
        }
        dialog
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        match (old_props.open, ctx.props().open) {
            (false, true) => update::open(self, ctx),
            (true, false) => self.editor.close(),
            _ => {}
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
