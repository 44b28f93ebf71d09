//! Templates page: the template table, the add/edit entry points and the
//! delete confirmation dialog.
//!
//! The page owns no template data. The collection is loaded by the app shell
//! and handed down; after a save or a delete the page asks the shell to reload
//! through `on_changed`.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::TemplatesProps;
pub use state::TemplatesPage;

impl Component for TemplatesPage {
    type Message = Msg;
    type Properties = TemplatesProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TemplatesPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
