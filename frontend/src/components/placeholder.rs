use yew::{html, Component, Context, Html, Properties};

use common::navigation::Page;

#[derive(Properties, PartialEq)]
pub struct PlaceholderProps {
    pub page: Page,
}

/// Pages that only show their heading for now.
pub struct PlaceholderPage;

impl Component for PlaceholderPage {
    type Message = ();
    type Properties = PlaceholderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PlaceholderPage
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let page = ctx.props().page;
        html! {
            <section class="card">
                <h2 class="card-title">{ page.label() }</h2>
                <p class="card-subtitle">{ page.description() }</p>
            </section>
        }
    }
}
