use yew::{classes, html, Callback, Component, Context, Html, Properties};

use common::navigation::{Page, APP_TITLE};

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active: Page,
    pub on_navigate: Callback<Page>,
}

pub struct Sidebar;

impl Component for Sidebar {
    type Message = ();
    type Properties = SidebarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Sidebar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <nav class="sidebar">
                <div class="sidebar-title">{ APP_TITLE }</div>
                <div class="sidebar-items">
                    { for Page::ALL.iter().map(|&page| {
                        let on_navigate = props.on_navigate.clone();
                        let active = (page == props.active).then_some("active");
                        html! {
                            <div
                                class={classes!("sidebar-item", active)}
                                onclick={Callback::from(move |_| on_navigate.emit(page))}
                            >
                                { page.label() }
                            </div>
                        }
                    }) }
                </div>
            </nav>
        }
    }
}
