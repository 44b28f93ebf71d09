//! Navigation shell: sidebar, active page, host handshake and the template
//! collection shared with the templates page.

use std::rc::Rc;

use yew::platform::spawn_local;
use yew::{html, Component, Context, Html, Properties};

use common::config::WidgetConfig;
use common::error::StoreError;
use common::model::template::TemplateRecord;
use common::navigation::{Page, Shell};

use crate::components::placeholder::PlaceholderPage;
use crate::components::sidebar::Sidebar;
use crate::components::templates::TemplatesPage;
use crate::services::Services;
use crate::zoho;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<WidgetConfig>,
}

pub enum Msg {
    Initialized,
    Navigate(Page),
    Reload,
    TemplatesLoaded(Result<Vec<TemplateRecord>, StoreError>),
}

pub struct App {
    shell: Shell,
    services: Rc<Services>,
}

impl App {
    fn load_templates(&self, ctx: &Context<Self>) {
        let service = self.services.templates.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = service.list().await;
            link.send_message(Msg::TemplatesLoaded(result));
        });
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        zoho::init(ctx.link().callback(|_| Msg::Initialized));
        Self {
            shell: Shell::default(),
            services: Rc::new(Services::zoho(ctx.props().config.clone())),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Initialized => {
                if self.shell.mark_initialized() {
                    self.load_templates(ctx);
                }
                true
            }
            Msg::Navigate(page) => self.shell.navigate(page),
            Msg::Reload => {
                if self.shell.is_initialized() {
                    self.load_templates(ctx);
                }
                false
            }
            Msg::TemplatesLoaded(result) => {
                self.shell.templates_loaded(result);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let page = self.shell.page();

        let content = match page {
            Page::Templates => html! {
                <TemplatesPage
                    templates={self.shell.templates().map(|t| Rc::new(t.to_vec()))}
                    ready={self.shell.is_initialized()}
                    load_error={self.shell.load_error().map(str::to_string)}
                    services={self.services.clone()}
                    on_changed={link.callback(|_| Msg::Reload)}
                />
            },
            Page::Dashboard | Page::Admins => html! { <PlaceholderPage page={page} /> },
        };

        html! {
            <div class="layout">
                <Sidebar active={page} on_navigate={link.callback(Msg::Navigate)} />
                <main class="content">
                    { content }
                </main>
            </div>
        }
    }
}
