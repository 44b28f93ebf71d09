use std::rc::Rc;

use crate::app::{App, AppProps};

mod app;
mod components;
mod logging;
mod services;
mod settings;
mod zoho;

fn main() {
    logging::init();
    wasm_bindgen_futures::spawn_local(async {
        let config = settings::load().await;
        yew::Renderer::<App>::with_props(AppProps {
            config: Rc::new(config),
        })
        .render();
    });
}
