//! Local server for the widget bundle.
//!
//! Serves the frontend build embedded at compile time. Unknown paths fall back
//! to `index.html` so the widget can be opened on any route.

mod config;

use std::thread;
use std::time::Duration;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info, warn};
use mime_guess::from_path;

use crate::config::HostConfig;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

/// Maps a request path to the bundle file to serve.
fn asset_path(request_path: &str) -> &str {
    let path = request_path.trim_start_matches('/');
    if path.is_empty() { INDEX } else { path }
}

/// Embedded file answering `request_path` and its content type. Unknown
/// paths get `index.html`; `None` when no bundle is embedded at all.
fn resolve<'a>(dir: &'a Dir<'a>, request_path: &str) -> Option<(&'a [u8], String)> {
    let file_path = asset_path(request_path);
    if let Some(file) = dir.get_file(file_path) {
        let mime = from_path(file_path).first_or_octet_stream();
        return Some((file.contents(), mime.to_string()));
    }
    dir.get_file(INDEX)
        .map(|index| (index.contents(), "text/html; charset=utf-8".to_string()))
}

async fn serve_widget(req: HttpRequest) -> HttpResponse {
    match resolve(&STATIC_DIR, req.path()) {
        Some((contents, content_type)) => HttpResponse::Ok()
            .content_type(content_type)
            .body(contents.to_vec()),
        None => {
            warn!("no frontend bundle embedded; build the frontend first");
            HttpResponse::NotFound().body("Not Found")
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = match HostConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("could not open a browser: {}", e);
            }
        });
    }

    info!("Widget served at {}", url);

    HttpServer::new(|| App::new().default_service(web::route().to(serve_widget)))
        .bind((config.host, config.port))?
        .run()
        .await
}
