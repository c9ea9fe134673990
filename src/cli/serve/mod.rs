//! Preview server.
//!
//! Pages are rendered per request from the in-memory [`Site`], so every
//! request mounts its own quote selector. Static files are read from the
//! static directory. With `watch` enabled a background thread reloads the
//! site when content, icons or `folio.toml` change, and swaps it in
//! atomically.

mod lifecycle;
mod path;
mod response;
mod watch;

use crate::{
    config::{SiteConfig, cfg},
    core::{is_shutdown, register_server},
    embed::STYLE_CSS,
    log,
    site::{Page, Site},
    utils::mime::types::CSS,
};
use anyhow::Result;
use arc_swap::ArcSwapOption;
use crossbeam::channel;
use std::sync::{Arc, LazyLock};
use tiny_http::{Request, Server};

/// The site currently being served.
static SITE: LazyLock<ArcSwapOption<Site>> = LazyLock::new(ArcSwapOption::empty);

/// Load the site, bind the server and serve until Ctrl+C.
pub fn serve_site(config: Arc<SiteConfig>) -> Result<()> {
    let (site, report) = Site::load(Arc::clone(&config))?;
    report.print();
    log!("validate"; "{}", report);
    if report.has_errors() {
        crate::warn!("serve"; "serving anyway, affected sections may fail to render");
    }
    SITE.store(Some(Arc::new(site)));

    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);

    let (shutdown_tx, shutdown_rx) = channel::unbounded::<()>();
    register_server(Arc::clone(&server), shutdown_tx);

    log!("serve"; "http://{}", addr);

    let watcher = lifecycle::spawn_watcher(&config, shutdown_rx);
    run_request_loop(&server)?;
    lifecycle::wait_for_shutdown(watcher);
    Ok(())
}

fn run_request_loop(server: &Server) -> Result<()> {
    // A small pool keeps a slow render from blocking static file requests.
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .thread_name(|i| format!("folio-serve-{i}"))
        .build()?;

    for request in server.incoming_requests() {
        pool.spawn(move || {
            if let Err(e) = handle_request(request) {
                log!("serve"; "request error: {e}");
            }
        });
    }
    Ok(())
}

/// Handle a single HTTP request
fn handle_request(request: Request) -> Result<()> {
    if is_shutdown() {
        return response::respond_unavailable(request);
    }
    let Some(site) = SITE.load_full() else {
        return response::respond_unavailable(request);
    };

    let Some(url) = path::request_path(request.url()) else {
        return response::respond_not_found(request);
    };

    if let Some(page) = Page::from_url(&url) {
        return match site.render(page, &mut rand::rng()) {
            Ok(html) => response::respond_html(request, html),
            Err(e) => response::respond_render_error(request, &e.into()),
        };
    }

    if url == "/style.css" {
        return response::respond_embedded(request, STYLE_CSS, CSS);
    }

    if let Some(path) = path::resolve_path(&url, site.static_dir()) {
        return response::respond_file(request, &path);
    }

    response::respond_not_found(request)
}

/// Reload config (when it changed) and content, then publish the new site.
fn reload_site(config_changed: bool) -> Result<crate::content::ValidationReport> {
    if config_changed && crate::config::reload_config()? {
        crate::debug!("watch"; "folio.toml reloaded");
    }
    let (site, report) = Site::load(cfg())?;
    SITE.store(Some(Arc::new(site)));
    Ok(report)
}
