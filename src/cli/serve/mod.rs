//! HTTP server for the demo site.
//!
//! | Path           | Response                                  |
//! |----------------|-------------------------------------------|
//! | `/sitemap.xml` | sitemap, when `seo.sitemap.enable`        |
//! | `/robots.txt`  | robots policy, when `seo.robots.enable`   |
//! | anything else  | server-rendered page (404 when not found) |
//!
//! Requests run on a rayon pool; each one drives its own navigation to
//! completion on a shared tokio runtime.

mod lifecycle;
mod response;

use crate::{
    config::{SiteConfig, cfg},
    core::UrlPath,
    debug,
    generator::{render_robots, render_sitemap},
    log,
    render::render_page,
    store::{EntityStore, MockUserStore},
    utils::{date, mime::types},
};
use anyhow::{Context, Result};
use crossbeam::channel;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use tiny_http::{Method, Request, Server};
use tokio::runtime::Runtime;

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Arc<Server>,
    shutdown_rx: channel::Receiver<()>,
}

/// Bind the HTTP server without starting the request loop
pub fn bind_server() -> Result<BoundServer> {
    let config = cfg();
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);

    let (shutdown_tx, shutdown_rx) = channel::unbounded::<()>();
    lifecycle::register_server_for_shutdown(Arc::clone(&server), shutdown_tx);

    log!("serve"; "http://{}", addr);

    Ok(BoundServer {
        server,
        shutdown_rx,
    })
}

/// Bind and serve until Ctrl+C.
pub fn serve_site() -> Result<()> {
    bind_server()?.run()
}

/// Per-server state shared by every request.
struct ServeContext {
    config: Arc<SiteConfig>,
    store: MockUserStore,
    runtime: Runtime,
    in_flight: AtomicUsize,
}

impl BoundServer {
    /// Start the request loop (blocking).
    pub fn run(self) -> Result<()> {
        let config = cfg();

        let latency = Duration::from_millis(config.serve.latency_ms);
        if !latency.is_zero() {
            log!("serve"; "simulating {}ms lookup latency", config.serve.latency_ms);
        }

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_time()
            .build()
            .context("Failed to create tokio runtime")?;

        let ctx = Arc::new(ServeContext {
            store: MockUserStore::default().with_latency(latency),
            config,
            runtime,
            in_flight: AtomicUsize::new(0),
        });

        run_request_loop(&self.server, &ctx)?;
        lifecycle::wait_for_shutdown(&self.shutdown_rx, &ctx.in_flight);
        Ok(())
    }
}

fn run_request_loop(server: &Server, ctx: &Arc<ServeContext>) -> Result<()> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(ctx.config.serve.workers)
        .build()
        .context("Failed to create request thread pool")?;

    for request in server.incoming_requests() {
        let ctx = Arc::clone(ctx);
        ctx.in_flight.fetch_add(1, Ordering::SeqCst);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &ctx) {
                log!("serve"; "request error: {e}");
            }
            ctx.in_flight.fetch_sub(1, Ordering::SeqCst);
        });
    }
    Ok(())
}

/// Handle a single HTTP request
fn handle_request(request: Request, ctx: &ServeContext) -> Result<()> {
    if crate::core::is_shutdown() {
        return response::respond_unavailable(request);
    }

    if !matches!(request.method(), Method::Get | Method::Head) {
        return response::respond_method_not_allowed(request);
    }

    let start = Instant::now();
    let config = &ctx.config;
    let url = request.url().to_string();
    let path = UrlPath::from_browser(&url);
    let sitemap_path = UrlPath::from_decoded(&config.seo.sitemap.path);

    let status = if config.seo.sitemap.enable && path == sitemap_path {
        let body = ctx.runtime.block_on(sitemap_body(config, &ctx.store));
        response::respond(request, 200, types::XML, body)?
    } else if config.seo.robots.enable && path.as_str() == "/robots.txt" {
        response::respond(request, 200, types::PLAIN, render_robots(config))?
    } else {
        let page = ctx.runtime.block_on(render_page(&url, config, &ctx.store));
        response::respond(request, page.status, types::HTML, page.html)?
    };

    debug!("request"; "{} {} in {:?}", status, url, start.elapsed());
    Ok(())
}

/// Sitemap of every user the store knows, stamped with today's date.
async fn sitemap_body<S: EntityStore>(config: &SiteConfig, store: &S) -> String {
    let users = store.list().await;
    render_sitemap(config, &users, &date::today())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[tokio::test]
    async fn test_sitemap_body_lists_store_users() {
        let config = test_parse_config("");
        let store = MockUserStore::default();
        let xml = sitemap_body(&config, &store).await;

        assert_eq!(xml.matches("<url>").count(), 3 + store.users().len());
        assert!(xml.contains("<loc>https://example.com/users/1</loc>"));
        assert!(xml.contains(&format!("<lastmod>{}</lastmod>", date::today())));
    }
}
