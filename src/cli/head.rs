//! `head` command: print what a route renders.

use crate::{
    config::SiteConfig,
    render::{RenderedPage, render_page},
    store::EntityStore,
};
use anyhow::{Context, Result};

/// Print the managed head of `path`, or the whole document with `full`.
pub fn print_head<S: EntityStore>(path: &str, full: bool, config: &SiteConfig, store: &S) -> Result<()> {
    let page = render_route(path, config, store)?;
    if full {
        print!("{}", page.html);
    } else {
        println!("{}", page.head);
    }
    Ok(())
}

/// Navigate to `path` on a single-threaded runtime.
pub fn render_route<S: EntityStore>(path: &str, config: &SiteConfig, store: &S) -> Result<RenderedPage> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to create tokio runtime")?;
    Ok(runtime.block_on(render_page(path, config, store)))
}
