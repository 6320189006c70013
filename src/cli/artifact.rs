//! `sitemap` and `robots` commands.

use crate::{
    cli::OutputArgs,
    config::SiteConfig,
    generator::{render_robots, render_sitemap},
    log,
    store::MockUserStore,
    utils::date,
};
use anyhow::{Context, Result, bail};
use std::fs;

/// Print or write the sitemap. `lastmod` defaults to today (UTC).
pub fn generate_sitemap(config: &SiteConfig, output: &OutputArgs, lastmod: Option<&str>) -> Result<()> {
    let lastmod = match lastmod {
        Some(raw) => match date::parse_date(raw) {
            Some(dt) => dt.format(date::W3C_DATE).to_string(),
            None => bail!("invalid --lastmod '{raw}', expected YYYY-MM-DD"),
        },
        None => date::today(),
    };

    let store = MockUserStore::default();
    let xml = render_sitemap(config, store.users(), &lastmod);
    emit(output, &xml, "sitemap")
}

/// Print or write the robots policy.
pub fn generate_robots(config: &SiteConfig, output: &OutputArgs) -> Result<()> {
    emit(output, &render_robots(config), "robots")
}

fn emit(output: &OutputArgs, content: &str, what: &str) -> Result<()> {
    let Some(path) = &output.output else {
        print!("{content}");
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write {what} to {}", path.display()))?;

    log!(what; "{}", path.display());
    Ok(())
}
