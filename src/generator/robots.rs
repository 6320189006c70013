//! Robots policy generation.
//!
//! ```text
//! User-agent: *
//! Allow: /
//! Disallow: /admin/
//! Disallow: /api/
//!
//! Sitemap: https://example.com/sitemap.xml
//! ```

use crate::config::SiteConfig;

/// Render `robots.txt`: one `Disallow:` per configured prefix, and a
/// `Sitemap:` line when the sitemap is enabled.
pub fn render_robots(config: &SiteConfig) -> String {
    let mut txt = String::from("User-agent: *\nAllow: /\n");

    for prefix in &config.seo.disallow {
        txt.push_str("Disallow: ");
        txt.push_str(prefix);
        txt.push('\n');
    }

    if config.seo.sitemap.enable {
        txt.push_str("\nSitemap: ");
        txt.push_str(&config.sitemap_url());
        txt.push('\n');
    }
    txt
}
