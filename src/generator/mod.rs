//! Crawler-facing text artifacts.
//!
//! - **Sitemap**: Search engine indexing (`sitemap.xml`)
//! - **Robots**: Crawler policy (`robots.txt`)
//!
//! Both are rendered on demand from config and the user store; the server
//! answers with them directly and the CLI prints or writes them.

pub mod robots;
pub mod sitemap;

pub use robots::render_robots;
pub use sitemap::render_sitemap;

use std::borrow::Cow;

/// Strip indentation and line breaks from generated XML when `enabled`.
///
/// Text content is kept as-is; only leading and trailing whitespace of each
/// line is dropped.
pub fn minify_xml(content: &str, enabled: bool) -> Cow<'_, str> {
    if !enabled {
        return Cow::Borrowed(content);
    }
    Cow::Owned(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect(),
    )
}
