//! `[site]` section configuration.
//!
//! Site-wide defaults that every page's metadata inherits from.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://example.com"
//! name = "SSR SEO Demo"
//! tagline = "Server-Side Rendering & SEO"
//! description = "Learn how server-side rendering improves SEO."
//! keywords = ["ssr", "seo", "rust"]
//! default_image = "https://example.com/og-image.jpg"
//! locale = "en_US"
//! ```

use serde::{Deserialize, Serialize};

/// Site metadata used by resolvers, the sitemap and robots.txt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Absolute base URL, path used as prefix (e.g., "https://example.com/app").
    pub url: String,

    /// Site name, used in titles and `og:site_name`.
    pub name: String,

    /// Short tagline appended to the home page title.
    pub tagline: String,

    /// Home page description.
    pub description: String,

    /// Home page keywords.
    pub keywords: Vec<String>,

    /// Fallback social image when a page has none.
    pub default_image: String,

    /// Open Graph locale (e.g., "en_US").
    pub locale: String,

    /// Twitter handle of the site (e.g., "@example").
    pub twitter: Option<String>,

    /// Organization logo for structured data.
    pub logo: Option<String>,

    /// Profiles of the organization on other sites (`sameAs`).
    pub same_as: Vec<String>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:4000".into(),
            name: "SSR SEO Demo".into(),
            tagline: "Server-Side Rendering & SEO".into(),
            description: "Learn how server-side rendering improves SEO with pre-rendered \
                          metadata, Open Graph tags and structured data."
                .into(),
            keywords: vec![
                "ssr".into(),
                "seo".into(),
                "server-side rendering".into(),
                "open graph".into(),
            ],
            default_image: "http://localhost:4000/og-image.jpg".into(),
            locale: "en_US".into(),
            twitter: None,
            logo: None,
            same_as: Vec::new(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be a valid http(s) URL with a host
    /// - `default_image` must be absolute when set
    /// - `name` must not be empty
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error("site.name", "site name must not be empty");
        }

        check_absolute_url("site.url", &self.url, diag);

        if !self.default_image.is_empty() {
            check_absolute_url("site.default_image", &self.default_image, diag);
        }
    }
}

/// Record an error unless `value` is an absolute http(s) URL with a host.
fn check_absolute_url(
    field: &'static str,
    value: &str,
    diag: &mut crate::config::ConfigDiagnostics,
) {
    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            }
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {}", e),
                "use format like https://example.com",
            );
        }
    }
}
