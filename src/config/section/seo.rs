//! `[seo]` section configuration (sitemap, robots policy).
//!
//! # Example
//!
//! ```toml
//! [seo]
//! minify = false
//! disallow = ["/admin/", "/api/"]
//!
//! [seo.sitemap]
//! enable = true
//! path = "sitemap.xml"
//! include_profiles = true
//!
//! [seo.robots]
//! enable = true
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Serve `/sitemap.xml`.
    pub enable: bool,
    /// Path of the sitemap relative to the site URL.
    pub path: String,
    /// List every user profile, not only the static routes.
    pub include_profiles: bool,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".into(),
            include_profiles: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotsConfig {
    /// Serve `/robots.txt`.
    pub enable: bool,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self { enable: true }
    }
}

/// SEO artifact settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    /// Minify generated XML.
    pub minify: bool,

    /// Path prefixes crawlers must not visit.
    pub disallow: Vec<String>,

    /// Sitemap generation settings
    pub sitemap: SitemapConfig,

    /// Robots policy settings
    pub robots: RobotsConfig,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            minify: false,
            disallow: vec!["/admin/".into(), "/api/".into()],
            sitemap: SitemapConfig::default(),
            robots: RobotsConfig::default(),
        }
    }
}

impl SeoConfig {
    /// Validate SEO configuration.
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        for prefix in &self.disallow {
            if !prefix.starts_with('/') {
                diag.warn(
                    "seo.disallow",
                    format!("'{prefix}' does not start with '/', crawlers may ignore it"),
                );
            }
        }

        let path = self.sitemap.path.trim_matches('/');
        if path.is_empty() || path.contains(['?', '#', ' ']) {
            diag.error_with_hint(
                "seo.sitemap.path",
                format!("invalid sitemap path '{}'", self.sitemap.path),
                "use a plain file name such as \"sitemap.xml\"",
            );
        }
    }
}
