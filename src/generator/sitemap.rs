//! Sitemap generation.
//!
//! Lists every statically known route plus one entry per user profile.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>daily</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::SiteConfig,
    generator::minify_xml,
    page::{STATIC_ROUTES, USERS_PATH},
    store::User,
};
use std::borrow::Cow;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const PROFILE_CHANGEFREQ: ChangeFreq = ChangeFreq::Weekly;
const PROFILE_PRIORITY: f32 = 0.8;

/// How often a page is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// Render the sitemap for `users`, stamping every entry with `lastmod`
/// (`YYYY-MM-DD`). Minified when `seo.minify` is set.
pub fn render_sitemap(config: &SiteConfig, users: &[User], lastmod: &str) -> String {
    let xml = Sitemap::build(config, users, lastmod).into_xml();
    minify_xml(&xml, config.seo.minify).into_owned()
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
    changefreq: ChangeFreq,
    priority: f32,
}

impl Sitemap {
    fn build(config: &SiteConfig, users: &[User], lastmod: &str) -> Self {
        let statics = STATIC_ROUTES.iter().map(|route| UrlEntry {
            loc: config.resolve_url(route.path),
            lastmod: Some(lastmod.to_string()),
            changefreq: route.changefreq,
            priority: route.priority,
        });

        let include_profiles = config.seo.sitemap.include_profiles;
        let profiles = users
            .iter()
            .filter(|_| include_profiles)
            .map(|user| UrlEntry {
                loc: config.resolve_url(&format!("{USERS_PATH}/{}", user.id)),
                lastmod: Some(lastmod.to_string()),
                changefreq: PROFILE_CHANGEFREQ,
                priority: PROFILE_PRIORITY,
            });

        Self {
            urls: statics.chain(profiles).collect(),
        }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.lastmod {
                xml.push_str("    <lastmod>");
                xml.push_str(&lastmod);
                xml.push_str("</lastmod>\n");
            }
            xml.push_str("    <changefreq>");
            xml.push_str(entry.changefreq.as_str());
            xml.push_str("</changefreq>\n");
            xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::store::MockUserStore;

    fn entry(loc: &str) -> UrlEntry {
        UrlEntry {
            loc: loc.to_string(),
            lastmod: Some("2025-01-01".to_string()),
            changefreq: ChangeFreq::Daily,
            priority: 1.0,
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_sitemap_empty() {
        let xml = Sitemap { urls: vec![] }.into_xml();

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_entry_layout() {
        let xml = Sitemap {
            urls: vec![entry("https://example.com")],
        }
        .into_xml();

        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n  \
             <url>\n    \
             <loc>https://example.com</loc>\n    \
             <lastmod>2025-01-01</lastmod>\n    \
             <changefreq>daily</changefreq>\n    \
             <priority>1.0</priority>\n  \
             </url>\n\
             </urlset>\n"
        );
    }

    #[test]
    fn test_sitemap_escapes_special_chars() {
        let xml = Sitemap {
            urls: vec![entry("https://example.com/search?q=a&b=c")],
        }
        .into_xml();

        assert!(xml.contains("<loc>https://example.com/search?q=a&amp;b=c</loc>"));
    }

    #[test]
    fn test_static_routes_and_profiles() {
        let config = test_parse_config("");
        let store = MockUserStore::default();
        let xml = render_sitemap(&config, store.users(), "2025-06-01");

        assert!(xml.contains("<loc>https://example.com</loc>"));
        assert!(xml.contains("<loc>https://example.com/users</loc>"));
        assert!(xml.contains("<loc>https://example.com/about</loc>"));
        assert!(xml.contains("<loc>https://example.com/users/5</loc>"));
        assert!(xml.contains("<priority>0.9</priority>"));
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
        assert_eq!(xml.matches("<url>").count(), 3 + store.users().len());
        assert_eq!(xml.matches("<lastmod>2025-06-01</lastmod>").count(), 8);
    }

    #[test]
    fn test_profiles_can_be_excluded() {
        let config =
            test_parse_config("[seo.sitemap]\ninclude_profiles = false");
        let xml = render_sitemap(&config, MockUserStore::default().users(), "2025-06-01");

        assert_eq!(xml.matches("<url>").count(), STATIC_ROUTES.len());
        assert!(!xml.contains("/users/1<"));
    }

    #[test]
    fn test_minified() {
        let config = test_parse_config("[seo]\nminify = true");
        let xml = render_sitemap(&config, &[], "2025-06-01");

        assert!(!xml.contains('\n'));
        assert!(xml.contains("<url><loc>https://example.com</loc><lastmod>"));
    }

    #[test]
    fn test_changefreq_strings() {
        assert_eq!(ChangeFreq::Daily.as_str(), "daily");
        assert_eq!(ChangeFreq::Never.as_str(), "never");
    }
}
