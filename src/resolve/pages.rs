//! Metadata for each page type.
//!
//! Pure functions of site config and page data. Each result has site
//! defaults (image, site name, locale) filled in.

use crate::config::SiteConfig;
use crate::page::{PageMetadata, PageType, USERS_PATH};
use crate::store::User;
use crate::utils::plural::plural_count;

const ABOUT_DESCRIPTION: &str = "How this demo renders pages on the server so search engines \
                                 and social previews see complete metadata on first load.";
const ABOUT_KEYWORDS: [&str; 5] = [
    "about",
    "server-side rendering",
    "seo",
    "open graph",
    "structured data",
];

const NOT_FOUND_DESCRIPTION: &str =
    "The page you are looking for does not exist or has been moved.";

pub fn home(config: &SiteConfig) -> PageMetadata {
    let site = &config.site;
    PageMetadata::new(format!("{} - {}", site.name, site.tagline))
        .description(site.description.as_str())
        .keywords(site.keywords.iter().map(String::as_str))
        .url(config.resolve_url(""))
        .page_type(PageType::Website)
        .with_site_defaults(config)
}

/// Directory page listing `count` users.
pub fn user_list(config: &SiteConfig, count: usize) -> PageMetadata {
    let site = &config.site;
    PageMetadata::new(format!("All Users - {}", site.name))
        .description(format!(
            "Browse {} in the {} directory and open any profile for details.",
            plural_count(count, "user profile"),
            site.name
        ))
        .keywords(["users", "directory", "profiles", site.name.as_str()])
        .url(config.resolve_url(USERS_PATH))
        .page_type(PageType::Website)
        .with_site_defaults(config)
}

/// Profile page of one user.
pub fn user_detail(config: &SiteConfig, user: &User) -> PageMetadata {
    let site = &config.site;

    let title = match user.job_title() {
        Some(job) => format!("{} - {} | {}", user.name, job, site.name),
        None => format!("{} | {}", user.name, site.name),
    };

    let keywords = [
        Some(user.name.as_str()),
        user.job_title(),
        user.company(),
        user.location(),
    ]
    .into_iter()
    .flatten()
    .chain(user.skills.iter().map(|s| s.trim()))
    .filter(|s| !s.is_empty());

    let mut meta = PageMetadata::new(title)
        .description(profile_description(config, user))
        .keywords(keywords)
        .url(config.resolve_url(&format!("{USERS_PATH}/{}", user.id)))
        .page_type(PageType::Profile);

    if let Some(avatar) = user.avatar() {
        meta = meta.image(avatar);
    }
    meta.with_site_defaults(config)
}

/// The bio, or a sentence built from whichever profile fields are filled in.
fn profile_description(config: &SiteConfig, user: &User) -> String {
    if let Some(bio) = user.bio() {
        return bio.to_string();
    }

    let mut text = user.name.clone();
    if let Some(job) = user.job_title() {
        text.push_str(" - ");
        text.push_str(job);
    }
    if let Some(company) = user.company() {
        text.push_str(" at ");
        text.push_str(company);
    }
    text.push_str(". View profile on ");
    text.push_str(&config.site.name);
    text.push('.');
    text
}

pub fn about(config: &SiteConfig) -> PageMetadata {
    PageMetadata::new(format!("About - {}", config.site.name))
        .description(ABOUT_DESCRIPTION)
        .keywords(ABOUT_KEYWORDS)
        .url(config.resolve_url("about"))
        .page_type(PageType::Website)
        .with_site_defaults(config)
}

/// Generic metadata for a missing page at `path`. Never indexed.
///
/// `path` is the site-relative, percent-encoded request path.
pub fn not_found(config: &SiteConfig, path: &str) -> PageMetadata {
    PageMetadata::new(format!("Page Not Found - {}", config.site.name))
        .description(NOT_FOUND_DESCRIPTION)
        .url(config.resolve_url(path))
        .page_type(PageType::Website)
        .suppress_indexing(true)
        .with_site_defaults(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn config() -> SiteConfig {
        test_parse_config(
            "tagline = \"SSR & SEO\"\n\
             description = \"Demo site\"\n\
             keywords = [\"ssr\", \"seo\"]\n\
             default_image = \"https://example.com/og.jpg\"",
        )
    }

    fn user() -> User {
        User {
            id: 4,
            name: "David Kim".into(),
            username: "dkim".into(),
            email: "dkim@example.com".into(),
            job_title: Some("Data Scientist".into()),
            company: Some("DataWorks".into()),
            location: Some("".into()),
            bio: None,
            avatar: None,
            website: None,
            skills: vec!["Python".into(), " ".into()],
            social: Vec::new(),
            joined: "2024-01-15".into(),
        }
    }

    #[test]
    fn test_home() {
        let meta = home(&config());
        assert_eq!(meta.title, "Test Site - SSR & SEO");
        assert_eq!(meta.description.as_deref(), Some("Demo site"));
        assert_eq!(meta.keywords, ["ssr", "seo"]);
        assert_eq!(meta.url.as_deref(), Some("https://example.com"));
        assert_eq!(meta.image.as_deref(), Some("https://example.com/og.jpg"));
        assert_eq!(meta.page_type, PageType::Website);
    }

    #[test]
    fn test_user_list() {
        let meta = user_list(&config(), 5);
        assert_eq!(meta.title, "All Users - Test Site");
        assert!(meta.description.unwrap().contains("5 user profiles"));
        assert_eq!(meta.url.as_deref(), Some("https://example.com/users"));
    }

    #[test]
    fn test_user_detail_fallback_description() {
        let meta = user_detail(&config(), &user());
        assert_eq!(meta.title, "David Kim - Data Scientist | Test Site");
        assert_eq!(
            meta.description.as_deref(),
            Some("David Kim - Data Scientist at DataWorks. View profile on Test Site.")
        );
        assert_eq!(meta.keywords, ["David Kim", "Data Scientist", "DataWorks", "Python"]);
        assert_eq!(meta.image.as_deref(), Some("https://example.com/og.jpg"));
        assert_eq!(meta.url.as_deref(), Some("https://example.com/users/4"));
        assert_eq!(meta.page_type, PageType::Profile);
    }

    #[test]
    fn test_user_detail_sparse_profile() {
        let sparse = User {
            job_title: None,
            company: None,
            skills: Vec::new(),
            ..user()
        };
        let meta = user_detail(&config(), &sparse);
        assert_eq!(meta.title, "David Kim | Test Site");
        assert_eq!(
            meta.description.as_deref(),
            Some("David Kim. View profile on Test Site.")
        );
        assert_eq!(meta.keywords, ["David Kim"]);
    }

    #[test]
    fn test_user_detail_bio_and_avatar() {
        let full = User {
            bio: Some("Writes code.".into()),
            avatar: Some("https://cdn.example.com/d.png".into()),
            ..user()
        };
        let meta = user_detail(&config(), &full);
        assert_eq!(meta.description.as_deref(), Some("Writes code."));
        assert_eq!(meta.image.as_deref(), Some("https://cdn.example.com/d.png"));

        let padded = User {
            bio: Some("  Writes code.  ".into()),
            ..user()
        };
        let meta = user_detail(&config(), &padded);
        assert_eq!(meta.description.as_deref(), Some("  Writes code.  "));
    }

    #[test]
    fn test_about() {
        let meta = about(&config());
        assert_eq!(meta.title, "About - Test Site");
        assert_eq!(meta.description.as_deref(), Some(ABOUT_DESCRIPTION));
        assert_eq!(meta.keywords.len(), ABOUT_KEYWORDS.len());
        assert_eq!(meta.url.as_deref(), Some("https://example.com/about"));
    }

    #[test]
    fn test_not_found() {
        let meta = not_found(&config(), "/users/9999");
        assert_eq!(meta.title, "Page Not Found - Test Site");
        assert!(meta.suppress_indexing);
        assert_eq!(meta.url.as_deref(), Some("https://example.com/users/9999"));
        assert_eq!(meta.site_name.as_deref(), Some("Test Site"));
    }
}
