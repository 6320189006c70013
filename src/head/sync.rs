//! Reconciles [`PageMetadata`] into a [`HeadTagSet`].

use super::tags::{HeadTagSet, MetaAttr, TagKey};
use crate::page::PageMetadata;
use crate::seo::og::{
    MANAGED_NAME_PREFIXES, MANAGED_NAMES, MANAGED_PROPERTY_PREFIXES, OG_IMAGE_HEIGHT,
    OG_IMAGE_WIDTH, ROBOTS_INDEX, ROBOTS_NOINDEX, TWITTER_CARD,
};

/// Writes page metadata into the head it borrows.
///
/// Every operation is total. Applying the same metadata twice leaves the
/// head exactly as applying it once.
pub struct TagSynchronizer<'a> {
    head: &'a mut HeadTagSet,
}

impl<'a> TagSynchronizer<'a> {
    pub fn new(head: &'a mut HeadTagSet) -> Self {
        Self { head }
    }

    // ========================================================================
    // primitive setters
    // ========================================================================

    pub fn set_title(&mut self, title: &str) {
        self.head.set_title(title);
    }

    pub fn set_description(&mut self, description: &str) {
        self.name("description", description);
    }

    /// `name=keywords`, joined with `", "`. An empty list writes empty content.
    pub fn set_keywords<S: AsRef<str>>(&mut self, keywords: &[S]) {
        let joined = keywords
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(", ");
        self.name("keywords", &joined);
    }

    /// Replace the canonical link; never leaves more than one.
    pub fn set_canonical_url(&mut self, url: &str) {
        self.head.remove_link("canonical");
        self.head.upsert_link("canonical", url);
    }

    pub fn set_robots(&mut self, index: bool) {
        self.name("robots", if index { ROBOTS_INDEX } else { ROBOTS_NOINDEX });
    }

    pub fn set_author(&mut self, author: &str) {
        self.name("author", author);
    }

    fn name(&mut self, key: &str, content: &str) {
        self.head.upsert_meta_tag(MetaAttr::Name, key, content);
    }

    fn property(&mut self, key: &str, content: &str) {
        self.head.upsert_meta_tag(MetaAttr::Property, key, content);
    }

    // ========================================================================
    // composite operations
    // ========================================================================

    /// Apply a page's metadata.
    ///
    /// Open Graph and Twitter values missing from `meta` are written as empty
    /// strings. Description, keywords, canonical link, `og:site_name`,
    /// `og:locale` and `twitter:site` are removed when absent. Article tags
    /// are only written for article pages and are otherwise left untouched.
    pub fn apply_page_metadata(&mut self, meta: &PageMetadata) {
        let description = meta.description.as_deref().unwrap_or_default();
        let image = meta.image.as_deref().unwrap_or_default();
        let url = meta.url.as_deref().unwrap_or_default();

        self.set_title(&meta.title);

        match &meta.description {
            Some(description) => self.set_description(description),
            None => self.head.remove_meta_tag(MetaAttr::Name, "description"),
        }

        if meta.keywords.is_empty() {
            self.head.remove_meta_tag(MetaAttr::Name, "keywords");
        } else {
            self.set_keywords(meta.keywords.as_slice());
        }

        match &meta.url {
            Some(url) => self.set_canonical_url(url),
            None => self.head.remove_link("canonical"),
        }

        self.set_robots(!meta.suppress_indexing);

        // Open Graph
        self.property("og:title", &meta.title);
        self.property("og:description", description);
        self.property("og:image", image);
        self.property("og:image:width", OG_IMAGE_WIDTH);
        self.property("og:image:height", OG_IMAGE_HEIGHT);
        self.property("og:url", url);
        self.property("og:type", meta.page_type.as_str());
        self.optional_property("og:site_name", meta.site_name.as_deref());
        self.optional_property("og:locale", meta.locale.as_deref());

        // Twitter
        self.name("twitter:card", TWITTER_CARD);
        self.name("twitter:title", &meta.title);
        self.name("twitter:description", description);
        self.name("twitter:image", image);
        match &meta.twitter_site {
            Some(handle) => self.name("twitter:site", handle),
            None => self.head.remove_meta_tag(MetaAttr::Name, "twitter:site"),
        }

        if meta.is_article() {
            if let Some(published) = &meta.published_at {
                self.property("article:published_time", published);
            }
            if let Some(modified) = &meta.modified_at {
                self.property("article:modified_time", modified);
            }
            if let Some(author) = &meta.author {
                self.set_author(author);
            }
        }
    }

    fn optional_property(&mut self, key: &str, value: Option<&str>) {
        match value {
            Some(value) => self.property(key, value),
            None => self.head.remove_meta_tag(MetaAttr::Property, key),
        }
    }

    /// Remove every managed tag. The title stays.
    pub fn clear_all_tags(&mut self) {
        self.head.retain(|key| !is_managed(key));
    }
}

fn is_managed(key: &TagKey) -> bool {
    match key {
        TagKey::Name(name) => {
            MANAGED_NAMES.contains(&name.as_str())
                || MANAGED_NAME_PREFIXES.iter().any(|p| name.starts_with(p))
        }
        TagKey::Property(prop) => MANAGED_PROPERTY_PREFIXES
            .iter()
            .any(|p| prop.starts_with(p)),
        TagKey::Link(rel) => rel == "canonical",
        TagKey::Script(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageType;

    fn website_meta() -> PageMetadata {
        PageMetadata {
            site_name: Some("Test Site".into()),
            locale: Some("en_US".into()),
            ..PageMetadata::new("Test Title")
                .description("Test Description")
                .image("https://example.com/image.jpg")
                .url("https://example.com/page")
                .page_type(PageType::Website)
        }
    }

    fn apply(head: &mut HeadTagSet, meta: &PageMetadata) {
        TagSynchronizer::new(head).apply_page_metadata(meta);
    }

    fn canonical_count(head: &HeadTagSet) -> usize {
        head.iter()
            .filter(|t| t.key == TagKey::link("canonical"))
            .count()
    }

    #[test]
    fn test_website_scenario() {
        let mut head = HeadTagSet::new();
        apply(&mut head, &website_meta());

        let prop = |k: &str| head.get(&TagKey::property(k));
        assert_eq!(head.title(), Some("Test Title"));
        assert_eq!(prop("og:title"), Some("Test Title"));
        assert_eq!(prop("og:image:width"), Some("1200"));
        assert_eq!(prop("og:image:height"), Some("630"));
        assert_eq!(prop("og:site_name"), Some("Test Site"));
        assert_eq!(prop("og:locale"), Some("en_US"));
        assert_eq!(prop("og:type"), Some("website"));
        assert_eq!(
            head.get(&TagKey::name("twitter:card")),
            Some("summary_large_image")
        );
        assert_eq!(
            head.get(&TagKey::link("canonical")),
            Some("https://example.com/page")
        );
        assert_eq!(head.get(&TagKey::name("robots")), Some("index,follow"));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let meta = website_meta();
        let mut once = HeadTagSet::new();
        apply(&mut once, &meta);

        let mut twice = HeadTagSet::new();
        apply(&mut twice, &meta);
        apply(&mut twice, &meta);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_canonical_stays_unique() {
        let mut head = HeadTagSet::new();
        let metas = [
            website_meta(),
            PageMetadata::new("No url"),
            website_meta().url("https://example.com/other"),
            website_meta(),
        ];
        for meta in &metas {
            apply(&mut head, meta);
            assert!(canonical_count(&head) <= 1);
        }

        let mut sync = TagSynchronizer::new(&mut head);
        sync.set_canonical_url("https://example.com/a");
        sync.set_canonical_url("https://example.com/b");
        assert_eq!(canonical_count(&head), 1);
        assert_eq!(
            head.get(&TagKey::link("canonical")),
            Some("https://example.com/b")
        );
    }

    #[test]
    fn test_robots_always_present() {
        for suppress in [false, true] {
            let mut head = HeadTagSet::new();
            apply(&mut head, &PageMetadata::new("T").suppress_indexing(suppress));
            let expected = if suppress { "noindex,nofollow" } else { "index,follow" };
            assert_eq!(head.get(&TagKey::name("robots")), Some(expected));
        }
    }

    #[test]
    fn test_set_keywords_joins() {
        let mut head = HeadTagSet::new();
        TagSynchronizer::new(&mut head).set_keywords(&["a", "b", "c"]);
        assert_eq!(head.get(&TagKey::name("keywords")), Some("a, b, c"));

        TagSynchronizer::new(&mut head).set_keywords::<&str>(&[]);
        assert_eq!(head.get(&TagKey::name("keywords")), Some(""));
    }

    #[test]
    fn test_missing_social_values_are_empty() {
        let mut head = HeadTagSet::new();
        apply(&mut head, &PageMetadata::new("Bare"));

        assert_eq!(head.get(&TagKey::property("og:description")), Some(""));
        assert_eq!(head.get(&TagKey::property("og:image")), Some(""));
        assert_eq!(head.get(&TagKey::property("og:url")), Some(""));
        assert_eq!(head.get(&TagKey::name("twitter:image")), Some(""));
        assert!(!head.contains(&TagKey::property("og:site_name")));
        assert!(!head.contains(&TagKey::name("description")));
        assert!(!head.contains(&TagKey::name("keywords")));
    }

    #[test]
    fn test_previous_page_values_do_not_survive() {
        let mut head = HeadTagSet::new();
        apply(&mut head, &website_meta().keywords(["x"]));
        apply(&mut head, &PageMetadata::new("Next"));

        assert!(!head.contains(&TagKey::name("description")));
        assert!(!head.contains(&TagKey::name("keywords")));
        assert!(!head.contains(&TagKey::link("canonical")));
        assert!(!head.contains(&TagKey::property("og:locale")));
        assert_eq!(head.get(&TagKey::property("og:title")), Some("Next"));
    }

    #[test]
    fn test_twitter_site_follows_metadata() {
        let mut head = HeadTagSet::new();
        let meta = PageMetadata {
            twitter_site: Some("@seokit".into()),
            ..website_meta()
        };
        apply(&mut head, &meta);
        assert_eq!(head.get(&TagKey::name("twitter:site")), Some("@seokit"));

        apply(&mut head, &website_meta());
        assert!(!head.contains(&TagKey::name("twitter:site")));
    }

    #[test]
    fn test_article_tags() {
        let meta = PageMetadata {
            author: Some("Alice".into()),
            published_at: Some("2024-01-01T00:00:00Z".into()),
            ..PageMetadata::new("Post").page_type(PageType::Article)
        };
        let mut head = HeadTagSet::new();
        apply(&mut head, &meta);

        assert_eq!(head.get(&TagKey::name("author")), Some("Alice"));
        assert_eq!(
            head.get(&TagKey::property("article:published_time")),
            Some("2024-01-01T00:00:00Z")
        );
        assert!(!head.contains(&TagKey::property("article:modified_time")));

        // Article tags persist until cleared.
        apply(&mut head, &PageMetadata::new("Home"));
        assert_eq!(head.get(&TagKey::name("author")), Some("Alice"));
    }

    #[test]
    fn test_article_fields_ignored_for_other_types() {
        let meta = PageMetadata {
            author: Some("Alice".into()),
            ..PageMetadata::new("Profile").page_type(PageType::Profile)
        };
        let mut head = HeadTagSet::new();
        apply(&mut head, &meta);
        assert!(!head.contains(&TagKey::name("author")));
    }

    #[test]
    fn test_clear_keeps_title_and_scripts() {
        let mut head = HeadTagSet::new();
        head.upsert_script("structured-data-home", "{}");
        head.upsert_meta_tag(MetaAttr::Name, "viewport", "width=device-width");
        apply(
            &mut head,
            &PageMetadata {
                author: Some("A".into()),
                published_at: Some("2024-01-01".into()),
                ..website_meta().keywords(["k"]).page_type(PageType::Article)
            },
        );

        TagSynchronizer::new(&mut head).clear_all_tags();

        assert_eq!(head.title(), Some("Test Title"));
        let remaining: Vec<_> = head.iter().map(|t| t.key.clone()).collect();
        assert_eq!(
            remaining,
            [TagKey::script("structured-data-home"), TagKey::name("viewport")]
        );
    }
}
