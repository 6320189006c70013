//! Canonical SEO record for one page.

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;

/// Open Graph object type of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    #[default]
    Website,
    Article,
    Profile,
    Product,
}

impl PageType {
    /// Value written to `og:type`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
            Self::Profile => "profile",
            Self::Product => "product",
        }
    }
}

/// SEO metadata of a page, produced by a resolver and applied once by the
/// tag synchronizer.
///
/// # Fields
///
/// | Field               | Applies to          | Tags                                   |
/// |---------------------|---------------------|----------------------------------------|
/// | `title`             | all                 | `<title>`, `og:title`, `twitter:title` |
/// | `description`       | all                 | `description`, `og:`/`twitter:` desc   |
/// | `keywords`          | all                 | `keywords` (joined with `", "`)        |
/// | `image`             | all                 | `og:image`, `twitter:image`            |
/// | `url`               | all                 | canonical link, `og:url`               |
/// | `page_type`         | all                 | `og:type`                              |
/// | `suppress_indexing` | all                 | `robots`                               |
/// | `author`            | `PageType::Article` | `author`                               |
/// | `published_at`      | `PageType::Article` | `article:published_time`               |
/// | `modified_at`       | `PageType::Article` | `article:modified_time`                |
/// | `site_name`         | all                 | `og:site_name`                         |
/// | `locale`            | all                 | `og:locale`                            |
/// | `twitter_site`      | all                 | `twitter:site`                         |
///
/// All values are plain single-line text; markup escaping happens when the
/// head is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub image: Option<String>,
    pub url: Option<String>,
    pub page_type: PageType,
    pub suppress_indexing: bool,
    pub author: Option<String>,
    pub published_at: Option<String>,
    pub modified_at: Option<String>,
    pub site_name: Option<String>,
    pub locale: Option<String>,
    pub twitter_site: Option<String>,
}

impl PageMetadata {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub const fn page_type(mut self, page_type: PageType) -> Self {
        self.page_type = page_type;
        self
    }

    pub const fn suppress_indexing(mut self, suppress: bool) -> Self {
        self.suppress_indexing = suppress;
        self
    }

    /// Fill `image`, `site_name`, `locale` and `twitter_site` from site config
    /// where absent.
    pub fn with_site_defaults(mut self, config: &SiteConfig) -> Self {
        let site = &config.site;
        if self.image.is_none() && !site.default_image.is_empty() {
            self.image = Some(site.default_image.clone());
        }
        if self.site_name.is_none() {
            self.site_name = Some(site.name.clone());
        }
        if self.locale.is_none() {
            self.locale = Some(site.locale.clone());
        }
        if self.twitter_site.is_none() {
            self.twitter_site = site.twitter.clone().filter(|handle| !handle.trim().is_empty());
        }
        self
    }

    pub fn is_article(&self) -> bool {
        self.page_type == PageType::Article
    }
}
