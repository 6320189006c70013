//! Keyed set of document head elements.
//!
//! Every element is addressed by a [`TagKey`]; the set never holds two
//! elements with the same key. Upserting an existing key removes the old
//! element and appends the new one, so rendering order follows the order of
//! the most recent writes.

use std::fmt;

use crate::utils::html::{escape, escape_attr, escape_script};

/// Attribute that identifies a `<meta>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaAttr {
    Name,
    Property,
}

impl MetaAttr {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

/// Stable identity of a head element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagKey {
    /// `<meta name="…">`
    Name(String),
    /// `<meta property="…">`
    Property(String),
    /// `<link rel="…">`
    Link(String),
    /// `<script type="application/ld+json" id="…">`
    Script(String),
}

impl TagKey {
    pub fn meta(attr: MetaAttr, key: &str) -> Self {
        match attr {
            MetaAttr::Name => Self::Name(key.to_string()),
            MetaAttr::Property => Self::Property(key.to_string()),
        }
    }

    pub fn name(key: &str) -> Self {
        Self::Name(key.to_string())
    }

    pub fn property(key: &str) -> Self {
        Self::Property(key.to_string())
    }

    pub fn link(rel: &str) -> Self {
        Self::Link(rel.to_string())
    }

    pub fn script(id: &str) -> Self {
        Self::Script(id.to_string())
    }
}

impl fmt::Display for TagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(k) => write!(f, "meta[name={k}]"),
            Self::Property(k) => write!(f, "meta[property={k}]"),
            Self::Link(k) => write!(f, "link[rel={k}]"),
            Self::Script(k) => write!(f, "script#{k}"),
        }
    }
}

/// One head element: its key plus the content, href or JSON payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadTag {
    pub key: TagKey,
    pub value: String,
}

impl HeadTag {
    /// Serialize as HTML, escaping attribute values and script content.
    pub fn to_html(&self) -> String {
        let value = &self.value;
        match &self.key {
            TagKey::Name(k) => format!(
                r#"<meta name="{}" content="{}">"#,
                escape_attr(k),
                escape_attr(value)
            ),
            TagKey::Property(k) => format!(
                r#"<meta property="{}" content="{}">"#,
                escape_attr(k),
                escape_attr(value)
            ),
            TagKey::Link(rel) => format!(
                r#"<link rel="{}" href="{}">"#,
                escape_attr(rel),
                escape_attr(value)
            ),
            TagKey::Script(id) => format!(
                r#"<script type="application/ld+json" id="{}">{}</script>"#,
                escape_attr(id),
                escape_script(value)
            ),
        }
    }
}

/// The managed portion of a document head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadTagSet {
    title: Option<String>,
    tags: Vec<HeadTag>,
}

impl HeadTagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Insert or replace `<meta {attr}="{key}" content="{content}">`.
    pub fn upsert_meta_tag(&mut self, attr: MetaAttr, key: &str, content: &str) {
        self.upsert(TagKey::meta(attr, key), content);
    }

    pub fn remove_meta_tag(&mut self, attr: MetaAttr, key: &str) {
        self.remove(&TagKey::meta(attr, key));
    }

    /// Insert or replace `<link rel="{rel}" href="{href}">`.
    pub fn upsert_link(&mut self, rel: &str, href: &str) {
        self.upsert(TagKey::link(rel), href);
    }

    pub fn remove_link(&mut self, rel: &str) {
        self.remove(&TagKey::link(rel));
    }

    /// Insert or replace a JSON-LD script element with id `id`.
    pub fn upsert_script(&mut self, id: &str, json: &str) {
        self.upsert(TagKey::script(id), json);
    }

    pub fn remove_script(&mut self, id: &str) {
        self.remove(&TagKey::script(id));
    }

    /// Remove then append; the key ends up last in render order.
    pub fn upsert(&mut self, key: TagKey, value: &str) {
        self.remove(&key);
        self.tags.push(HeadTag {
            key,
            value: value.to_string(),
        });
    }

    /// Remove the element with `key`. Returns whether one existed.
    pub fn remove(&mut self, key: &TagKey) -> bool {
        let before = self.tags.len();
        self.tags.retain(|tag| &tag.key != key);
        self.tags.len() != before
    }

    /// Keep only the elements whose key satisfies `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&TagKey) -> bool) {
        self.tags.retain(|tag| keep(&tag.key));
    }

    pub fn get(&self, key: &TagKey) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| &tag.key == key)
            .map(|tag| tag.value.as_str())
    }

    pub fn contains(&self, key: &TagKey) -> bool {
        self.tags.iter().any(|tag| &tag.key == key)
    }

    /// Number of keyed elements, title excluded.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeadTag> {
        self.tags.iter()
    }

    /// Serialize title and elements, one per line.
    pub fn render_html(&self) -> String {
        let mut lines = Vec::with_capacity(self.tags.len() + 1);
        if let Some(title) = &self.title {
            lines.push(format!("<title>{}</title>", escape(title)));
        }
        lines.extend(self.tags.iter().map(HeadTag::to_html));
        lines.join("\n")
    }
}

impl<'a> IntoIterator for &'a HeadTagSet {
    type Item = &'a HeadTag;
    type IntoIter = std::slice::Iter<'a, HeadTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}
